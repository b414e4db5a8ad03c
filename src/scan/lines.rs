use std::io;

/// Iterator adapter that turns physical script lines into logical lines:
/// comments stripped, backslash-continued lines joined.
///
/// Quoted strings are copied through verbatim, so a `#` or `/*` inside
/// quotes is ordinary text. A `/* ... */` block may span physical lines;
/// the open/closed state lives in this adapter, so each instance tracks
/// one script. Single pass, not restartable.
pub struct LogicalLines<I> {
    source: I,
    in_block_comment: bool,
}

/// First comment- or string-like token found in a slice.
enum Found {
    /// Quoted string; `end` is the index just past the closing quote,
    /// or the end of the line when the quote is unterminated.
    Quoted { end: usize },
    /// Complete `/* ... */` contained on this line.
    Block { start: usize, end: usize },
    /// `#` comment running to end of line.
    LineComment { start: usize },
    /// `/*` with no `*/` on this line.
    BlockStart { start: usize },
}

fn find_special(rest: &str) -> Option<Found> {
    let quote = rest.find('"');
    let block = rest.find("/*");
    let hash = rest.find('#');
    let first = [quote, block, hash].into_iter().flatten().min()?;

    if quote == Some(first) {
        let end = match rest[first + 1..].find('"') {
            Some(close) => first + 1 + close + 1,
            None => rest.len(),
        };
        Some(Found::Quoted { end })
    } else if block == Some(first) {
        // First `*/` closes the block; there is no nesting.
        match rest[first + 2..].find("*/") {
            Some(close) => Some(Found::Block {
                start: first,
                end: first + 2 + close + 2,
            }),
            None => Some(Found::BlockStart { start: first }),
        }
    } else {
        Some(Found::LineComment { start: first })
    }
}

impl<I> LogicalLines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(source: I) -> Self {
        Self {
            source,
            in_block_comment: false,
        }
    }

    /// Strip comments from one physical line.
    ///
    /// Returns the retained text and whether the line continues onto the
    /// next physical line. A line comment or an unterminated block
    /// comment discards the rest of the line, including any trailing
    /// backslash, so both suppress continuation.
    fn strip_comments(&mut self, line: &str) -> (String, bool) {
        let mut rest: &str = line;

        if self.in_block_comment {
            match rest.find("*/") {
                None => return (String::new(), false),
                Some(pos) => {
                    self.in_block_comment = false;
                    rest = &rest[pos + 2..];
                }
            }
        }

        // Retained fragments, joined with single spaces so that removing
        // a comment never glues two tokens together.
        let mut parts: Vec<&str> = Vec::new();
        loop {
            match find_special(rest) {
                None => {
                    parts.push(rest);
                    break;
                }
                Some(Found::Quoted { end }) => {
                    parts.push(&rest[..end]);
                    rest = &rest[end..];
                }
                Some(Found::Block { start, end }) => {
                    parts.push(&rest[..start]);
                    rest = &rest[end..];
                }
                Some(Found::LineComment { start }) => {
                    parts.push(&rest[..start]);
                    return (parts.join(" "), false);
                }
                Some(Found::BlockStart { start }) => {
                    parts.push(&rest[..start]);
                    self.in_block_comment = true;
                    return (parts.join(" "), false);
                }
            }
        }

        let joined = parts.join(" ");
        let trimmed = joined.trim_end();
        match trimmed.strip_suffix('\\') {
            Some(head) => (format!("{head} "), true),
            None => (trimmed.to_string(), false),
        }
    }
}

impl<I> Iterator for LogicalLines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut logical = String::new();
        loop {
            let line = match self.source.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            let (cleaned, continued) = self.strip_comments(&line);
            logical.push_str(&cleaned);
            if !continued {
                return Some(Ok(logical));
            }
        }
    }
}
