/// A recognized command form. Everything else in a script is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `set workdir <path>` — rebases later paths.
    Workdir,
    /// `open <path>` — a data input file.
    Open,
    /// `outfile <path>` — an output file.
    Outfile,
    /// `gnuplot ... --output=<path>` — a figure file.
    Gnuplot,
}

/// Strip `word` from the start of `line` when it is followed by at least
/// one whitespace character, returning the rest with that whitespace
/// removed.
fn keyword<'a>(line: &'a str, word: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(word)?;
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        // `openfoo` must not match `open`.
        return None;
    }
    Some(trimmed)
}

/// Extract a path argument: either a double-quoted string (content up to
/// the next quote, spaces allowed) or a bare token ending at whitespace.
/// An unterminated quote, an empty quoted string, or a bare token with an
/// embedded quote is not a valid argument.
fn path_argument(arg: &str) -> Option<&str> {
    if let Some(rest) = arg.strip_prefix('"') {
        match rest.find('"') {
            Some(0) | None => None,
            Some(close) => Some(&rest[..close]),
        }
    } else {
        let end = arg.find(char::is_whitespace).unwrap_or(arg.len());
        let token = &arg[..end];
        if token.is_empty() || token.contains('"') {
            None
        } else {
            Some(token)
        }
    }
}

/// Match a logical line against the four tracked command forms.
///
/// Matching starts at the beginning of the line after optional leading
/// whitespace; keyword spelling and case are exact. For `gnuplot`, any
/// text before the first `--output=` marker is ignored and the path must
/// immediately follow the `=`. Lines that match no form yield `None`.
pub fn match_command(line: &str) -> Option<(Command, &str)> {
    let line = line.trim_start();

    if let Some(rest) = keyword(line, "set") {
        let rest = keyword(rest, "workdir")?;
        return Some((Command::Workdir, path_argument(rest)?));
    }
    if let Some(rest) = keyword(line, "open") {
        return Some((Command::Open, path_argument(rest)?));
    }
    if let Some(rest) = keyword(line, "outfile") {
        return Some((Command::Outfile, path_argument(rest)?));
    }
    if let Some(rest) = keyword(line, "gnuplot") {
        let (_, after) = rest.split_once("--output=")?;
        return Some((Command::Gnuplot, path_argument(after)?));
    }

    None
}
