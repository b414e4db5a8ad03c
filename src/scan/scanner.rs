use std::collections::BTreeSet;
use std::io;

use super::commands::{match_command, Command};
use super::lines::LogicalLines;
use super::paths::normalize_path;
use super::types::Dependencies;

/// Scans Gretl scripts for file dependencies.
///
/// The scanner feeds each raw line through [`LogicalLines`], classifies
/// the resulting logical lines, and records normalized paths. `set
/// workdir` updates the base directory used for every path recorded
/// after it; it never rewrites paths recorded earlier.
///
/// One scanner instance is meant to process one script end to end.
/// Scanning more input with the same instance accumulates into the
/// existing sets (the working directory also carries over); use a fresh
/// instance per script for independent results.
#[derive(Debug, Default)]
pub struct GretlScanner {
    workdir: String,
    deps: Dependencies,
}

impl GretlScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a fallible line source, such as `BufRead::lines`.
    ///
    /// The only error surfaced is a read failure from the source itself,
    /// which aborts the scan; sets populated before the failure keep
    /// their contents. Malformed script text is never an error.
    pub fn scan<I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        for logical in LogicalLines::new(lines.into_iter()) {
            let line = logical?;
            let Some((command, path)) = match_command(&line) else {
                continue;
            };
            match command {
                Command::Workdir => self.workdir = path.to_string(),
                Command::Open => {
                    self.deps
                        .datafiles
                        .insert(normalize_path(&self.workdir, path));
                }
                Command::Outfile => {
                    self.deps
                        .outfiles
                        .insert(normalize_path(&self.workdir, path));
                }
                Command::Gnuplot => {
                    self.deps
                        .figfiles
                        .insert(normalize_path(&self.workdir, path));
                }
            }
        }
        Ok(())
    }

    /// Scan in-memory script text.
    pub fn scan_str(&mut self, text: &str) {
        // An in-memory source cannot fail to read.
        let _ = self.scan(text.lines().map(|line| Ok(line.to_string())));
    }

    /// Data files read with `open`.
    pub fn datafiles(&self) -> &BTreeSet<String> {
        &self.deps.datafiles
    }

    /// Files written with `outfile`.
    pub fn outfiles(&self) -> &BTreeSet<String> {
        &self.deps.outfiles
    }

    /// Figures produced with `gnuplot --output=`.
    pub fn figfiles(&self) -> &BTreeSet<String> {
        &self.deps.figfiles
    }

    /// The working directory declared by the most recent `set workdir`,
    /// as written in the script; empty if none was seen.
    pub fn workdir(&self) -> &str {
        &self.workdir
    }

    pub fn dependencies(&self) -> &Dependencies {
        &self.deps
    }

    pub fn into_dependencies(self) -> Dependencies {
        self.deps
    }
}
