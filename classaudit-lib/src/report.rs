//! The per-class report and its text rendering.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

const TITLE: &str = "Unique Classes and Their Current Styles:";
const SEPARATOR: &str = "-------------------------";

/// A rule body for a class, together with the stylesheet that defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetMatch {
    pub stylesheet: PathBuf,
    pub rule_body: String,
}

/// Everything known about one class token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassUsage {
    pub token: String,
    /// Non-empty inline styles of the elements carrying the token. Repeats are kept.
    pub inline_styles: Vec<String>,
    /// Documents the token appears in, deduplicated, in first-seen order.
    pub files: Vec<PathBuf>,
    pub stylesheet_matches: Vec<StylesheetMatch>,
}

impl ClassUsage {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            inline_styles: Vec::new(),
            files: Vec::new(),
            stylesheet_matches: Vec::new(),
        }
    }
}

/// Class usages in first-seen token order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub classes: Vec<ClassUsage>,
}

impl Report {
    pub fn get(&self, token: &str) -> Option<&ClassUsage> {
        self.classes.iter().find(|usage| usage.token == token)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Class: .{}", self.token)?;
        for style in &self.inline_styles {
            writeln!(f, "  Inline Style: {}", style)?;
        }
        for found in &self.stylesheet_matches {
            writeln!(f, "  Style in {}: {}", found.stylesheet.display(), found.rule_body)?;
        }
        let files = self
            .files
            .iter()
            .map(|file| file.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "  Found in files: {}", files)?;
        writeln!(f, "{}", SEPARATOR)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f)?;
        for usage in &self.classes {
            write!(f, "{}", usage)?;
        }
        Ok(())
    }
}

/// Writes the rendered report to `out`.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    write!(out, "{}", report)?;
    out.flush()
}
