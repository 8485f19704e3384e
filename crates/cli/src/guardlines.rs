//! Parser for guardlines-style rectangle lists.
//!
//! Format (line oriented)
//! - `#<label>`: starts a new section. Rectangles read so far are flushed under
//!   the previous label (`unnamed` before the first comment).
//! - A line starting with an ASCII digit: the first four integers are
//!   `x y w h`; trailing values (z range) are ignored. Edges must lie within
//!   `±COORD_LIMIT`.
//! - Anything else is skipped. Sections without rectangles are dropped.

use std::fmt;

use regex::Regex;
use zonemerge::{Rect, COORD_LIMIT};

/// Label used until the first `#` line.
pub const DEFAULT_LABEL: &str = "unnamed";

/// A labelled run of rectangles, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub rects: Vec<Rect>,
}

#[derive(Debug)]
pub enum ParseError {
    /// A rectangle line (1-based `line`) carried fewer than four integers.
    TooFewInts { line: usize, found: usize },
    /// An integer did not fit in `i64`.
    BadInt { line: usize, text: String },
    /// `x + w` or `y + h` (or an origin) falls outside `±COORD_LIMIT`.
    OutOfRange { line: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::TooFewInts { line, found } => write!(
                f,
                "line {line}: expected at least 4 integers (x y w h), found {found}"
            ),
            ParseError::BadInt { line, text } => {
                write!(f, "line {line}: integer out of range: {text}")
            }
            ParseError::OutOfRange { line } => write!(
                f,
                "line {line}: rectangle edges exceed \u{b1}{COORD_LIMIT}"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Compiled patterns; build once per run.
pub struct Parser {
    comment: Regex,
    ints: Regex,
}

impl Parser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            comment: Regex::new(r"^#(.+)$")?,
            ints: Regex::new(r"-?[0-9]+")?,
        })
    }

    fn rect(&self, line_no: usize, line: &str) -> Result<Rect, ParseError> {
        let mut vals = [0i64; 4];
        let mut found = 0;
        for m in self.ints.find_iter(line).take(4) {
            vals[found] = m.as_str().parse().map_err(|_| ParseError::BadInt {
                line: line_no,
                text: m.as_str().to_string(),
            })?;
            found += 1;
        }
        if found < 4 {
            return Err(ParseError::TooFewInts {
                line: line_no,
                found,
            });
        }
        Rect::checked_new(vals[0], vals[1], vals[2], vals[3])
            .ok_or(ParseError::OutOfRange { line: line_no })
    }

    /// Split `text` into labelled sections.
    pub fn parse(&self, text: &str) -> Result<Vec<Section>, ParseError> {
        let mut sections = Vec::new();
        let mut current = Section {
            label: DEFAULT_LABEL.to_string(),
            rects: Vec::new(),
        };
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if let Some(caps) = self.comment.captures(line) {
                let label = caps[1].trim().to_string();
                let done = std::mem::replace(
                    &mut current,
                    Section {
                        label,
                        rects: Vec::new(),
                    },
                );
                if !done.rects.is_empty() {
                    sections.push(done);
                }
            } else if line.starts_with(|c: char| c.is_ascii_digit()) {
                current.rects.push(self.rect(idx + 1, line)?);
            }
        }
        if !current.rects.is_empty() {
            sections.push(current);
        }
        Ok(sections)
    }
}
