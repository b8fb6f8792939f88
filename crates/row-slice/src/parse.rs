//! Notation syntax: `segment (',' segment)*` where a segment is `locator` or `locator-locator`.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SyntaxError;
use crate::locator::Locator;

/// One comma-delimited unit of a notation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// A lone locator such as `3` or `3.2`.
    Single(Locator),
    /// A `start-end` range. Either side may be empty (`-5`, `2-`).
    Range { start: Locator, end: Locator },
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // An empty segment would be skipped on re-parse; `.` keeps it.
            Segment::Single(loc) if loc.is_empty() => f.write_str("."),
            Segment::Single(loc) => write!(f, "{loc}"),
            Segment::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

/// Parse `notation` into its segments, in order of appearance.
///
/// Empty segments (as in `1,,2`) are skipped, so the result is empty only when the notation has
/// nothing to select.
pub fn parse(notation: &str) -> Result<Vec<Segment>, SyntaxError> {
    let mut out = Vec::new();
    for raw in notation.split(',') {
        if raw.is_empty() {
            continue;
        }

        let bounds: Vec<&str> = raw.split('-').collect();
        let segment = match bounds.as_slice() {
            [single] => Segment::Single(Locator::parse(single, notation)?),
            [start, end] => Segment::Range {
                start: Locator::parse(start, notation)?,
                end: Locator::parse(end, notation)?,
            },
            _ => {
                return Err(SyntaxError::TooManyBounds {
                    token: raw.to_string(),
                    notation: notation.to_string(),
                })
            }
        };
        out.push(segment);
    }
    Ok(out)
}

/// A parsed notation that can be rendered back to text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notation(Vec<Segment>);

impl Notation {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Notation {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
