use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SyntaxError;

/// Token naming the last row of the data being sliced.
pub const LAST_ROW_TOKEN: &str = "e";

/// A row position in notation.
///
/// Row numbers are **1-indexed**; `Last` stands for the final row and is only resolved once the
/// row count of the sliced data is known.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowRef {
    /// 1-indexed row number (always `> 0`).
    Index(usize),
    /// The last row (`e`).
    Last,
}

impl RowRef {
    /// Resolve to a concrete 1-indexed row number for data with `row_count` rows.
    #[inline]
    pub const fn resolve(self, row_count: usize) -> usize {
        match self {
            RowRef::Index(n) => n,
            RowRef::Last => row_count,
        }
    }
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRef::Index(n) => write!(f, "{n}"),
            RowRef::Last => f.write_str(LAST_ROW_TOKEN),
        }
    }
}

/// One side of a segment: `row.col`, `row`, `.col`, or nothing at all.
///
/// A missing component is resolved by context (start of data, end of data, or "same as the
/// other side").
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    pub row: Option<RowRef>,
    /// 1-indexed column number (always `> 0`).
    pub col: Option<usize>,
}

impl Locator {
    #[inline]
    pub const fn new(row: Option<RowRef>, col: Option<usize>) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(row: usize) -> Self {
        Self::new(Some(RowRef::Index(row)), None)
    }

    #[inline]
    pub const fn cell(row: usize, col: usize) -> Self {
        Self::new(Some(RowRef::Index(row)), Some(col))
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.row.is_none() && self.col.is_none()
    }

    /// Parse a single locator token as it appears in `notation`.
    pub(crate) fn parse(text: &str, notation: &str) -> Result<Self, SyntaxError> {
        if text.is_empty() {
            return Ok(Self::default());
        }

        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() > 2 {
            return Err(SyntaxError::TooManyParts {
                token: text.to_string(),
                notation: notation.to_string(),
            });
        }

        let row = match parts[0] {
            "" => None,
            part if part.trim() == LAST_ROW_TOKEN => Some(RowRef::Last),
            part => Some(RowRef::Index(parse_number(part, text, notation)?)),
        };

        // `e` in column position has no meaning of its own and is dropped.
        let col = match parts.get(1).copied() {
            None | Some("") => None,
            Some(part) if part.trim() == LAST_ROW_TOKEN => None,
            Some(part) => Some(parse_number(part, text, notation)?),
        };

        Ok(Self { row, col })
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(row) = self.row {
            write!(f, "{row}")?;
        }
        if let Some(col) = self.col {
            write!(f, ".{col}")?;
        }
        Ok(())
    }
}

/// Parse a positive integer component. Values past `usize::MAX` saturate, since they can only
/// ever select past the end of the data.
fn parse_number(part: &str, token: &str, notation: &str) -> Result<usize, SyntaxError> {
    let trimmed = part.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SyntaxError::InvalidNumber {
            token: token.to_string(),
            notation: notation.to_string(),
        });
    }
    if digits.bytes().all(|b| b == b'0') {
        return Err(SyntaxError::NonPositive {
            token: token.to_string(),
            notation: notation.to_string(),
        });
    }
    Ok(digits.parse().unwrap_or(usize::MAX))
}
