use thiserror::Error;

/// Errors raised while parsing a row slice notation.
///
/// Every variant carries the offending `token` and the full `notation` it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("too many `.` separated parts in ({token}) in row slice notation {notation}")]
    TooManyParts { token: String, notation: String },
    #[error("too many `-` separated bounds in ({token}) in row slice notation {notation}")]
    TooManyBounds { token: String, notation: String },
    #[error("unknown row/column number ({token}) in row slice notation {notation}")]
    InvalidNumber { token: String, notation: String },
    #[error("row/column number can not be <= 0; detected ({token}) in row slice notation {notation}")]
    NonPositive { token: String, notation: String },
}

impl SyntaxError {
    /// The locator or segment text that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            SyntaxError::TooManyParts { token, .. }
            | SyntaxError::TooManyBounds { token, .. }
            | SyntaxError::InvalidNumber { token, .. }
            | SyntaxError::NonPositive { token, .. } => token,
        }
    }

    /// The complete notation that was being parsed.
    pub fn notation(&self) -> &str {
        match self {
            SyntaxError::TooManyParts { notation, .. }
            | SyntaxError::TooManyBounds { notation, .. }
            | SyntaxError::InvalidNumber { notation, .. }
            | SyntaxError::NonPositive { notation, .. } => notation,
        }
    }
}
