use thiserror::Error;

/// Error from parsing a user-entered amount.
///
/// Detected locally, before any network call; callers block submission and
/// prompt for a corrected value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount: {0}")]
    Invalid(String),
    #[error("negative amount: {0}")]
    Negative(String),
    #[error("amount too large: {0}")]
    TooLarge(String),
}
