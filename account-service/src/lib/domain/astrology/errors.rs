use thiserror::Error;

/// Error for birth date and sign-name parsing failures.
///
/// Note these are only surfaced when converting stored text back into typed
/// values; a malformed birthday supplied by a client does not error, it
/// derives the `Error` sentinels instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BirthDateError {
    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidFormat(String),

    #[error("Unknown sign name: {0}")]
    UnknownSign(String),
}
