use thiserror::Error;

use crate::domain::user::errors::AccountError;

/// Top-level error for profile operations.
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("User Profile not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<AccountError> for ProfileError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::DatabaseError(e) => ProfileError::DatabaseError(e),
            other => ProfileError::Unknown(other.to_string()),
        }
    }
}
