//! Explicit request validation, run before the domain services are invoked.
//!
//! Each request body exposes a `validate()` that returns every field error at
//! once rather than failing on the first.

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Minimum accepted password length, checked here so the account service can
/// assume it.
pub const PASSWORD_MIN_LENGTH: usize = 8;

pub fn check_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.len() < PASSWORD_MIN_LENGTH {
        errors.push(FieldError::new(
            "password",
            "password must be longer than or equal to 8 characters",
        ));
    }
}
