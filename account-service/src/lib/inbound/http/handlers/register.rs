use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponse;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::check_password;
use crate::inbound::http::validation::FieldError;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let command = body.validate()?;

    state
        .account_service
        .register(command)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        MessageResponse::new("User has been created successfully"),
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    email: String,
    username: String,
    password: String,
}

impl RegisterRequestBody {
    /// Validate every field, collecting all errors before building the
    /// command.
    fn validate(self) -> Result<RegisterCommand, Vec<FieldError>> {
        let mut errors = Vec::new();

        let email = match EmailAddress::new(self.email) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push(FieldError::new("email", e.to_string()));
                None
            }
        };

        let username = match Username::new(self.username) {
            Ok(username) => Some(username),
            Err(e) => {
                errors.push(FieldError::new("username", e.to_string()));
                None
            }
        };

        check_password(&self.password, &mut errors);

        if let (Some(email), Some(username), true) = (email, username, errors.is_empty()) {
            return Ok(RegisterCommand::new(email, username, self.password));
        }
        Err(errors)
    }
}
