use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::LoginCommand;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::check_password;
use crate::inbound::http::validation::FieldError;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = body.validate()?;

    let session = state
        .account_service
        .login(command)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "User has been logged in successfully".to_string(),
            access_token: session.access_token,
        },
    ))
}

/// HTTP request body for login (raw JSON)
///
/// Either identifier may be omitted; requiring at least one is the account
/// service's job, not validation's.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    username: Option<String>,
    password: String,
}

impl LoginRequestBody {
    fn validate(self) -> Result<LoginCommand, Vec<FieldError>> {
        let mut errors = Vec::new();
        check_password(&self.password, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LoginCommand {
            email: self.email,
            username: self.username,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub access_token: String,
}
