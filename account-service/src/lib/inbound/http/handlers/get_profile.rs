use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::profile::models::ProfilePayload;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    state
        .profile_service
        .get_profile(&auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref payload| {
            ApiSuccess::new(
                StatusCode::OK,
                ProfileResponseData::new("Profile has been found successfully", payload),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub message: String,
    pub data: ProfileData,
}

impl ProfileResponseData {
    pub fn new(message: &str, payload: &ProfilePayload) -> Self {
        Self {
            message: message.to_string(),
            data: payload.into(),
        }
    }
}

/// Profile fields merged with the owning user's identity fields.
///
/// Absent profile fields are omitted from the JSON rather than serialized as
/// null or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horoscope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

impl From<&ProfilePayload> for ProfileData {
    fn from(payload: &ProfilePayload) -> Self {
        Self {
            email: payload.email.clone(),
            username: payload.username.clone(),
            name: payload.name.clone(),
            birthday: payload.birthday.clone(),
            horoscope: payload.horoscope.map(|s| s.as_str().to_string()),
            zodiac: payload.zodiac.map(|z| z.as_str().to_string()),
            height: payload.height,
            weight: payload.weight,
            interests: payload.interests.clone(),
        }
    }
}
