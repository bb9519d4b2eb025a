use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_profile::ProfileResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::profile::models::UpdateProfileCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateProfileRequestBody>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    state
        .profile_service
        .update_profile(&auth_user.user_id, body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref payload| {
            ApiSuccess::new(
                StatusCode::OK,
                ProfileResponseData::new("Profile has been updated successfully", payload),
            )
        })
}

/// HTTP request body for a profile update (raw JSON)
///
/// Every field is optional; whatever subset arrives becomes the entire new
/// profile document. The horoscope and zodiac are never accepted here, they
/// are derived server-side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct UpdateProfileRequestBody {
    name: Option<String>,
    birthday: Option<String>,
    height: Option<i32>,
    weight: Option<i32>,
    interests: Option<Vec<String>>,
}

impl UpdateProfileRequestBody {
    fn into_command(self) -> UpdateProfileCommand {
        UpdateProfileCommand {
            name: self.name,
            birthday: self.birthday,
            height: self.height,
            weight: self.weight,
            interests: self.interests,
        }
    }
}
