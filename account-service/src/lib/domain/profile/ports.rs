use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfilePayload;
use crate::domain::profile::models::UpdateProfileCommand;
use crate::domain::user::models::UserId;

/// Port for profile read and update operations.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// Fetch the merged profile payload for a user.
    ///
    /// The user must exist; the profile may be absent, in which case all
    /// profile-specific fields come back absent rather than defaulted.
    ///
    /// # Errors
    /// * `UserNotFound` - Owning user does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_profile(&self, user_id: &UserId) -> Result<ProfilePayload, ProfileError>;

    /// Create or fully replace the user's profile.
    ///
    /// The horoscope and zodiac are recomputed from the supplied birthday on
    /// every call; they are never accepted as input.
    ///
    /// # Errors
    /// * `UserNotFound` - Owning user does not exist
    /// * `DatabaseError` - Store operation failed
    async fn update_profile(
        &self,
        user_id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<ProfilePayload, ProfileError>;
}

/// Persistence operations for the profile aggregate.
#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    /// Retrieve the profile owned by a user (None if not created yet).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_owner(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileError>;

    /// Create-or-replace the profile keyed by its owning user.
    ///
    /// Every stored field is overwritten with the given document.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;
}
