use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::astrology;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfilePayload;
use crate::domain::profile::models::UpdateProfileCommand;
use crate::domain::profile::ports::ProfileRepository;
use crate::domain::profile::ports::ProfileServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for profile operations.
///
/// Collaborates with the user store for the ownership check and payload
/// merge, and with the astrology calculator for the derived attributes.
pub struct ProfileService<UR, PR>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    users: Arc<UR>,
    profiles: Arc<PR>,
}

impl<UR, PR> ProfileService<UR, PR>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    /// Create a new profile service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `profiles` - Profile persistence implementation
    pub fn new(users: Arc<UR>, profiles: Arc<PR>) -> Self {
        Self { users, profiles }
    }
}

#[async_trait]
impl<UR, PR> ProfileServicePort for ProfileService<UR, PR>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    async fn get_profile(&self, user_id: &UserId) -> Result<ProfilePayload, ProfileError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(ProfileError::from)?
            .ok_or(ProfileError::UserNotFound)?;

        let profile = self.profiles.find_by_owner(user_id).await?;

        Ok(ProfilePayload::from_parts(&user, profile.as_ref()))
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<ProfilePayload, ProfileError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(ProfileError::from)?
            .ok_or(ProfileError::UserNotFound)?;

        // Derivation happens whether or not a birthday was supplied; an
        // absent birthday stores the Error sentinels, overwriting any
        // previously valid values.
        let (horoscope, zodiac) = astrology::derive(command.birthday.as_deref());

        let profile = Profile {
            user_id: *user_id,
            name: command.name,
            birthday: command.birthday,
            horoscope,
            zodiac,
            height: command.height,
            weight: command.weight,
            interests: command.interests,
        };

        let stored = self.profiles.upsert(profile).await?;

        tracing::info!(user_id = %user_id, "Profile upserted");

        Ok(ProfilePayload::from_parts(&user, Some(&stored)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::astrology::HoroscopeSign;
    use crate::domain::astrology::ZodiacAnimal;
    use crate::domain::user::errors::AccountError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::User;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn insert(&self, user: User) -> Result<User, AccountError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AccountError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<User>, AccountError>;
            async fn find_by_email_or_username(
                &self,
                email: &str,
                username: &str,
            ) -> Result<Option<User>, AccountError>;
        }
    }

    mock! {
        pub TestProfileRepository {}

        #[async_trait]
        impl ProfileRepository for TestProfileRepository {
            async fn find_by_owner(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileError>;
            async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;
        }
    }

    fn test_user(id: UserId) -> User {
        User {
            id,
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            password_hash: "$2b$10$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_profile_without_profile_returns_user_fields_only() {
        let mut users = MockTestUserRepository::new();
        let mut profiles = MockTestProfileRepository::new();

        let user_id = UserId::new();
        let user = test_user(user_id);
        users
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        profiles
            .expect_find_by_owner()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(users), Arc::new(profiles));

        let payload = service.get_profile(&user_id).await.expect("get failed");

        assert_eq!(payload.email, "a@x.com");
        assert_eq!(payload.username, "alice");
        assert!(payload.name.is_none());
        assert!(payload.birthday.is_none());
        assert!(payload.horoscope.is_none());
        assert!(payload.zodiac.is_none());
        assert!(payload.height.is_none());
        assert!(payload.weight.is_none());
        assert!(payload.interests.is_none());
    }

    #[tokio::test]
    async fn test_get_profile_user_not_found() {
        let mut users = MockTestUserRepository::new();
        let profiles = MockTestProfileRepository::new();

        users.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(users), Arc::new(profiles));

        let result = service.get_profile(&UserId::new()).await;
        assert!(matches!(result, Err(ProfileError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_update_profile_creates_and_derives() {
        let mut users = MockTestUserRepository::new();
        let mut profiles = MockTestProfileRepository::new();

        let user_id = UserId::new();
        let user = test_user(user_id);
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        profiles
            .expect_upsert()
            .withf(move |profile| {
                profile.user_id == user_id
                    && profile.name.as_deref() == Some("test")
                    && profile.birthday.as_deref() == Some("1999-02-30")
                    && profile.horoscope == HoroscopeSign::Pisces
                    && profile.zodiac == ZodiacAnimal::Rabbit
                    && profile.height == Some(170)
                    && profile.weight == Some(60)
            })
            .times(1)
            .returning(|profile| Ok(profile));

        let service = ProfileService::new(Arc::new(users), Arc::new(profiles));

        let payload = service
            .update_profile(
                &user_id,
                UpdateProfileCommand {
                    name: Some("test".to_string()),
                    birthday: Some("1999-02-30".to_string()),
                    height: Some(170),
                    weight: Some(60),
                    interests: Some(vec!["coding".to_string()]),
                },
            )
            .await
            .expect("update failed");

        assert_eq!(payload.name.as_deref(), Some("test"));
        assert_eq!(payload.birthday.as_deref(), Some("1999-02-30"));
        assert_eq!(payload.horoscope, Some(HoroscopeSign::Pisces));
        assert_eq!(payload.zodiac, Some(ZodiacAnimal::Rabbit));
        assert_eq!(payload.height, Some(170));
        assert_eq!(payload.weight, Some(60));
        assert_eq!(payload.interests, Some(vec!["coding".to_string()]));
    }

    #[tokio::test]
    async fn test_update_profile_without_birthday_stores_error_sentinels() {
        let mut users = MockTestUserRepository::new();
        let mut profiles = MockTestProfileRepository::new();

        let user_id = UserId::new();
        let user = test_user(user_id);
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        // A previously valid horoscope/zodiac would be silently overwritten
        // here; the update carries no birthday so derivation falls to the
        // sentinels.
        profiles
            .expect_upsert()
            .withf(|profile| {
                profile.birthday.is_none()
                    && profile.horoscope == HoroscopeSign::Error
                    && profile.zodiac == ZodiacAnimal::Error
            })
            .times(1)
            .returning(|profile| Ok(profile));

        let service = ProfileService::new(Arc::new(users), Arc::new(profiles));

        let payload = service
            .update_profile(
                &user_id,
                UpdateProfileCommand {
                    name: Some("test".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update failed");

        assert_eq!(payload.horoscope, Some(HoroscopeSign::Error));
        assert_eq!(payload.zodiac, Some(ZodiacAnimal::Error));
    }

    #[tokio::test]
    async fn test_update_profile_replaces_unlisted_fields() {
        let mut users = MockTestUserRepository::new();
        let mut profiles = MockTestProfileRepository::new();

        let user_id = UserId::new();
        let user = test_user(user_id);
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        // Full-replace semantics: the upserted document contains exactly the
        // supplied fields, so an earlier height/weight would be dropped.
        profiles
            .expect_upsert()
            .withf(|profile| {
                profile.name.as_deref() == Some("renamed")
                    && profile.height.is_none()
                    && profile.weight.is_none()
                    && profile.interests.is_none()
            })
            .times(1)
            .returning(|profile| Ok(profile));

        let service = ProfileService::new(Arc::new(users), Arc::new(profiles));

        let payload = service
            .update_profile(
                &user_id,
                UpdateProfileCommand {
                    name: Some("renamed".to_string()),
                    birthday: Some("1996-08-13".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update failed");

        assert_eq!(payload.horoscope, Some(HoroscopeSign::Leo));
        assert_eq!(payload.zodiac, Some(ZodiacAnimal::Rat));
        assert!(payload.height.is_none());
    }

    #[tokio::test]
    async fn test_update_profile_user_not_found() {
        let mut users = MockTestUserRepository::new();
        let profiles = MockTestProfileRepository::new();

        users.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(users), Arc::new(profiles));

        let result = service
            .update_profile(&UserId::new(), UpdateProfileCommand::default())
            .await;
        assert!(matches!(result, Err(ProfileError::UserNotFound)));
    }
}
