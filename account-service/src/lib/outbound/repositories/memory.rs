//! In-memory adapters backing the black-box API tests and local runs
//! without a database. They enforce the same uniqueness rules as the
//! Postgres schema.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::ports::ProfileRepository;
use crate::domain::user::errors::AccountError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, AccountError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AccountError::DatabaseError("user store lock poisoned".to_string()))?;

        if users.iter().any(|u| {
            u.email.as_str() == user.email.as_str() || u.username.as_str() == user.username.as_str()
        }) {
            return Err(AccountError::AlreadyExists);
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AccountError> {
        let users = self
            .users
            .read()
            .map_err(|_| AccountError::DatabaseError("user store lock poisoned".to_string()))?;
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let users = self
            .users
            .read()
            .map_err(|_| AccountError::DatabaseError("user store lock poisoned".to_string()))?;
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AccountError> {
        let users = self
            .users
            .read()
            .map_err(|_| AccountError::DatabaseError("user store lock poisoned".to_string()))?;
        Ok(users
            .iter()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }

    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, AccountError> {
        let users = self
            .users
            .read()
            .map_err(|_| AccountError::DatabaseError("user store lock poisoned".to_string()))?;
        Ok(users
            .iter()
            .find(|u| u.email.as_str() == email || u.username.as_str() == username)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<Uuid, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_owner(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| ProfileError::DatabaseError("profile store lock poisoned".to_string()))?;
        Ok(profiles.get(&user_id.0).cloned())
    }

    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| ProfileError::DatabaseError("profile store lock poisoned".to_string()))?;
        profiles.insert(profile.user_id.0, profile.clone());
        Ok(profile)
    }
}
