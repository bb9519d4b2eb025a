use async_trait::async_trait;

use crate::domain::user::errors::AccountError;
use crate::domain::user::models::AuthSession;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for account (registration and login) operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// No token is issued here; login is a separate subsequent call.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, username, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `AlreadyExists` - Email or username is already taken (undistinguished)
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AccountError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `command` - Email and/or username plus password
    ///
    /// # Returns
    /// AuthSession carrying the signed token
    ///
    /// # Errors
    /// * `MissingIdentifier` - Neither email nor username was supplied
    /// * `NotFound` - No user matched the identifier
    /// * `InvalidCredentials` - Password did not match
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, command: LoginCommand) -> Result<AuthSession, AccountError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user to storage.
    ///
    /// # Errors
    /// * `AlreadyExists` - A store-level uniqueness constraint was violated
    /// * `DatabaseError` - Store operation failed
    async fn insert(&self, user: User) -> Result<User, AccountError>;

    /// Retrieve a user by identifier (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AccountError>;

    /// Retrieve a user by email address (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;

    /// Retrieve a user by username (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AccountError>;

    /// Retrieve a user matching either email OR username in one lookup.
    ///
    /// Used by the registration uniqueness check; which field collided is
    /// not reported.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, AccountError>;
}
