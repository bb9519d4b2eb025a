use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::AccountError;
use crate::domain::user::models::AuthSession;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::TokenClaims;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AccountServicePort;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<R> AccountService<R>
where
    R: UserRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    /// * `token_ttl_hours` - Bearer token lifetime
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>, token_ttl_hours: i64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_hours,
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AccountError> {
        // Single OR-of-fields lookup; a collision on either field is rejected
        // with the same undifferentiated error. The check-then-insert window
        // is closed by the store's unique indexes, which surface through
        // insert as the same AlreadyExists.
        let existing = self
            .repository
            .find_by_email_or_username(command.email.as_str(), command.username.as_str())
            .await?;

        if existing.is_some() {
            return Err(AccountError::AlreadyExists);
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| AccountError::Password(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.insert(user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthSession, AccountError> {
        if command.email.is_none() && command.username.is_none() {
            return Err(AccountError::MissingIdentifier);
        }

        let mut user = None;

        if let Some(email) = command.email.as_deref() {
            user = self.repository.find_by_email(email).await?;
        }

        // When both identifiers are supplied the username lookup replaces
        // the email result. Clients depend on this precedence.
        if let Some(username) = command.username.as_deref() {
            user = self.repository.find_by_username(username).await?;
        }

        let user = user.ok_or(AccountError::NotFound)?;

        let claims = TokenClaims::for_user(&user, self.token_ttl_hours);

        let result = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                AuthenticationError::PasswordError(err) => AccountError::Password(err.to_string()),
                AuthenticationError::JwtError(err) => AccountError::Token(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthSession {
            access_token: result.access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
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

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(b"test_secret_key_at_least_32_bytes!"))
    }

    fn stored_user(username: &str, email: &str, password: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: auth::PasswordHasher::new().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn register_command(email: &str, username: &str, password: &str) -> RegisterCommand {
        RegisterCommand::new(
            EmailAddress::new(email.to_string()).unwrap(),
            Username::new(username.to_string()).unwrap(),
            password.to_string(),
        )
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email_or_username()
            .with(eq("a@x.com"), eq("alice"))
            .times(1)
            .returning(|_, _| Ok(None));

        repository
            .expect_insert()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.email.as_str() == "a@x.com"
                    && user.password_hash.starts_with("$2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = AccountService::new(Arc::new(repository), authenticator(), 24);

        let result = service
            .register(register_command("a@x.com", "alice", "12345678"))
            .await;
        assert!(result.is_ok());

        let user = result.unwrap();
        assert_eq!(user.username.as_str(), "alice");
        // Password is stored only as a bcrypt hash
        assert_ne!(user.password_hash, "12345678");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email_or_username()
            .times(1)
            .returning(|_, _| Ok(Some(stored_user("other", "a@x.com", "12345678"))));
        repository.expect_insert().times(0);

        let service = AccountService::new(Arc::new(repository), authenticator(), 24);

        let result = service
            .register(register_command("a@x.com", "alice", "12345678"))
            .await;
        assert!(matches!(result, Err(AccountError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_register_duplicate_username_same_error() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email_or_username()
            .times(1)
            .returning(|_, _| Ok(Some(stored_user("alice", "other@x.com", "12345678"))));
        repository.expect_insert().times(0);

        let service = AccountService::new(Arc::new(repository), authenticator(), 24);

        let result = service
            .register(register_command("a@x.com", "alice", "12345678"))
            .await;

        // Same error kind and message as a duplicate email; the colliding
        // field is never distinguished.
        let err = result.unwrap_err();
        assert!(matches!(err, AccountError::AlreadyExists));
        assert_eq!(err.to_string(), "User already exists");
    }

    #[tokio::test]
    async fn test_login_with_email_success() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("alice", "a@x.com", "12345678");
        repository
            .expect_find_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_find_by_username().times(0);

        let service = AccountService::new(Arc::new(repository), authenticator(), 24);

        let session = service
            .login(LoginCommand {
                email: Some("a@x.com".to_string()),
                username: None,
                password: "12345678".to_string(),
            })
            .await
            .expect("login failed");

        assert!(!session.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_token_round_trips_claims() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("alice", "a@x.com", "12345678");
        let expected_id = user.id.to_string();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let authenticator = authenticator();
        let service = AccountService::new(Arc::new(repository), Arc::clone(&authenticator), 24);

        let session = service
            .login(LoginCommand {
                email: None,
                username: Some("alice".to_string()),
                password: "12345678".to_string(),
            })
            .await
            .expect("login failed");

        let claims: TokenClaims = authenticator
            .validate_token(&session.access_token)
            .expect("token should decode");
        assert_eq!(claims.id, expected_id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.email, "a@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn test_login_username_lookup_replaces_email_match() {
        let mut repository = MockTestUserRepository::new();

        // The email lookup finds a user, but the username lookup misses and
        // overwrites the result: login fails with NotFound.
        let user = stored_user("alice", "a@x.com", "12345678");
        repository
            .expect_find_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_find_by_username()
            .with(eq("nosuchuser"))
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository), authenticator(), 24);

        let result = service
            .login(LoginCommand {
                email: Some("a@x.com".to_string()),
                username: Some("nosuchuser".to_string()),
                password: "12345678".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::NotFound)));
    }

    #[tokio::test]
    async fn test_login_missing_identifier() {
        let repository = MockTestUserRepository::new();
        let service = AccountService::new(Arc::new(repository), authenticator(), 24);

        let result = service
            .login(LoginCommand {
                email: None,
                username: None,
                password: "12345678".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::MissingIdentifier)));
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository), authenticator(), 24);

        let result = service
            .login(LoginCommand {
                email: Some("ghost@x.com".to_string()),
                username: None,
                password: "12345678".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::NotFound)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("alice", "a@x.com", "12345678");
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AccountService::new(Arc::new(repository), authenticator(), 24);

        let result = service
            .login(LoginCommand {
                email: None,
                username: Some("alice".to_string()),
                password: "wrong-password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }
}
