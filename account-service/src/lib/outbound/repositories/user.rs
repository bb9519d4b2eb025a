use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::errors::AccountError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

const SELECT_USER: &str = "SELECT id, username, email, password_hash, created_at FROM users";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AccountError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

fn db_error(e: sqlx::Error) -> AccountError {
    AccountError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: User) -> Result<User, AccountError> {
        sqlx::query(
            "INSERT INTO users (id, username, email, password_hash, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The unique indexes close the check-then-insert race; a
            // violation on either column maps to the same undifferentiated
            // error as the pre-check.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::AlreadyExists;
                }
            }
            db_error(e)
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AccountError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_USER))
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("{} WHERE email = $1", SELECT_USER))
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AccountError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("{} WHERE username = $1", SELECT_USER))
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, AccountError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "{} WHERE email = $1 OR username = $2 LIMIT 1",
            SELECT_USER
        ))
        .bind(email)
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(User::try_from).transpose()
    }
}
