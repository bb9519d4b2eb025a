use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::ports::ProfileRepository;
use crate::domain::user::models::UserId;

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    name: Option<String>,
    birthday: Option<String>,
    horoscope: String,
    zodiac: String,
    height: Option<i32>,
    weight: Option<i32>,
    interests: Option<Vec<String>>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = ProfileError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        // Stored sign names include the "Error" sentinel; anything else in
        // these columns means the row was written outside this service.
        let horoscope = row
            .horoscope
            .parse()
            .map_err(|e: crate::domain::astrology::errors::BirthDateError| {
                ProfileError::DatabaseError(e.to_string())
            })?;
        let zodiac = row
            .zodiac
            .parse()
            .map_err(|e: crate::domain::astrology::errors::BirthDateError| {
                ProfileError::DatabaseError(e.to_string())
            })?;

        Ok(Profile {
            user_id: UserId(row.user_id),
            name: row.name,
            birthday: row.birthday,
            horoscope,
            zodiac,
            height: row.height,
            weight: row.weight,
            interests: row.interests,
        })
    }
}

fn db_error(e: sqlx::Error) -> ProfileError {
    ProfileError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_owner(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            "SELECT user_id, name, birthday, horoscope, zodiac, height, weight, interests \
             FROM profiles WHERE user_id = $1",
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(Profile::try_from).transpose()
    }

    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError> {
        // Full replace: every column is overwritten, so fields absent from
        // the update become NULL even when a previous document had them.
        sqlx::query(
            "INSERT INTO profiles (user_id, name, birthday, horoscope, zodiac, height, weight, interests) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (user_id) DO UPDATE SET \
                name = EXCLUDED.name, \
                birthday = EXCLUDED.birthday, \
                horoscope = EXCLUDED.horoscope, \
                zodiac = EXCLUDED.zodiac, \
                height = EXCLUDED.height, \
                weight = EXCLUDED.weight, \
                interests = EXCLUDED.interests",
        )
        .bind(profile.user_id.0)
        .bind(&profile.name)
        .bind(&profile.birthday)
        .bind(profile.horoscope.as_str())
        .bind(profile.zodiac.as_str())
        .bind(profile.height)
        .bind(profile.weight)
        .bind(&profile.interests)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(profile)
    }
}
