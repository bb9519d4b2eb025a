use crate::domain::astrology::HoroscopeSign;
use crate::domain::astrology::ZodiacAnimal;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Profile aggregate, owned by exactly one user.
///
/// Created lazily on the first update and fully replaced on each subsequent
/// one: fields not supplied in an update are stored absent. The birthday is
/// kept as the raw client string (including invalid calendar dates); the
/// horoscope and zodiac are always recomputed from it at write time and never
/// accepted as input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user_id: UserId,
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub horoscope: HoroscopeSign,
    pub zodiac: ZodiacAnimal,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub interests: Option<Vec<String>>,
}

/// Command carrying the fields of a profile update.
///
/// Full-replace semantics: the stored profile becomes exactly these fields
/// plus the recomputed astrological attributes, not a merge with the
/// previous document.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub interests: Option<Vec<String>>,
}

/// Response payload merging the owning user's identity fields with the
/// profile's fields.
///
/// Every profile field is optional; when no profile exists yet they are all
/// absent rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePayload {
    pub email: String,
    pub username: String,
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub horoscope: Option<HoroscopeSign>,
    pub zodiac: Option<ZodiacAnimal>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub interests: Option<Vec<String>>,
}

impl ProfilePayload {
    pub fn from_parts(user: &User, profile: Option<&Profile>) -> Self {
        Self {
            email: user.email.as_str().to_string(),
            username: user.username.as_str().to_string(),
            name: profile.and_then(|p| p.name.clone()),
            birthday: profile.and_then(|p| p.birthday.clone()),
            horoscope: profile.map(|p| p.horoscope),
            zodiac: profile.map(|p| p.zodiac),
            height: profile.and_then(|p| p.height),
            weight: profile.and_then(|p| p.weight),
            interests: profile.and_then(|p| p.interests.clone()),
        }
    }
}
