//! Pure astrological derivation: horoscope sign from month/day ranges,
//! zodiac animal from the lunar-new-year boundary table.

pub mod calculator;
pub mod errors;
pub mod models;
mod table;

pub use calculator::derive;
pub use calculator::horoscope_sign;
pub use calculator::zodiac_animal;
pub use models::BirthDate;
pub use models::HoroscopeSign;
pub use models::ZodiacAnimal;
