pub mod astrology;
pub mod profile;
pub mod user;
