use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::astrology::errors::BirthDateError;

/// Calendar date as supplied by the client, in `YYYY-MM-DD` form.
///
/// Only the format is checked, not calendar validity: `1999-02-30` parses.
/// Stored birthdays are kept verbatim, so derived signs must be computable
/// for any numerically well-formed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Field-wise ordering key, used for boundary-table comparisons.
    pub fn as_tuple(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}

impl FromStr for BirthDate {
    type Err = BirthDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) => (y, m, d),
            _ => return Err(BirthDateError::InvalidFormat(s.to_string())),
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| BirthDateError::InvalidFormat(s.to_string()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| BirthDateError::InvalidFormat(s.to_string()))?;
        let day = day
            .parse::<u32>()
            .map_err(|_| BirthDateError::InvalidFormat(s.to_string()))?;

        Ok(Self { year, month, day })
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// One of the twelve Western zodiac signs, derived purely from month and day.
///
/// `Error` is a defined output for malformed month/day values, not a failure:
/// it is stored and returned like any other sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoroscopeSign {
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Error,
}

impl HoroscopeSign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for HoroscopeSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoroscopeSign {
    type Err = BirthDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Aquarius" => Ok(Self::Aquarius),
            "Pisces" => Ok(Self::Pisces),
            "Aries" => Ok(Self::Aries),
            "Taurus" => Ok(Self::Taurus),
            "Gemini" => Ok(Self::Gemini),
            "Cancer" => Ok(Self::Cancer),
            "Leo" => Ok(Self::Leo),
            "Virgo" => Ok(Self::Virgo),
            "Libra" => Ok(Self::Libra),
            "Scorpio" => Ok(Self::Scorpio),
            "Sagittarius" => Ok(Self::Sagittarius),
            "Capricorn" => Ok(Self::Capricorn),
            "Error" => Ok(Self::Error),
            other => Err(BirthDateError::UnknownSign(other.to_string())),
        }
    }
}

/// One of the twelve animals of the 12-year lunar cycle.
///
/// Derived from the precomputed lunar-new-year boundary table; dates outside
/// the table yield the `Error` sentinel, which callers store as a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
    Error,
}

impl ZodiacAnimal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for ZodiacAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZodiacAnimal {
    type Err = BirthDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rat" => Ok(Self::Rat),
            "Ox" => Ok(Self::Ox),
            "Tiger" => Ok(Self::Tiger),
            "Rabbit" => Ok(Self::Rabbit),
            "Dragon" => Ok(Self::Dragon),
            "Snake" => Ok(Self::Snake),
            "Horse" => Ok(Self::Horse),
            "Goat" => Ok(Self::Goat),
            "Monkey" => Ok(Self::Monkey),
            "Rooster" => Ok(Self::Rooster),
            "Dog" => Ok(Self::Dog),
            "Pig" => Ok(Self::Pig),
            "Error" => Ok(Self::Error),
            other => Err(BirthDateError::UnknownSign(other.to_string())),
        }
    }
}
