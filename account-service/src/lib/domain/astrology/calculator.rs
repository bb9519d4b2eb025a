use crate::domain::astrology::models::BirthDate;
use crate::domain::astrology::models::HoroscopeSign;
use crate::domain::astrology::models::ZodiacAnimal;
use crate::domain::astrology::table::ZODIAC_RANGES;

/// Twelve inclusive month/day ranges partitioning the 366-day cycle.
///
/// Each sign covers "month == start.0 and day >= start.1" or
/// "month == end.0 and day <= end.1". Evaluated in declaration order; the
/// fallback to `Error` is unreachable for any real calendar day.
const HOROSCOPE_RANGES: [(HoroscopeSign, (u32, u32), (u32, u32)); 12] = [
    (HoroscopeSign::Aquarius, (1, 20), (2, 18)),
    (HoroscopeSign::Pisces, (2, 19), (3, 20)),
    (HoroscopeSign::Aries, (3, 21), (4, 19)),
    (HoroscopeSign::Taurus, (4, 20), (5, 20)),
    (HoroscopeSign::Gemini, (5, 21), (6, 20)),
    (HoroscopeSign::Cancer, (6, 21), (7, 22)),
    (HoroscopeSign::Leo, (7, 23), (8, 22)),
    (HoroscopeSign::Virgo, (8, 23), (9, 22)),
    (HoroscopeSign::Libra, (9, 23), (10, 22)),
    (HoroscopeSign::Scorpio, (10, 23), (11, 21)),
    (HoroscopeSign::Sagittarius, (11, 22), (12, 21)),
    (HoroscopeSign::Capricorn, (12, 22), (1, 19)),
];

/// Map a date to its Western zodiac sign. Only month and day matter.
///
/// Returns `HoroscopeSign::Error` when no range matches, which is only
/// reachable with a malformed month or day (e.g. month 0).
pub fn horoscope_sign(date: &BirthDate) -> HoroscopeSign {
    for (sign, (start_month, start_day), (end_month, end_day)) in HOROSCOPE_RANGES {
        if (date.month == start_month && date.day >= start_day)
            || (date.month == end_month && date.day <= end_day)
        {
            return sign;
        }
    }
    HoroscopeSign::Error
}

/// Map a date to its lunar-cycle animal. The full year matters.
///
/// Scans the boundary table in order and returns the first range containing
/// the date under field-wise (year, month, day) ordering. Dates before the
/// table's first start or after its last end yield `ZodiacAnimal::Error`.
pub fn zodiac_animal(date: &BirthDate) -> ZodiacAnimal {
    let key = date.as_tuple();
    for range in &ZODIAC_RANGES {
        if range.start <= key && key <= range.end {
            return range.animal;
        }
    }
    ZodiacAnimal::Error
}

/// Derive both astrological attributes from an optional raw birthday string.
///
/// An absent or numerically malformed birthday derives both `Error`
/// sentinels; they are stored like any other value, never propagated as a
/// failure.
pub fn derive(birthday: Option<&str>) -> (HoroscopeSign, ZodiacAnimal) {
    match birthday.and_then(|s| s.parse::<BirthDate>().ok()) {
        Some(date) => (horoscope_sign(&date), zodiac_animal(&date)),
        None => (HoroscopeSign::Error, ZodiacAnimal::Error),
    }
}
