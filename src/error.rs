//! Errors reported by the conversions.

/// Why a conversion was rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The Gregorian input does not name an existing day.
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    InvalidSolarDate { year: i32, month: u32, day: u32 },
    /// Lunar month outside `1..=12` or day outside `1..=30`.
    #[error("lunar month {month}, day {day} is not a valid lunar date")]
    InvalidLunarDate { month: u32, day: u32 },
    /// A leap month was requested but the year does not have it.
    #[error("lunar year {year} has no leap month {month}")]
    NoSuchLeapMonth { year: i32, month: u32 },
    /// The day exceeds the length of the requested lunar month.
    #[error("day {day} exceeds the {days} days of lunar month {month} (leap: {leap}) in {year}")]
    DayOutOfMonth {
        year: i32,
        month: u32,
        leap: bool,
        day: u32,
        days: u32,
    },
    /// The date falls outside 1900-01-31..=2100-12-31.
    #[error("date is outside the supported range 1900-01-31 to 2100-12-31")]
    OutOfRange,
}
