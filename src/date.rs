//! Calendar-independent day, counted by Julian day number.

use std::fmt;
use std::num::TryFromIntError;
use std::ops::{Add, Sub};

use chrono::{Datelike, Local, NaiveDate};

/// A day, independent of any calendar.
///
/// Internally a Julian day number (JDN), so any day from January 1, 4713 BC
/// (proleptic Julian calendar) onwards can be represented.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number.
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` from a proleptic Gregorian date.
    ///
    /// `year` is an astronomical year number (1 BC is `0`). Out-of-range
    /// months and days roll over the way the JDN formula does, so use
    /// [`is_valid_gregorian`] first when the input is untrusted.
    ///
    /// Returns `None` if the result precedes JDN 0.
    ///
    /// # Example
    ///
    /// ```
    /// use solarlunar::Date;
    ///
    /// let date = Date::from_gregorian(1900, 1, 31).unwrap();
    /// assert_eq!(2415051, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Option<Self> {
        let (y, m, d) = (year as i64, month as i64, day as i64);
        let a = (m - 14) / 12;
        let jdn = (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
            - (3 * ((y + 4900 + a) / 100)) / 4
            + d
            - 32075;
        u32::try_from(jdn).map(Self::from_jdn).ok()
    }

    /// Gregorian `(year, month, day)` of the date.
    ///
    /// # Example
    ///
    /// ```
    /// use solarlunar::Date;
    ///
    /// assert_eq!((2017, 7, 23), Date::from_jdn(2457958).gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, u32, u32) {
        // JDN stays far below 2**31 for every date the crate constructs.
        let j = self.jdn as i64;
        let f = j + 1401 + (((4 * j + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let h = 5 * ((e % 1461) / 4) + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (14 - month) / 12;
        (year as i32, month as u32, day as u32)
    }

    /// The date in the local timezone of the running machine, or `None` if
    /// the clock reads a day before JDN 0.
    pub fn today() -> Option<Self> {
        Self::try_from(Local::now().date_naive()).ok()
    }

    /// Day of week in ISO 8601 numbering, `1..=7` for Monday through Sunday.
    ///
    /// ```
    /// use solarlunar::Date;
    ///
    /// let date = Date::from_gregorian(2017, 7, 23).unwrap();
    /// assert_eq!(7, date.day_of_week());
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }

    /// Chinese sexagenary day number, from 1 (甲子) to 60 (癸亥).
    ///
    /// ```
    /// use solarlunar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(55, date.sexagenary()); // 戊午
    /// ```
    pub fn sexagenary(&self) -> u32 {
        (self.jdn + 49) % 60 + 1
    }
}

impl fmt::Display for Date {
    /// ISO 8601 calendar date in the proleptic Gregorian calendar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.gregorian();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

/// Fails for days before JDN 0, which `Date` cannot hold.
impl TryFrom<NaiveDate> for Date {
    type Error = TryFromIntError;
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        // chrono's day count is anchored at 0001-01-01 (JDN 1721426).
        u32::try_from(i64::from(date.num_days_from_ce()) + 1_721_425).map(Date::from_jdn)
    }
}

impl From<Date> for Option<NaiveDate> {
    fn from(date: Date) -> Self {
        NaiveDate::from_num_days_from_ce_opt(date.jdn as i32 - 1_721_425)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn.wrapping_add_signed(rhs))
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Returns `true` for leap years of the Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Number of days in a Gregorian month, or `None` if `month` is not in
/// `1..=12`.
///
/// ```
/// use solarlunar::date::solar_days;
///
/// assert_eq!(Some(29), solar_days(2000, 2));
/// assert_eq!(Some(28), solar_days(2100, 2));
/// assert_eq!(None, solar_days(2000, 13));
/// ```
pub fn solar_days(year: i32, month: u32) -> Option<u32> {
    Some(match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1..=12 => 31,
        _ => return None,
    })
}

/// Checks that `(year, month, day)` names an existing Gregorian day.
pub fn is_valid_gregorian(year: i32, month: u32, day: u32) -> bool {
    solar_days(year, month).is_some_and(|len| (1..=len).contains(&day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jdn_round_trip() {
        for ((y, m, d), jdn) in [
            ((1900, 1, 31), 2415051),
            ((1970, 1, 1), 2440588),
            ((2000, 1, 1), 2451545),
            ((2021, 9, 8), 2459466),
            ((2100, 12, 31), 2488434),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(jdn, date.jdn(), "{y:04}-{m:02}-{d:02}");
            assert_eq!((y, m, d), date.gregorian());
        }
    }

    #[test]
    fn weekday_and_cycle() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        assert_eq!(18, date.sexagenary());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
        assert_eq!(56, date.sexagenary());
    }

    #[test]
    fn display_is_iso() {
        let date = Date::from_gregorian(1901, 2, 9).unwrap();
        assert_eq!("1901-02-09", date.to_string());
    }

    #[test]
    fn arithmetic() {
        let a = Date::from_gregorian(2017, 1, 28).unwrap();
        let b = a + 30;
        assert_eq!("2017-02-27", b.to_string());
        assert_eq!(30, b - a);
        assert_eq!(a, b + -30);
    }

    #[test]
    fn chrono_interop() {
        let naive = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let date = Date::try_from(naive).unwrap();
        assert_eq!(2451545, date.jdn());
        assert_eq!(Some(naive), Option::<NaiveDate>::from(date));

        // JDN 0 is -4713-11-24 in the proleptic Gregorian calendar.
        let first = NaiveDate::from_ymd_opt(-4713, 11, 24).unwrap();
        assert_eq!(Ok(Date::from_jdn(0)), Date::try_from(first));
        assert!(Date::try_from(first.pred_opt().unwrap()).is_err());
        assert!(Date::try_from(NaiveDate::MIN).is_err());
    }

    #[test]
    fn month_lengths() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_valid_gregorian(2024, 2, 29));
        assert!(!is_valid_gregorian(2023, 2, 29));
        assert!(!is_valid_gregorian(2023, 4, 31));
        assert!(!is_valid_gregorian(2023, 0, 1));
        assert!(!is_valid_gregorian(2023, 1, 0));
    }
}
