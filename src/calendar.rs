//! Conversions between Gregorian dates and the Chinese lunisolar calendar.
//!
//! Both directions return the same record, [`LunarDate`], which describes
//! one day in both calendars together with its sexagenary names, weekday and
//! solar term.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chinese::{self, LunarYear, Month, fmt as text, table, terms};
use crate::config::Config;
use crate::date::{self, Date};
use crate::error::Error;

/// One day described in both calendars.
///
/// Serializes with the camelCase keys (`lYear`, `gzMonth`, `ncWeek`, ...)
/// used by the JavaScript `solarlunar` package.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    /// Lunar year, numbered by the Gregorian year its first month starts in.
    pub l_year: i32,
    /// Lunar month number, `1..=12`, whether leap or not.
    pub l_month: u32,
    /// Day of the lunar month, `1..=30`.
    pub l_day: u32,
    /// Zodiac animal of the lunar year.
    pub animal: String,
    /// Lunar year in Chinese numerals, e.g. `二零一七年`.
    pub year_cn: String,
    /// Lunar month name, e.g. `闰六月`.
    pub month_cn: String,
    /// Lunar day name, e.g. `初一`.
    pub day_cn: String,
    /// Gregorian year.
    pub c_year: i32,
    /// Gregorian month.
    pub c_month: u32,
    /// Gregorian day.
    pub c_day: u32,
    /// Sexagenary name of the lunar year.
    pub gz_year: String,
    /// Sexagenary name of the month, delimited by solar terms.
    pub gz_month: String,
    /// Sexagenary name of the day.
    pub gz_day: String,
    /// Whether this is the current local date.
    pub is_today: bool,
    /// Whether the lunar month is a leap month.
    pub is_leap: bool,
    /// ISO weekday, `1..=7` for Monday through Sunday.
    pub n_week: u32,
    /// Weekday in Chinese, e.g. `星期日`.
    pub nc_week: String,
    /// Whether a solar term begins on this day.
    pub is_term: bool,
    /// Name of that solar term.
    pub term: Option<String>,
}

impl LunarDate {
    /// The lunar month as a [`Month`].
    pub fn month(&self) -> Month {
        Month::new(self.l_month, self.is_leap)
    }

    /// The Gregorian side as a [`Date`].
    pub fn date(&self) -> Option<Date> {
        Date::from_gregorian(self.c_year, self.c_month, self.c_day)
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {}({}){} {}{} {}",
            self.c_year,
            self.c_month,
            self.c_day,
            self.gz_year,
            self.animal,
            self.year_cn,
            self.month_cn,
            self.day_cn,
            self.nc_week
        )?;
        if let Some(term) = &self.term {
            write!(f, " {term}")?;
        }
        Ok(())
    }
}

/// A configured converter.
///
/// # Example
///
/// ```
/// use solarlunar::{Calendar, Config};
/// use solarlunar::chinese::fmt::Script;
///
/// let calendar = Calendar::new(Config {
///     script: Script::Traditional,
///     ..Config::default()
/// });
/// let date = calendar.lunar2solar(2017, 6, 1, true).unwrap();
/// assert_eq!((2017, 7, 23), (date.c_year, date.c_month, date.c_day));
/// assert_eq!("閏六月", date.month_cn);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    config: Config,
}

impl Calendar {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Converts a Gregorian date.
    ///
    /// # Example
    ///
    /// ```
    /// use solarlunar::Calendar;
    ///
    /// let date = Calendar::default().solar2lunar(2024, 2, 4).unwrap();
    /// assert_eq!((2023, 12, 25), (date.l_year, date.l_month, date.l_day));
    /// assert_eq!(Some("立春"), date.term.as_deref());
    /// ```
    pub fn solar2lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, Error> {
        if !date::is_valid_gregorian(year, month, day) {
            log::debug!("rejected solar date {year}-{month}-{day}");
            return Err(Error::InvalidSolarDate { year, month, day });
        }
        if !(table::FIRST_YEAR..=table::LAST_YEAR).contains(&year) {
            log::debug!("solar date {year}-{month}-{day} is out of range");
            return Err(Error::OutOfRange);
        }
        let date = Date::from_gregorian(year, month, day).ok_or(Error::OutOfRange)?;
        self.describe(date)
    }

    /// Converts a lunar date. `is_leap_month` selects the leap month when
    /// the year has one numbered `month`.
    ///
    /// # Example
    ///
    /// ```
    /// use solarlunar::Calendar;
    ///
    /// let date = Calendar::default().lunar2solar(2023, 1, 1, false).unwrap();
    /// assert_eq!((2023, 1, 22), (date.c_year, date.c_month, date.c_day));
    /// ```
    pub fn lunar2solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
    ) -> Result<LunarDate, Error> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            log::debug!("rejected lunar date {year}/{month}/{day}");
            return Err(Error::InvalidLunarDate { month, day });
        }
        let lunar_year = self.year(year)?;
        let wanted = Month::new(month, is_leap_month);
        let (start, days) = lunar_year
            .month_start(wanted)
            .zip(lunar_year.month_len(wanted))
            .ok_or(Error::NoSuchLeapMonth { year, month })?;
        if day > days {
            return Err(Error::DayOutOfMonth {
                year,
                month,
                leap: is_leap_month,
                day,
                days,
            });
        }
        self.describe(start + (day - 1) as i32)
    }

    /// The lunar year `year`, with its month starts.
    pub fn year(&self, year: i32) -> Result<LunarYear, Error> {
        LunarYear::new(year).ok_or_else(|| {
            log::debug!("lunar year {year} is out of range");
            Error::OutOfRange
        })
    }

    /// Day of the Gregorian month on which solar term `term` (`1..=24`,
    /// 1 = 小寒) of `year` falls in the configured timezone.
    ///
    /// ```
    /// use solarlunar::Calendar;
    ///
    /// assert_eq!(Some(21), Calendar::default().term(2024, 12)); // 夏至
    /// ```
    pub fn term(&self, year: i32, term: u32) -> Option<u32> {
        self.term_date(year, term).map(|date| date.gregorian().2)
    }

    /// Date on which solar term `term` of `year` falls.
    pub fn term_date(&self, year: i32, term: u32) -> Option<Date> {
        terms::date(year, term, self.config.utc_offset_minutes)
    }

    fn describe(&self, date: Date) -> Result<LunarDate, Error> {
        if date < table::first_supported_date() || date > table::last_supported_date() {
            log::debug!("date {date} is out of range");
            return Err(Error::OutOfRange);
        }
        let lunar_year = LunarYear::from_date(date).ok_or(Error::OutOfRange)?;
        let (l_year, month, l_day) = lunar_year
            .ymd_for(date)
            .map_err(|_| Error::OutOfRange)?;
        let (c_year, c_month, c_day) = date.gregorian();
        let script = self.config.script;

        // Each Gregorian month holds one 節 (odd term) and one 中氣 (even term).
        let first_term = c_month * 2 - 1;
        let first = self.term_date(c_year, first_term).ok_or(Error::OutOfRange)?;
        let second = self
            .term_date(c_year, first_term + 1)
            .ok_or(Error::OutOfRange)?;
        let term = if date == first {
            Some(first_term)
        } else if date == second {
            Some(first_term + 1)
        } else {
            None
        };

        let month_num = chinese::sexagenary_for_month(c_year, c_month, date >= first);
        let n_week = date.day_of_week();

        Ok(LunarDate {
            l_year,
            l_month: month.num(),
            l_day,
            animal: text::animal(l_year, script).to_owned(),
            year_cn: text::year(l_year),
            month_cn: text::month(month, script),
            day_cn: text::day(l_day),
            c_year,
            c_month,
            c_day,
            gz_year: text::sexagenary(chinese::sexagenary_for_year(l_year)),
            gz_month: text::sexagenary(month_num),
            gz_day: text::sexagenary(date.sexagenary()),
            is_today: Date::today() == Some(date),
            is_leap: month.is_leap(),
            n_week,
            nc_week: text::weekday(n_week),
            is_term: term.is_some(),
            term: term.map(|t| text::solar_term(t, script).to_owned()),
        })
    }
}

/// Converts a Gregorian date with the default [`Calendar`].
///
/// ```
/// let date = solarlunar::solar2lunar(2017, 7, 23).unwrap();
/// assert_eq!((2017, 6, 1, true), (date.l_year, date.l_month, date.l_day, date.is_leap));
/// assert_eq!("丁酉", date.gz_year);
/// ```
pub fn solar2lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, Error> {
    Calendar::default().solar2lunar(year, month, day)
}

/// Converts a lunar date with the default [`Calendar`].
///
/// ```
/// let date = solarlunar::lunar2solar(2017, 6, 1, false).unwrap();
/// assert_eq!((2017, 6, 24), (date.c_year, date.c_month, date.c_day));
/// ```
pub fn lunar2solar(
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
) -> Result<LunarDate, Error> {
    Calendar::default().lunar2solar(year, month, day, is_leap_month)
}
