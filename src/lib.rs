//! Conversion between Gregorian dates and the Chinese lunisolar calendar.
//!
//! Lunar months come from a table of month lengths and leap months covering
//! lunar years 1900 through 2100, so Gregorian dates from 1900-01-31 to
//! 2100-12-31 are supported. Solar terms, which delimit the sexagenary
//! months, are computed from the apparent longitude of the Sun.
//!
//! # Examples
//!
//! Solar to lunar:
//!
//! ```
//! let date = solarlunar::solar2lunar(2017, 7, 23).unwrap();
//!
//! assert_eq!((2017, 6, 1), (date.l_year, date.l_month, date.l_day));
//! assert!(date.is_leap);
//! assert_eq!("闰六月初一", date.month_cn.clone() + &date.day_cn);
//! ```
//!
//! Lunar to solar, choosing the leap month:
//!
//! ```
//! let date = solarlunar::lunar2solar(2020, 4, 1, true).unwrap();
//!
//! assert_eq!((2020, 5, 23), (date.c_year, date.c_month, date.c_day));
//! ```
//!
//! Working with whole lunar years:
//!
//! ```
//! use solarlunar::Date;
//! use solarlunar::chinese::{LunarYear, Month::*};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! let year = LunarYear::from_date(date).unwrap();
//!
//! assert_eq!(Ok((1999, Common(11), 25)), year.ymd_for(date));
//! ```

pub mod calendar;
pub mod chinese;
pub mod config;
pub mod date;
pub mod error;
pub mod time_scales;

pub use calendar::{Calendar, LunarDate, lunar2solar, solar2lunar};
pub use config::{Config, ConfigError};
pub use date::Date;
pub use error::Error;
