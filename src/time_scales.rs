//! Time scales needed to turn an astronomical moment into a civil date.
//!
//! Solar term moments are solved in TT; the calendar needs the civil day they
//! fall on, which is decided in UT shifted by a timezone offset.

use crate::date::Date;

/// [Barycentric dynamical time](https://en.wikipedia.org/wiki/Barycentric_Dynamical_Time),
/// as a Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tdb(pub f64);

/// [Terrestrial time](https://en.wikipedia.org/wiki/Terrestrial_Time), as a
/// Julian date (JD).
///
/// TT and TDB differ by no more than a couple of milliseconds, so they are
/// treated as numerically equal.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

impl From<Tdb> for Tt {
    fn from(tdb: Tdb) -> Tt {
        Tt(tdb.0)
    }
}

impl From<Tai> for Tt {
    fn from(tai: Tai) -> Tt {
        Tt(tai.0 + TT_MINUS_TAI / 86400.0)
    }
}

/// [International atomic time](https://en.wikipedia.org/wiki/International_Atomic_Time),
/// as a Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tai(pub f64);

impl From<Tt> for Tai {
    fn from(tt: Tt) -> Tai {
        Tai(tt.0 - TT_MINUS_TAI / 86400.0)
    }
}

impl From<Tdb> for Tai {
    fn from(tdb: Tdb) -> Tai {
        Tt::from(tdb).into()
    }
}

const TT_MINUS_TAI: f64 = 32.184;

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time), as a
/// Julian date (JD).
///
/// Between 1972-01-01 and the expiry of the bundled leap second table this
/// is UTC. Outside that window it is UT1, modelled from ΔT = TT − UT1:
///
/// - before 1972, with the polynomial fits of Espenak & Meeus;
/// - after the table expires, with the long-term parabola of
///   [Morrison & Stephenson](https://astro.ukho.gov.uk/nao/lvm/), shifted to
///   join the table continuously.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Converts a TAI moment (or anything convertible into TAI) into UT.
    ///
    /// # Example
    ///
    /// ```
    /// use solarlunar::time_scales::{Tdb, Ut};
    ///
    /// let ut = Ut::convert(Tdb(2451543.166666667));
    /// assert_eq!((1999, 12, 30), ut.date_in_timezone(480).gregorian());
    /// ```
    pub fn convert<T>(time: T) -> Self
    where
        T: Into<Tai>,
    {
        let tai = time.into();
        let data = &*leap_seconds::DATA;

        if tai < data.starts {
            let tt = Tt::from(tai);
            return Ut(tt.0 - delta_t::espenak_meeus(tt) / 86400.0);
        } else if tai > data.expires {
            let diff = leap_seconds::estimate(tai) + data.c2;
            return Ut(tai.0 - diff / 86400.0);
        }

        let ls = match data.leap_seconds.partition_point(|ls| ls.tai <= tai) {
            0 => return Ut(tai.0 - 10.0 / 86400.0),
            i => &data.leap_seconds[i - 1],
        };
        // UT holds still during the inserted second.
        let leap = ((tai.0 - ls.tai.0) * 86400.0).min(1.0);
        Ut(tai.0 - (ls.delta_secs as f64 + leap) / 86400.0)
    }

    /// Returns the civil date at this moment in a timezone `tz_offset_minutes`
    /// minutes east of UTC (`480` for Beijing time).
    ///
    /// # Example
    ///
    /// ```
    /// use solarlunar::time_scales::Ut;
    ///
    /// // 2017-02-03T15:34Z is already the next morning in Tokyo.
    /// let ut = Ut(2457788.149);
    /// assert_eq!("2017-02-03", ut.date_in_timezone(0).to_string());
    /// assert_eq!("2017-02-04", ut.date_in_timezone(540).to_string());
    /// ```
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> Date {
        let jdn = (self.0 + tz_offset_minutes as f64 / 1440.0).round() as u32;
        Date::from_jdn(jdn)
    }
}

mod delta_t {
    use super::Tt;

    fn decimal_year(tt: Tt) -> f64 {
        (tt.0 - 2451544.5) / 365.2425 + 2000.0
    }

    /// ΔT in seconds for 1900..1972; earlier moments reuse the 1900 piece.
    pub fn espenak_meeus(tt: Tt) -> f64 {
        let y = decimal_year(tt);
        if y < 1920.0 {
            let t = y - 1900.0;
            -2.79 + t * (1.494119 + t * (-0.0598939 + t * (0.0061966 - 0.000197 * t)))
        } else if y < 1941.0 {
            let t = y - 1920.0;
            21.20 + t * (0.84493 + t * (-0.076100 + 0.0020936 * t))
        } else if y < 1961.0 {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0
        } else {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
        }
    }
}

mod leap_seconds {
    use std::sync::LazyLock;

    use super::{Tai, Tt};
    use crate::date::Date;

    /// Last days of the months that ended with an inserted leap second.
    const DATES: &[(i32, u32, u32)] = &[
        (1972, 6, 30),
        (1972, 12, 31),
        (1973, 12, 31),
        (1974, 12, 31),
        (1975, 12, 31),
        (1976, 12, 31),
        (1977, 12, 31),
        (1978, 12, 31),
        (1979, 12, 31),
        (1981, 6, 30),
        (1982, 6, 30),
        (1983, 6, 30),
        (1985, 6, 30),
        (1987, 12, 31),
        (1989, 12, 31),
        (1990, 12, 31),
        (1992, 6, 30),
        (1993, 6, 30),
        (1994, 6, 30),
        (1995, 12, 31),
        (1997, 6, 30),
        (1998, 12, 31),
        (2005, 12, 31),
        (2008, 12, 31),
        (2012, 6, 30),
        (2015, 6, 30),
        (2016, 12, 31),
    ];
    /// IERS Bulletin C has announced no further leap second up to this day.
    const DATE_EXPIRES: (i32, u32, u32) = (2026, 6, 30);

    /// TAI − UTC before the first leap second.
    const INITIAL_OFFSET: i32 = 10;

    #[derive(Debug)]
    pub struct Data {
        pub starts: Tai,
        pub leap_seconds: Vec<LeapSecond>,
        pub expires: Tai,
        pub c2: f64,
    }

    #[derive(Debug)]
    pub struct LeapSecond {
        pub tai: Tai,
        pub delta_secs: i32,
    }

    pub static DATA: LazyLock<Data> = LazyLock::new(build);

    fn jdn_of((y, m, d): (i32, u32, u32)) -> f64 {
        // Every entry is a literal in this file well inside the JDN range.
        Date::from_gregorian(y, m, d).map_or(0.0, |date| date.jdn() as f64)
    }

    fn build() -> Data {
        let starts = Tai(jdn_of((1972, 1, 1)) - 0.5 + INITIAL_OFFSET as f64 / 86400.0);
        let leap_seconds: Vec<_> = (INITIAL_OFFSET..)
            .zip(DATES)
            .map(|(delta_secs, &ymd)| LeapSecond {
                // 23:59:60 UTC of that day, expressed in TAI.
                tai: Tai(jdn_of(ymd) + (43199 + delta_secs) as f64 / 86400.0),
                delta_secs,
            })
            .collect();
        let final_offset = INITIAL_OFFSET + DATES.len() as i32;
        let expires = Tai(jdn_of(DATE_EXPIRES) + (43200 + final_offset) as f64 / 86400.0);
        let c2 = final_offset as f64 - estimate(expires);
        log::debug!(
            "leap second table: {} entries, expires at TAI JD {}",
            leap_seconds.len(),
            expires.0
        );
        Data {
            starts,
            leap_seconds,
            expires,
            c2,
        }
    }

    /// Long-term ΔT estimate in seconds.
    pub fn estimate<T: Into<Tt>>(tt: T) -> f64 {
        use std::f64::consts::PI;
        let tt = tt.into();
        let y = (tt.0 - 2451544.5) / 365.2425 + 2000.0;
        let t = (y - 1825.0) / 100.0;
        31.4115 * t * t + 284.8435805251424 * (2.0 * PI * (t + 0.75) / 14.0).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tdb_to_ut_across_midnight() {
        let ut = Ut::convert(Tdb(2451543.166666667));
        assert_eq!((1999, 12, 30), ut.date_in_timezone(0).gregorian());
        // TAI − UTC was 32 s at the end of 1999.
        let ut_midnight = Ut(ut.0 + (32.0 + 32.184) / 86400.0);
        let ut_before_midnight = Ut(ut_midnight.0 - 1.0 / 86400.0);
        assert_eq!(
            (1999, 12, 30),
            ut_before_midnight.date_in_timezone(480).gregorian()
        );
        assert_eq!((1999, 12, 31), ut_midnight.date_in_timezone(480).gregorian());
    }

    #[test]
    fn before_utc_uses_delta_t() {
        // 1950-01-01T00:00 TT; ΔT was close to 29 s.
        let tt = Tt(2433282.5);
        let ut = Ut::convert(tt);
        let delta = (tt.0 - ut.0) * 86400.0;
        assert!((28.0..30.0).contains(&delta), "ΔT = {delta}");
        // 1900-01-01: ΔT slightly negative.
        let tt = Tt(2415020.5);
        let delta = (tt.0 - Ut::convert(tt).0) * 86400.0;
        assert!((-4.0..-1.0).contains(&delta), "ΔT = {delta}");
    }

    #[test]
    fn joins_utc_smoothly_in_1972() {
        let data = &*leap_seconds::DATA;
        let just_before = Ut::convert(Tai(data.starts.0 - 1e-6));
        let just_after = Ut::convert(Tai(data.starts.0 + 1e-6));
        assert!((just_after.0 - just_before.0).abs() < 1.0 / 86400.0);
    }

    #[test]
    fn extrapolates_after_table() {
        let tdb = Tdb(2462501.166666667 + 5.647029454550371); // 2030 小寒
        let ut = Ut::convert(tdb);
        assert!((ut.0 - 2462506.81319).abs() <= 30.0 / 86400.0);
    }

    #[test]
    fn leap_second_offsets() {
        // 2017-06-01T00:00 UTC: TAI − UTC = 37 s.
        let tai = Tai(2457905.5 + 37.0 / 86400.0);
        assert!((Ut::convert(tai).0 - 2457905.5).abs() < 1e-9);
    }
}
