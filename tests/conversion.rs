//! Whole-range properties of the two conversions.

use proptest::prelude::*;
use solarlunar::chinese::table::{first_supported_date, last_supported_date};
use solarlunar::chinese::LunarYear;
use solarlunar::{Date, Error, lunar2solar, solar2lunar};

fn supported_date() -> impl Strategy<Value = Date> {
    (first_supported_date().jdn()..=last_supported_date().jdn()).prop_map(Date::from_jdn)
}

proptest! {
    #[test]
    fn lunar2solar_inverts_solar2lunar(date in supported_date()) {
        let (y, m, d) = date.gregorian();
        let lunar = solar2lunar(y, m, d).unwrap();
        let back = lunar2solar(lunar.l_year, lunar.l_month, lunar.l_day, lunar.is_leap).unwrap();
        prop_assert_eq!((y, m, d), (back.c_year, back.c_month, back.c_day));
        prop_assert_eq!(&lunar, &back);
    }

    #[test]
    fn fields_stay_in_range(date in supported_date()) {
        let (y, m, d) = date.gregorian();
        let lunar = solar2lunar(y, m, d).unwrap();
        prop_assert!((1..=12).contains(&lunar.l_month));
        prop_assert!((1..=30).contains(&lunar.l_day));
        prop_assert!((1..=7).contains(&lunar.n_week));
        prop_assert!(lunar.l_year == y || lunar.l_year == y - 1);
        prop_assert_eq!(lunar.is_term, lunar.term.is_some());
    }

    #[test]
    fn consecutive_days_advance_by_one(date in supported_date()) {
        prop_assume!(date < last_supported_date());
        let (y, m, d) = date.gregorian();
        let (ny, nm, nd) = (date + 1).gregorian();
        let today = solar2lunar(y, m, d).unwrap();
        let tomorrow = solar2lunar(ny, nm, nd).unwrap();
        if tomorrow.l_day == 1 {
            prop_assert!(today.l_day == 29 || today.l_day == 30);
        } else {
            prop_assert_eq!(today.l_day + 1, tomorrow.l_day);
            prop_assert_eq!(today.month(), tomorrow.month());
        }
    }

    #[test]
    fn months_last_29_or_30_days(year in 1900i32..=2100) {
        let lunar_year = LunarYear::new(year).unwrap();
        for pair in lunar_year.months.windows(2) {
            let days = pair[1].date - pair[0].date;
            prop_assert!(days == 29 || days == 30, "{:?} has {} days", pair[0].month, days);
        }
        let total = lunar_year.end() - lunar_year.first_day();
        prop_assert!((353..=355).contains(&total) || (383..=385).contains(&total));
    }

    #[test]
    fn invalid_lunar_days_are_rejected(year in 1900i32..=2100, month in 1u32..=12) {
        let lunar_year = LunarYear::new(year).unwrap();
        let days = lunar_year
            .month_len(solarlunar::chinese::Month::Common(month))
            .unwrap();
        if days == 29 {
            prop_assert_eq!(
                Err(Error::DayOutOfMonth { year, month, leap: false, day: 30, days }),
                lunar2solar(year, month, 30, false)
            );
        }
    }
}

#[test]
fn spring_festivals() {
    for (year, std) in [
        (1901, (1901, 2, 19)),
        (1912, (1912, 2, 18)),
        (1949, (1949, 1, 29)),
        (1976, (1976, 1, 31)),
        (1989, (1989, 2, 6)),
        (2008, (2008, 2, 7)),
        (2019, (2019, 2, 5)),
        (2026, (2026, 2, 17)),
    ] {
        let date = lunar2solar(year, 1, 1, false).unwrap();
        assert_eq!(std, (date.c_year, date.c_month, date.c_day), "{year}");
    }
}

#[test]
fn leap_months_resolve() {
    for ((year, month), std) in [
        ((1900, 8), (1900, 9, 24)),
        ((1984, 10), (1984, 11, 23)),
        ((2001, 4), (2001, 5, 23)),
        ((2023, 2), (2023, 3, 22)),
        ((2025, 6), (2025, 7, 25)),
    ] {
        let date = lunar2solar(year, month, 1, true).unwrap();
        assert_eq!(std, (date.c_year, date.c_month, date.c_day), "{year} leap {month}");
        assert!(date.is_leap);
    }
}
