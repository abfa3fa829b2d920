//! 二十四節氣
//!
//! 節氣時刻由太陽視黃經推算：以低精度太陽位置公式（Meeus《天文算法》第 25 章）
//! 求視黃經，再以牛頓迭代求其達到 15° 整數倍的時刻（TT），最後換算為指定時區的日期。
//! 時刻誤差約在十分鐘內，故交節時刻極近午夜者，日期可能與官方曆書相差一日。
//!
//! 節氣序號沿用公曆年內次序：1 為小寒（黃經 285°），依次每 15° 一氣，24 為冬至（270°）。
//! 僅推算 1900 至 2100 年；此範圍外 ΔT 無可靠多項式，一律返回 `None`。

use super::table::{FIRST_YEAR, LAST_YEAR};
use crate::date::Date;
use crate::time_scales::{Tt, Ut};

/// 一回歸年內相鄰節氣的平均間隔（日）
const MEAN_TERM_DAYS: f64 = 15.2184;

/// 太陽視黃經每變化一弧度所需的平均日數
const DAYS_PER_RADIAN: f64 = 58.13;

/// 求公曆 `year` 年第 `term` 個節氣的交節時刻。
///
/// `term` 不在 `1..=24`，或 `year` 不在 1900 至 2100 年間，則返回 `None`。
pub fn moment(year: i32, term: u32) -> Option<Tt> {
    if !(1..=24).contains(&term) {
        return None;
    }
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        log::debug!("no solar terms computed for year {year}");
        return None;
    }
    let target = (285.0 + 15.0 * (term - 1) as f64) % 360.0;
    // 小寒一般在 1 月 6 日前後，以此起算。
    let jan6 = Date::from_gregorian(year, 1, 6)?;
    let mut jd = jan6.jdn() as f64 + (term - 1) as f64 * MEAN_TERM_DAYS;
    for iteration in 1..=50 {
        let diff = (target - apparent_longitude(Tt(jd))).to_radians();
        let step = DAYS_PER_RADIAN * diff.sin();
        jd += step;
        if step.abs() < 1e-7 {
            log::trace!("term {term} of {year} converged after {iteration} iterations");
            break;
        }
    }
    Some(Tt(jd))
}

/// 求公曆 `year` 年第 `term` 個節氣在東 `tz_offset_minutes` 分鐘時區的交節日期。
///
/// # 用例
///
/// ```
/// use solarlunar::chinese::terms;
///
/// // 2017 年立春
/// let date = terms::date(2017, 3, 480).unwrap();
/// assert_eq!("2017-02-03", date.to_string());
/// ```
pub fn date(year: i32, term: u32, tz_offset_minutes: i32) -> Option<Date> {
    moment(year, term).map(|tt| Ut::convert(tt).date_in_timezone(tz_offset_minutes))
}

/// 求公曆 `year` 年全部 24 個節氣的交節日期，依序號排列。
pub fn dates_for_year(year: i32, tz_offset_minutes: i32) -> Option<[Date; 24]> {
    let mut dates = [Date::from_jdn(0); 24];
    for (term, slot) in (1..).zip(dates.iter_mut()) {
        *slot = date(year, term, tz_offset_minutes)?;
    }
    Some(dates)
}

/// 太陽視黃經，單位為度，範圍 `0.0..360.0`。
pub fn apparent_longitude(tt: Tt) -> f64 {
    let t = (tt.0 - 2451545.0) / 36525.0;
    let mean_longitude = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let anomaly = (357.52911 + t * (35999.05029 - t * 0.0001537)).to_radians();
    let center = (1.914602 - t * (0.004817 + t * 0.000014)) * anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * anomaly).sin()
        + 0.000289 * (3.0 * anomaly).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    (mean_longitude + center - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_2017() {
        let dates = dates_for_year(2017, 480).unwrap();
        let stds = [
            "2017-01-05", "2017-01-20", "2017-02-03", "2017-02-18", "2017-03-05", "2017-03-20",
            "2017-04-04", "2017-04-20", "2017-05-05", "2017-05-21", "2017-06-05", "2017-06-21",
            "2017-07-07", "2017-07-22", "2017-08-07", "2017-08-23", "2017-09-07", "2017-09-23",
            "2017-10-08", "2017-10-23", "2017-11-07", "2017-11-22", "2017-12-07", "2017-12-22",
        ];
        for (term, (std, date)) in (1..).zip(stds.iter().zip(dates)) {
            assert_eq!(*std, date.to_string(), "term {term}");
        }
    }

    #[test]
    fn before_utc_era() {
        // 1950 年立春：2 月 4 日 17 時許
        assert_eq!("1950-02-04", date(1950, 3, 480).unwrap().to_string());
        // 1900 年小寒
        assert_eq!("1900-01-06", date(1900, 1, 480).unwrap().to_string());
    }

    #[test]
    fn timezone_shifts_date() {
        // 2024 年小寒在北京時間 04:43，於 UTC 仍為前一日。
        assert_eq!("2024-01-06", date(2024, 1, 480).unwrap().to_string());
        assert_eq!("2024-01-05", date(2024, 1, 0).unwrap().to_string());
    }

    #[test]
    fn longitude_at_moment() {
        let tt = moment(2024, 6).unwrap(); // 春分
        let lon = apparent_longitude(tt);
        assert!(lon.min(360.0 - lon) < 1e-6, "{lon}");
    }

    #[test]
    fn invalid_term() {
        assert!(moment(2000, 0).is_none());
        assert!(moment(2000, 25).is_none());
    }

    #[test]
    fn years_outside_table() {
        assert!(moment(1899, 24).is_none());
        assert!(moment(2101, 1).is_none());
        assert!(date(1000, 1, 480).is_none());
        assert!(dates_for_year(99999, 480).is_none());
        assert!(moment(1900, 1).is_some());
        assert!(dates_for_year(2100, 480).is_some());
    }
}
