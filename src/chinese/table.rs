//! 農曆年表
//!
//! 每年一項 17 位記錄：
//!
//! - 第 0–3 位：閏月月序，0 表示無閏月；
//! - 第 4–15 位：自高位起依次為正月至十二月，置位為大月（30 日），否則小月（29 日）；
//! - 第 16 位：閏月大小，置位為 30 日。
//!
//! 起點為 1900 年正月初一，即公曆 1900 年 1 月 31 日。

use std::sync::LazyLock;

use crate::date::Date;

/// 年表首年
pub const FIRST_YEAR: i32 = 1900;
/// 年表末年
pub const LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
const LUNAR_INFO: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                  // 2100
];

/// 1900 年正月初一的儒略日數
const EPOCH_JDN: u32 = 2415051;

/// 一年的年表記錄，附帶推得的正月初一日期。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct YearInfo {
    /// 農曆年序，以正月所在公元年計
    pub year: i32,
    /// 原始 17 位記錄
    pub bits: u32,
    /// 正月初一
    pub new_year: Date,
}

static YEARS: LazyLock<Vec<YearInfo>> = LazyLock::new(|| {
    let mut new_year = Date::from_jdn(EPOCH_JDN);
    let years: Vec<_> = (FIRST_YEAR..)
        .zip(LUNAR_INFO)
        .map(|(year, bits)| {
            let info = YearInfo {
                year,
                bits,
                new_year,
            };
            new_year = new_year + info.days() as i32;
            info
        })
        .collect();
    log::debug!(
        "lunar year table: {} years, ends before {}",
        years.len(),
        new_year
    );
    years
});

impl YearInfo {
    /// 取得農曆 `year` 年的記錄。
    ///
    /// 不在 1900..=2100 範圍內則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use solarlunar::chinese::table::YearInfo;
    ///
    /// let info = YearInfo::get(2017).unwrap();
    /// assert_eq!("2017-01-28", info.new_year.to_string());
    /// assert_eq!(Some(6), info.leap_month());
    /// ```
    pub fn get(year: i32) -> Option<&'static Self> {
        let idx = usize::try_from(year.checked_sub(FIRST_YEAR)?).ok()?;
        YEARS.get(idx)
    }

    /// 取得 `date` 所在農曆年的記錄。
    ///
    /// 早於 1900 年正月初一或晚於 2100 年除夕則返回 `None`。
    pub fn containing(date: Date) -> Option<&'static Self> {
        let idx = YEARS.partition_point(|y| y.new_year <= date).checked_sub(1)?;
        let info = &YEARS[idx];
        (date < info.new_year + info.days() as i32).then_some(info)
    }

    /// 閏月月序，無閏月為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        match self.bits & 0xf {
            0 => None,
            m => Some(m),
        }
    }

    /// 閏月日數，無閏月為 0。
    pub fn leap_days(&self) -> u32 {
        match self.leap_month() {
            None => 0,
            Some(_) if self.bits & 0x10000 != 0 => 30,
            Some(_) => 29,
        }
    }

    /// 平月 `month` 的日數；月序不在 `1..=12` 則返回 `None`。
    pub fn month_days(&self, month: u32) -> Option<u32> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(if self.bits & (0x10000 >> month) != 0 {
            30
        } else {
            29
        })
    }

    /// 全年日數，含閏月。
    pub fn days(&self) -> u32 {
        let big_months = (self.bits & 0xfff0).count_ones();
        12 * 29 + big_months + self.leap_days()
    }
}

/// 年表所支持的最後一日（公曆 2100 年 12 月 31 日）。
pub fn last_supported_date() -> Date {
    Date::from_jdn(2488434)
}

/// 年表所支持的首日（公曆 1900 年 1 月 31 日）。
pub fn first_supported_date() -> Date {
    Date::from_jdn(EPOCH_JDN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_years() {
        for (year, std) in [
            (1900, "1900-01-31"),
            (1949, "1949-01-29"),
            (1984, "1984-02-02"),
            (2000, "2000-02-05"),
            (2017, "2017-01-28"),
            (2020, "2020-01-25"),
            (2023, "2023-01-22"),
            (2024, "2024-02-10"),
            (2025, "2025-01-29"),
            (2050, "2050-01-23"),
            (2100, "2100-02-09"),
        ] {
            assert_eq!(std, YearInfo::get(year).unwrap().new_year.to_string());
        }
    }

    #[test]
    fn out_of_table() {
        assert!(YearInfo::get(1899).is_none());
        assert!(YearInfo::get(2101).is_none());
        assert!(YearInfo::get(i32::MIN).is_none());
    }

    #[test]
    fn year_lengths() {
        let info = YearInfo::get(2017).unwrap();
        assert_eq!(Some(6), info.leap_month());
        assert_eq!(30, info.leap_days());
        assert_eq!(384, info.days());
        let info = YearInfo::get(2000).unwrap();
        assert_eq!(None, info.leap_month());
        assert_eq!(0, info.leap_days());
        assert_eq!(Some(30), info.month_days(1));
        assert_eq!(Some(29), info.month_days(7));
        assert_eq!(None, info.month_days(0));
        assert_eq!(None, info.month_days(13));
    }

    #[test]
    fn containing_dates() {
        let date = Date::from_gregorian(2017, 1, 27).unwrap();
        assert_eq!(2016, YearInfo::containing(date).unwrap().year);
        let date = Date::from_gregorian(2017, 1, 28).unwrap();
        assert_eq!(2017, YearInfo::containing(date).unwrap().year);
        assert!(YearInfo::containing(first_supported_date() + -1).is_none());
        assert_eq!(
            2100,
            YearInfo::containing(last_supported_date()).unwrap().year
        );
        // 2101 年正月初一不在年表內
        let after = Date::from_gregorian(2101, 1, 29).unwrap();
        assert!(YearInfo::containing(after).is_none());
    }
}
