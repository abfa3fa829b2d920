//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 農曆月份由預製年表 [`table`] 推得，節氣由 [`terms`] 以天文公式推算。

use serde::{Deserialize, Serialize};

use crate::date::Date;

pub mod fmt;
pub mod table;
pub mod terms;

/// 農曆年，自正月初一至除夕。
///
/// 支持 1900 至 2100 年，見 [`table`]。
///
/// # 用例
///
/// ```
/// use solarlunar::Date;
/// use solarlunar::chinese::{LunarYear, Month::*};
///
/// let date = Date::from_gregorian(2017, 7, 23).unwrap();
/// let year = LunarYear::from_date(date).unwrap();
///
/// assert_eq!(Ok((2017, Leap(6), 1)), year.ymd_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 年序，為正月所在公元年
    pub year: i32,
    /// 該年的年表記錄
    pub info: &'static table::YearInfo,
    /// 全部月首，末項為次年正月初一，用以標記本年最末日
    pub months: Vec<MonthStart>,
}

/// 月首信息
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MonthStart {
    /// 月名
    pub month: Month,
    /// 月首（初一）所在日期
    pub date: Date,
}

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// 以月序及是否閏月構造月名。
    pub fn new(num: u32, leap: bool) -> Self {
        if leap { Month::Leap(num) } else { Month::Common(num) }
    }
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「腊月」。
    pub fn name(&self, script: fmt::Script) -> String {
        fmt::month(*self, script)
    }
}

impl LunarYear {
    /// 取得農曆 `year` 年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use solarlunar::chinese::LunarYear;
    ///
    /// let year = LunarYear::new(2017).unwrap();
    /// assert_eq!(14, year.months.len()); // 含閏六月及次年正月
    /// ```
    pub fn new(year: i32) -> Option<Self> {
        table::YearInfo::get(year).map(Self::from_info)
    }

    fn from_info(info: &'static table::YearInfo) -> Self {
        let leap = info.leap_month();
        let mut months = Vec::with_capacity(14);
        let mut date = info.new_year;
        for num in 1..=12 {
            months.push(MonthStart {
                month: Month::Common(num),
                date,
            });
            date = date + info.month_days(num).unwrap_or(29) as i32;
            if leap == Some(num) {
                months.push(MonthStart {
                    month: Month::Leap(num),
                    date,
                });
                date = date + info.leap_days() as i32;
            }
        }
        months.push(MonthStart {
            month: Month::Common(1),
            date,
        });

        LunarYear {
            year: info.year,
            info,
            months,
        }
    }

    /// 依特定日期取得其所在農曆年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use solarlunar::Date;
    /// use solarlunar::chinese::LunarYear;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(1999, year.year);
    /// ```
    pub fn from_date(date: Date) -> Option<Self> {
        table::YearInfo::containing(date).map(Self::from_info)
    }

    /// 取得給定日期在該年的年月日，返回格式為 `(年, 月, 日)`。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use solarlunar::Date;
    /// use solarlunar::chinese::{LunarYear, Month::*};
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(Ok((1999, Common(11), 25)), year.ymd_for(date));
    /// ```
    pub fn ymd_for(&self, date: Date) -> Result<(i32, Month, u32), OtherYear> {
        if date < self.first_day() {
            return Err(OtherYear::Before);
        } else if date >= self.end() {
            return Err(OtherYear::After);
        }

        let idx = self.months.partition_point(|m| m.date <= date) - 1;
        let m = &self.months[idx];
        Ok((self.year, m.month, (date - m.date) as u32 + 1))
    }

    /// 取得某月初一的日期；該年無此月則返回 `None`。
    pub fn month_start(&self, month: Month) -> Option<Date> {
        self.month_span(month).map(|(start, _)| start)
    }

    /// 取得某月的日數；該年無此月則返回 `None`。
    pub fn month_len(&self, month: Month) -> Option<u32> {
        self.month_span(month).map(|(_, len)| len)
    }

    /// 正月初一
    pub fn first_day(&self) -> Date {
        self.months[0].date
    }

    /// 次年正月初一，即本年最末日之次日。
    pub fn end(&self) -> Date {
        self.months[self.months.len() - 1].date
    }

    fn month_span(&self, month: Month) -> Option<(Date, u32)> {
        let months = &self.months[..self.months.len() - 1];
        let idx = months.iter().position(|m| m.month == month)?;
        let start = self.months[idx].date;
        Some((start, (self.months[idx + 1].date - start) as u32))
    }
}

/// 表示給定日期不在該年，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

/// 取得所給公元年的干支序號，1 為甲子。
///
/// # 用例
///
/// ```
/// use solarlunar::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(1984));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year - 4).rem_euclid(60) as u32 + 1
}

/// 取得公曆 `year` 年 `month` 月（交該月之節後）的月干支序號，1 為甲子。
///
/// 月柱以節氣為界：`month` 月首個節氣之前仍屬上一月柱。
pub fn sexagenary_for_month(year: i32, month: u32, after_first_term: bool) -> u32 {
    let offset = (year - 1900) * 12 + month as i32 + 11 + after_first_term as i32;
    offset.rem_euclid(60) as u32 + 1
}
