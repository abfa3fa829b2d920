//! 日期文本格式化
//!
//! 所有涉及繁簡差異的函數都接受 [`Script`] 參數；干支、數字等兩者相同者則不需要。

use serde::{Deserialize, Serialize};

use super::Month;

/// 輸出文字的字形。
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// 简体（默認）
    #[default]
    Simplified,
    /// 繁體
    Traditional,
}

impl Script {
    fn pick(self, simplified: &'static str, traditional: &'static str) -> &'static str {
        match self {
            Script::Simplified => simplified,
            Script::Traditional => traditional,
        }
    }
}

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 天干，自「甲」起
pub const GAN: &[&str] = &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
/// 地支，自「子」起
pub const ZHI: &[&str] = &[
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 干支序號轉為文本形式，1 為甲子，60 為癸亥。
///
/// # 用例
///
/// ```
/// use solarlunar::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    gan_zhi(num.wrapping_sub(1))
}

/// 以 0 為甲子的偏移量轉為干支文本，超過 60 者循環。
///
/// ```
/// use solarlunar::chinese::fmt::gan_zhi;
///
/// assert_eq!("甲子", gan_zhi(0));
/// assert_eq!("癸亥", gan_zhi(59));
/// assert_eq!("甲子", gan_zhi(60));
/// ```
pub fn gan_zhi(offset: u32) -> String {
    GAN[(offset % 10) as usize].to_owned() + ZHI[(offset % 12) as usize]
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「腊月」。
///
/// # 用例
///
/// ```
/// use solarlunar::chinese::{fmt::{self, Script}, Month::*};
///
/// assert_eq!("冬月", fmt::month(Common(11), Script::Simplified));
/// assert_eq!("闰六月", fmt::month(Leap(6), Script::Simplified));
/// assert_eq!("閏正月", fmt::month(Leap(1), Script::Traditional));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: Month, script: Script) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += script.pick("闰", "閏");
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => script.pick("腊", "臘"),
        _ => panic!("month {num} not in 1..=12"),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use solarlunar::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {d} not in 1..=30"),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 年份逐位讀作漢字，後綴「年」。
///
/// ```
/// use solarlunar::chinese::fmt::year;
///
/// assert_eq!("二零一七年", year(2017));
/// ```
pub fn year(y: i32) -> String {
    const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];
    let mut rt: String = y
        .unsigned_abs()
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGITS[d as usize])
        .collect();
    rt.push('年');
    rt
}

/// 生肖，依農曆年取得。
///
/// ```
/// use solarlunar::chinese::fmt::{animal, Script};
///
/// assert_eq!("鸡", animal(2017, Script::Simplified));
/// assert_eq!("龍", animal(2024, Script::Traditional));
/// ```
pub fn animal(lunar_year: i32, script: Script) -> &'static str {
    const SIMPLIFIED: [&str; 12] = [
        "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
    ];
    const TRADITIONAL: [&str; 12] = [
        "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
    ];
    let idx = (lunar_year - 4).rem_euclid(12) as usize;
    script.pick(SIMPLIFIED[idx], TRADITIONAL[idx])
}

/// 星期名，`1..=7` 分別為星期一到星期日。
///
/// ```
/// use solarlunar::chinese::fmt::weekday;
///
/// assert_eq!("星期日", weekday(7));
/// ```
pub fn weekday(day_of_week: u32) -> String {
    const NAMES: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];
    "星期".to_owned() + NAMES[(day_of_week % 7) as usize]
}

/// 節氣序號轉為名稱。`1..=24` 分別為小寒到冬至，見 [`super::terms`]。
///
/// # 用例
///
/// ```
/// use solarlunar::chinese::fmt::{solar_term, Script};
///
/// assert_eq!("谷雨", solar_term(8, Script::Simplified));
/// assert_eq!("驚蟄", solar_term(5, Script::Traditional));
/// ```
pub fn solar_term(term: u32, script: Script) -> &'static str {
    const SIMPLIFIED: [&str; 24] = [
        "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满",
        "芒种", "夏至", "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬",
        "小雪", "大雪",
    ];
    const TRADITIONAL: [&str; 24] = [
        "冬至", "小寒", "大寒", "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿",
        "芒種", "夏至", "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬",
        "小雪", "大雪",
    ];
    let idx = (term % 24) as usize;
    script.pick(SIMPLIFIED[idx], TRADITIONAL[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("癸亥", 60), ("丁酉", 34)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    fn test_month() {
        use Month::*;
        assert_eq!("正月", month(Common(1), Script::Simplified));
        assert_eq!("十月", month(Common(10), Script::Simplified));
        assert_eq!("腊月", month(Common(12), Script::Simplified));
        assert_eq!("臘月", month(Common(12), Script::Traditional));
        assert_eq!("閏冬月", month(Leap(11), Script::Traditional));
    }

    #[test]
    fn test_year_and_animal() {
        assert_eq!("一九零零年", year(1900));
        assert_eq!("二一零零年", year(2100));
        assert_eq!("鼠", animal(1900, Script::Simplified));
        assert_eq!("猪", animal(2019, Script::Simplified));
    }

    #[test]
    fn test_terms() {
        assert_eq!("小寒", solar_term(1, Script::Simplified));
        assert_eq!("冬至", solar_term(24, Script::Simplified));
        assert_eq!("處暑", solar_term(16, Script::Traditional));
    }
}
