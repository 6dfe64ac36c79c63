//! Нестрогий разбор дат, не зависящий от локали.

use jiff::civil::{Date, DateTime};

/// Форматы без времени, пробуются после ISO. В форматах через слэш месяц
/// идёт первым (инвариантная, американская запись).
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%Y.%m.%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d-%b-%Y",
];

/// Форматы со временем суток (24- и 12-часовым); время отбрасывается.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %I:%M:%S %p",
    "%Y/%m/%d %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

/// Разбирает календарную дату, отбрасывая время суток.
///
/// Сначала пробуются ISO `YYYY-MM-DD` и ISO date-time (через `T` или пробел,
/// со смещением или без), затем фиксированный набор форматов через слэш,
/// точку и с названием месяца. Смещение игнорируется: дата берётся как
/// записана.
///
/// # Примеры
///
/// ```
/// use jiff::civil::date;
/// use people::person::parse_date;
///
/// assert_eq!(parse_date("2010-01-31"), Some(date(2010, 1, 31)));
/// assert_eq!(parse_date("2010-01-31T23:59:00"), Some(date(2010, 1, 31)));
/// assert_eq!(parse_date("Jan 31, 2010"), Some(date(2010, 1, 31)));
/// assert_eq!(parse_date("not-a-date"), None);
/// ```
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = s.parse::<Date>() {
        return Some(date);
    }
    if let Ok(dt) = s.parse::<DateTime>() {
        return Some(dt.date());
    }
    // civil-разбор не принимает `Z`, сам момент времени здесь не нужен
    if let Some(local) = s.strip_suffix(&['Z', 'z'][..])
        && let Ok(dt) = local.parse::<DateTime>()
    {
        return Some(dt.date());
    }

    DATE_FORMATS.iter().find_map(|fmt| Date::strptime(fmt, s).ok()).or_else(|| {
        DATETIME_FORMATS.iter().find_map(|fmt| DateTime::strptime(fmt, s).ok().map(|dt| dt.date()))
    })
}
