//! Разбор строк в представлении `First,Last,Date`.

use std::str::FromStr;

use super::{date::parse_date, types::validate_names};
use crate::{error::RejectReason, person::Person};

const FIELD_COUNT: usize = 3;

impl Person {
    /// Разбирает одну строку (без перевода строки) в запись.
    ///
    /// Строка делится только по первым двум запятым, поэтому лишняя запятая
    /// попадает в поле даты и обычно ломает её разбор. С каждого поля
    /// снимаются пробелы и одна пара обрамляющих двойных кавычек, затем
    /// пробелы снимаются ещё раз. Экранирование не обрабатывается.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`RejectReason`] с первой найденной проблемой: пустая
    /// строка, мало полей, пустое имя или нераспознанная дата.
    ///
    /// # Примеры
    ///
    /// ```
    /// use jiff::civil::date;
    /// use people::person::Person;
    ///
    /// let p = Person::parse_line(r#""  Ann  ","O'Brien","1990-01-01""#).unwrap();
    /// assert_eq!(p.first_name(), "Ann");
    /// assert_eq!(p.last_name(), "O'Brien");
    /// assert_eq!(p.date_of_birth(), date(1990, 1, 1));
    ///
    /// assert!(Person::parse_line("Alice,Smith").is_err());
    /// ```
    pub fn parse_line(line: &str) -> Result<Self, RejectReason> {
        if line.trim().is_empty() {
            return Err(RejectReason::EmptyLine);
        }

        let mut fields = line.splitn(FIELD_COUNT, ',');
        let (Some(first), Some(last), Some(dob)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(RejectReason::MissingFields { found: line.splitn(FIELD_COUNT, ',').count() });
        };

        let first = clean_field(first);
        let last = clean_field(last);
        validate_names(first, last)?;

        let dob = clean_field(dob);
        let date_of_birth =
            parse_date(dob).ok_or_else(|| RejectReason::InvalidDate(dob.to_string()))?;

        Ok(Self::new(first, last, date_of_birth)?)
    }
}

impl FromStr for Person {
    type Err = RejectReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

/// Снимает пробелы, одну пару кавычек и снова пробелы.
fn clean_field(raw: &str) -> &str {
    let s = raw.trim();
    let s = if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    };
    s.trim()
}
