//! Тип записи [`Person`].

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Один человек: имя, фамилия и дата рождения.
///
/// Имена гарантированно непустые, иначе [`Person::new`] и
/// [`Person::parse_line`] возвращают ошибку. Поля приватные, поэтому
/// построенная запись не меняется.
///
/// # Пример
///
/// ```
/// use jiff::civil::date;
/// use people::person::Person;
///
/// let p = Person::new("Ann", "Lee", date(1990, 1, 1)).unwrap();
/// assert_eq!(p.to_string(), "Ann Lee (1990-01-01)");
///
/// assert!(Person::new("  ", "Lee", date(1990, 1, 1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PersonFields")]
pub struct Person {
    first_name: String,
    last_name: String,
    date_of_birth: Date,
}

impl Person {
    /// Создаёт запись, отклоняя пустые имена.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: Date,
    ) -> Result<Self, RecordError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        validate_names(&first_name, &last_name)?;
        Ok(Self { first_name, last_name, date_of_birth })
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Дата рождения. Более поздняя дата означает более молодого человека.
    #[must_use]
    pub fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.date_of_birth)
    }
}

pub(super) fn validate_names(first_name: &str, last_name: &str) -> Result<(), RecordError> {
    if first_name.trim().is_empty() {
        return Err(RecordError::EmptyFirstName);
    }
    if last_name.trim().is_empty() {
        return Err(RecordError::EmptyLastName);
    }
    Ok(())
}

/// Непроверенная форма для serde; десериализация идёт через [`Person::new`].
#[derive(Deserialize)]
struct PersonFields {
    first_name: String,
    last_name: String,
    date_of_birth: Date,
}

impl TryFrom<PersonFields> for Person {
    type Error = RecordError;

    fn try_from(fields: PersonFields) -> Result<Self, Self::Error> {
        Self::new(fields.first_name, fields.last_name, fields.date_of_birth)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn accessors_return_constructed_values() {
        let p = Person::new("Ann", "O'Brien", date(1990, 1, 1)).unwrap();
        assert_eq!(p.first_name(), "Ann");
        assert_eq!(p.last_name(), "O'Brien");
        assert_eq!(p.date_of_birth(), date(1990, 1, 1));
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(Person::new("", "Lee", date(2000, 1, 1)), Err(RecordError::EmptyFirstName));
        assert_eq!(Person::new("Ann", " \t", date(2000, 1, 1)), Err(RecordError::EmptyLastName));
    }

    #[test]
    fn equality_is_by_value() {
        let a = Person::new("Ann", "Lee", date(2000, 1, 1)).unwrap();
        let b = Person::new("Ann", "Lee", date(2000, 1, 1)).unwrap();
        let c = Person::new("Ann", "Lee", date(2000, 1, 2)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serializes_to_json() {
        let p = Person::new("Ann", "Lee", date(2010, 5, 17)).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"first_name":"Ann","last_name":"Lee","date_of_birth":"2010-05-17"}"#
        );
    }

    #[test]
    fn deserialization_enforces_invariants() {
        let ok: Person = serde_json::from_str(
            r#"{"first_name":"Ann","last_name":"Lee","date_of_birth":"2010-05-17"}"#,
        )
        .unwrap();
        assert_eq!(ok.date_of_birth(), date(2010, 5, 17));

        let blank = serde_json::from_str::<Person>(
            r#"{"first_name":" ","last_name":"Lee","date_of_birth":"2010-05-17"}"#,
        );
        assert!(blank.is_err());
    }
}
