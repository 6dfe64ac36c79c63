//! Синтетические данные о людях для проверки конвейера `youngest`.

use std::sync::LazyLock;

pub mod generator;

/// Имена, по одному на строку, встроены при компиляции.
const FIRST_NAMES_RAW: &str = include_str!("first_names.txt");

/// Фамилии, по одной на строку, встроены при компиляции.
const LAST_NAMES_RAW: &str = include_str!("last_names.txt");

static FIRST_NAMES: LazyLock<Vec<String>> = LazyLock::new(|| parse_name_list(FIRST_NAMES_RAW));
static LAST_NAMES: LazyLock<Vec<String>> = LazyLock::new(|| parse_name_list(LAST_NAMES_RAW));

fn parse_name_list(raw: &str) -> Vec<String> {
    raw.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect()
}

/// Возвращает встроенные имена (непустые строки `first_names.txt`).
///
/// # Примеры
///
/// ```
/// let names = people_gen::first_names();
/// assert!(names.contains(&"Mary".to_string()));
/// ```
pub fn first_names() -> &'static [String] {
    &FIRST_NAMES
}

/// Возвращает встроенные фамилии (непустые строки `last_names.txt`).
pub fn last_names() -> &'static [String] {
    &LAST_NAMES
}
