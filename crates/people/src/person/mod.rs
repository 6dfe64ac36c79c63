//! Запись о человеке, общая для всех этапов конвейера.
//!
//! [`Person`] является неизменяемым значением: записи с одинаковыми именами и датой
//! равны, а дубликаты ранжируются как независимые элементы.

mod date;
mod parse;
mod types;

pub use date::parse_date;
pub use types::Person;
