//! Генератор случайных записей о людях с фиксированным seed.

use std::io::Write;

use jiff::{Span, civil::Date};
use people::{
    error::{RecordError, WriteError},
    person::Person,
    writer::PersonWriter,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::info;

/// Прогресс логируется каждые столько строк.
pub const PROGRESS_INTERVAL: u64 = 1 << 18;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: Date, end: Date },

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Бесконечный воспроизводимый поток случайных людей.
///
/// Имена выбираются равномерно из встроенных списков, даты рождения
/// равномерно из `[start, end]` включительно. Одинаковые seed и диапазон
/// всегда дают одну и ту же последовательность.
///
/// # Примеры
///
/// ```
/// use jiff::civil::date;
/// use people::person::Person;
/// use people_gen::generator::PersonGenerator;
///
/// let start = date(2000, 1, 1);
/// let end = date(2000, 12, 31);
/// let a: Vec<Person> =
///     PersonGenerator::new(7, start, end).unwrap().take(5).collect::<Result<_, _>>().unwrap();
/// let b: Vec<Person> =
///     PersonGenerator::new(7, start, end).unwrap().take(5).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(a, b);
/// assert!(a.iter().all(|p| (start..=end).contains(&p.date_of_birth())));
/// ```
pub struct PersonGenerator {
    rng: StdRng,
    start: Date,
    /// Число дней от `start` до конца диапазона.
    days: i32,
}

impl PersonGenerator {
    /// Создаёт генератор для дат рождения из `[start, end]`.
    pub fn new(seed: u64, start: Date, end: Date) -> Result<Self, GeneratorError> {
        if start > end {
            return Err(GeneratorError::InvalidRange { start, end });
        }
        let days = start.until(end)?.get_days();
        Ok(Self { rng: StdRng::seed_from_u64(seed), start, days })
    }

    /// Создаёт следующего случайного человека.
    pub fn next_person(&mut self) -> Result<Person, GeneratorError> {
        let first = pick(&mut self.rng, crate::first_names());
        let last = pick(&mut self.rng, crate::last_names());
        let offset = self.rng.random_range(0..=self.days);
        let dob = self.start.checked_add(Span::new().days(offset))?;
        Ok(Person::new(first, last, dob)?)
    }
}

impl Iterator for PersonGenerator {
    type Item = Result<Person, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_person())
    }
}

fn pick<'a>(rng: &mut StdRng, names: &'a [String]) -> &'a str {
    &names[rng.random_range(0..names.len())]
}

/// Записывает `count` сгенерированных строк, при необходимости с заголовком.
///
/// Возвращает число записанных строк.
pub fn write_people<W: Write>(
    out: W,
    generator: &mut PersonGenerator,
    count: u64,
    header: bool,
) -> Result<u64, GeneratorError> {
    let mut writer = PersonWriter::new(out);
    if header {
        writer.write_header()?;
    }

    for row in 1..=count {
        writer.write(&generator.next_person()?)?;
        if row % PROGRESS_INTERVAL == 0 {
            info!(rows = row, "generating");
        }
    }

    writer.flush()?;
    Ok(count)
}
