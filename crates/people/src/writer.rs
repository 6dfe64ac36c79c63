//! Потоковый writer для канонического представления `First,Last,YYYY-MM-DD`.
//!
//! Предоставляет [`PersonWriter`] для записи в любой тип, реализующий
//! [`Write`]. Результат всегда читается
//! [`PersonReader`](crate::reader::PersonReader): значения, которые парсер
//! строк не прочитает обратно, отклоняются, а не экранируются.

use std::io::Write;

use crate::{
    error::{WriteError, WriteResult},
    person::Person,
};

/// Строка заголовка с названиями колонок.
pub const HEADER: &str = "FirstName,LastName,DateOfBirth";

/// Потоковый writer записей о людях.
///
/// Строки проходят через [`csv::Writer`], у которого свой буфер.
///
/// # Type Parameters
///
/// - `W`: приёмник данных (реализует [`Write`])
///
/// # Пример
///
/// ```
/// use jiff::civil::date;
/// use people::{person::Person, writer::PersonWriter};
///
/// let mut out = Vec::new();
/// {
///     let mut writer = PersonWriter::new(&mut out);
///     writer.write_header().unwrap();
///     writer.write(&Person::new("Ann", "Lee", date(1990, 1, 1)).unwrap()).unwrap();
///     writer.flush().unwrap();
/// }
/// assert_eq!(String::from_utf8(out).unwrap(), "FirstName,LastName,DateOfBirth\nAnn,Lee,1990-01-01\n");
/// ```
pub struct PersonWriter<W: Write> {
    inner: csv::Writer<W>,
    /// Количество записанных записей.
    records_written: usize,
    /// Был ли уже записан заголовок.
    header_written: bool,
}

impl<W: Write> PersonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: csv::WriterBuilder::new().has_headers(false).from_writer(writer),
            records_written: 0,
            header_written: false,
        }
    }

    /// Записывает заголовок. Повторные вызовы ничего не делают.
    pub fn write_header(&mut self) -> WriteResult<()> {
        if !self.header_written {
            self.inner.write_record(HEADER.split(','))?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Записывает одну запись.
    ///
    /// # Ошибки
    ///
    /// [`WriteError::Unrepresentable`], если имя содержит запятую, двойную
    /// кавычку, перевод строки или пробелы по краям.
    pub fn write(&mut self, person: &Person) -> WriteResult<()> {
        check_field("first_name", person.first_name())?;
        check_field("last_name", person.last_name())?;

        let dob = person.date_of_birth().to_string();
        self.inner.write_record([person.first_name(), person.last_name(), dob.as_str()])?;
        self.records_written += 1;
        Ok(())
    }

    /// Записывает несколько записей.
    pub fn write_all<'a, I>(&mut self, people: I) -> WriteResult<()>
    where
        I: IntoIterator<Item = &'a Person>,
    {
        for person in people {
            self.write(person)?;
        }
        Ok(())
    }

    /// Сбрасывает буфер в нижележащий writer.
    pub fn flush(&mut self) -> WriteResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Сбрасывает буфер и возвращает нижележащий writer.
    pub fn into_inner(self) -> WriteResult<W> {
        self.inner.into_inner().map_err(|e| WriteError::Io(e.into_error()))
    }
}

fn check_field(field: &'static str, value: &str) -> WriteResult<()> {
    let unsafe_char = value.contains([',', '"', '\r', '\n']);
    if unsafe_char || value.trim() != value {
        return Err(WriteError::Unrepresentable { field, value: value.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use jiff::civil::date;

    use super::*;
    use crate::reader::PersonReader;

    fn person(first: &str, last: &str) -> Person {
        Person::new(first, last, date(1999, 12, 31)).unwrap()
    }

    #[test]
    fn writes_canonical_lines() {
        let mut writer = PersonWriter::new(Vec::new());
        writer.write(&person("Ann", "O'Brien")).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "Ann,O'Brien,1999-12-31\n");
    }

    #[test]
    fn header_is_written_once() {
        let mut writer = PersonWriter::new(Vec::new());
        writer.write_header().unwrap();
        writer.write_header().unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, format!("{HEADER}\n"));
    }

    #[test]
    fn counts_records() {
        let mut writer = PersonWriter::new(Vec::new());
        assert_eq!(writer.records_written(), 0);
        writer.write_all(&[person("A", "B"), person("C", "D")]).unwrap();
        assert_eq!(writer.records_written(), 2);
    }

    #[test]
    fn refuses_values_the_reader_cannot_parse() {
        let mut writer = PersonWriter::new(Vec::new());
        for bad in [person("Smith, Jr", "X"), person("X", "Say \"hi\""), person(" Ann", "X")] {
            assert!(matches!(writer.write(&bad), Err(WriteError::Unrepresentable { .. })));
        }
        assert_eq!(writer.records_written(), 0);
    }

    #[test]
    fn output_reads_back() {
        let people = vec![person("Ann", "Lee"), person("José", "Núñez"), person("Bo", "Li")];

        let mut writer = PersonWriter::new(Vec::new());
        writer.write_header().unwrap();
        writer.write_all(&people).unwrap();
        let bytes = writer.into_inner().unwrap();

        let read: Vec<Person> =
            PersonReader::new(Cursor::new(bytes)).collect::<std::io::Result<_>>().unwrap();
        assert_eq!(read, people);
    }
}
