//! Потоковый reader для записей о людях.
//!
//! Предоставляет [`PersonReader`]: итератор, который читает по одной строке
//! из любого источника, реализующего [`Read`], пропускает заголовок и
//! возвращает разобранные записи [`Person`]. Некорректные строки передаются
//! в sink и не прерывают поток.

use std::{
    borrow::Cow,
    io::{self, BufRead, BufReader, Read},
};

use tracing::{debug, trace};

use crate::{error::RejectReason, person::Person};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Счётчики, собранные при чтении.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Строки, прочитанные из источника, включая заголовок.
    pub lines_read: usize,
    /// Строки, из которых получилась запись.
    pub records_parsed: usize,
    /// Строки, отклонённые парсером.
    pub invalid_lines: usize,
    /// Была ли первая непустая строка распознана как заголовок.
    pub header_skipped: bool,
}

/// Потоковый reader записей о людях.
///
/// Реализует [`Iterator`] с `Item = io::Result<Person>`. `Err` означает сбой
/// источника, после него reader завершён. Строки, которые не разбираются,
/// передаются в sink `F` (исходный текст, в порядке потока, по одному разу)
/// и пропускаются.
///
/// Первая непустая строка проверяется один раз: если в ней есть `first`,
/// `last` и `birth` (без учёта регистра), это заголовок. Он отбрасывается и
/// не считается ни корректной, ни некорректной строкой.
///
/// # Type Parameters
///
/// - `R`: источник данных (реализует [`Read`])
/// - `F`: приёмник некорректных строк (`FnMut(&str)`)
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use people::reader::PersonReader;
///
/// let input = "FirstName,LastName,DateOfBirth\nAlice,Smith\nBob,Jones,1990-05-01\n";
/// let mut rejected = 0;
/// let mut reader = PersonReader::with_sink(Cursor::new(input), |_: &str| rejected += 1);
///
/// let people: Vec<_> = reader.by_ref().collect::<Result<_, _>>().unwrap();
/// assert_eq!(people.len(), 1);
/// assert!(reader.stats().header_skipped);
/// drop(reader);
/// assert_eq!(rejected, 1);
/// ```
pub struct PersonReader<R, F = fn(&str)> {
    inner: BufReader<R>,
    on_invalid: F,
    /// Текущая строка без перевода строки.
    buf: Vec<u8>,
    stats: ReadStats,
    detect_header: bool,
    header_checked: bool,
    finished: bool,
}

fn discard(_: &str) {}

impl<R: Read> PersonReader<R> {
    /// Создаёт reader, который молча пропускает некорректные строки.
    ///
    /// Они всё равно учитываются в [`ReadStats::invalid_lines`].
    pub fn new(reader: R) -> Self {
        Self::with_sink(reader, discard as fn(&str))
    }
}

impl<R: Read, F: FnMut(&str)> PersonReader<R, F> {
    /// Создаёт reader, который передаёт каждую отклонённую строку в `on_invalid`.
    ///
    /// Источник оборачивается в [`BufReader`].
    pub fn with_sink(reader: R, on_invalid: F) -> Self {
        Self {
            inner: BufReader::new(reader),
            on_invalid,
            buf: Vec::new(),
            stats: ReadStats::default(),
            detect_header: true,
            header_checked: false,
            finished: false,
        }
    }

    /// Включает или выключает распознавание заголовка (включено по умолчанию).
    #[must_use]
    pub fn detect_header(mut self, enabled: bool) -> Self {
        self.detect_header = enabled;
        self
    }

    /// Возвращает накопленные счётчики.
    #[must_use]
    pub fn stats(&self) -> ReadStats {
        self.stats
    }

    /// Возвращает ссылку на источник.
    #[must_use]
    pub fn get_ref(&self) -> &R {
        self.inner.get_ref()
    }

    /// Возвращает источник. Данные, оставшиеся в буфере, теряются.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Читает следующую строку в `buf`, отрезая `\n` или `\r\n`.
    ///
    /// Возвращает `Ok(false)` в конце потока.
    fn next_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        if self.stats.lines_read == 0 && self.buf.starts_with(UTF8_BOM) {
            self.buf.drain(..UTF8_BOM.len());
        }
        Ok(true)
    }
}

impl<R: Read, F: FnMut(&str)> Iterator for PersonReader<R, F> {
    type Item = io::Result<Person>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.next_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
            self.stats.lines_read += 1;
            let line_no = self.stats.lines_read;

            let line = String::from_utf8_lossy(&self.buf);

            if !self.header_checked && !line.trim().is_empty() {
                self.header_checked = true;
                if self.detect_header && is_header(&line) {
                    self.stats.header_skipped = true;
                    debug!(line_no, "skipping header line");
                    continue;
                }
            }

            // Lossy-декодирование аллоцирует только для байтов не в UTF-8
            let parsed = match &line {
                Cow::Borrowed(text) => Person::parse_line(text),
                Cow::Owned(_) => Err(RejectReason::InvalidUtf8),
            };

            match parsed {
                Ok(person) => {
                    self.stats.records_parsed += 1;
                    trace!(line_no, %person, "parsed record");
                    return Some(Ok(person));
                }
                Err(reason) => {
                    self.stats.invalid_lines += 1;
                    debug!(line_no, %reason, "skipping invalid line");
                    (self.on_invalid)(&line);
                }
            }
        }
    }
}

/// Эвристика заголовка: в строке есть first, last и birth.
fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("first") && lower.contains("last") && lower.contains("birth")
}
