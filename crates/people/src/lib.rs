//! Потоковый выбор самых молодых людей из файла с записями.
//!
//! Крейт состоит из нескольких небольших частей, которые вместе образуют
//! однопроходный конвейер:
//!
//! - [`person`]: запись [`Person`](person::Person) и разбор строки
//! - [`reader`]: [`PersonReader`](reader::PersonReader), источник записей,
//!   который пропускает заголовок и передаёт некорректные строки в sink
//! - [`select`]: ограниченная min-куча и выбор top-K поверх неё
//! - [`writer`]: [`PersonWriter`](writer::PersonWriter) для канонического
//!   представления `First,Last,YYYY-MM-DD`
//!
//! # Быстрый старт
//!
//! ```
//! use std::io::Cursor;
//!
//! use people::prelude::*;
//!
//! let input = "FirstName,LastName,DateOfBirth\n\
//!              Ann,Lee,1980-01-01\n\
//!              Bob,Ray,2010-01-01\n\
//!              broken line\n\
//!              Cid,Fox,2000-01-01\n";
//!
//! let mut invalid = Vec::new();
//! let reader = PersonReader::with_sink(Cursor::new(input), |line: &str| {
//!     invalid.push(line.to_string())
//! });
//! let top = try_youngest(reader, 2).unwrap();
//!
//! assert_eq!(top[0].first_name(), "Bob");
//! assert_eq!(top[1].first_name(), "Cid");
//! assert_eq!(invalid, vec!["broken line"]);
//! ```

pub mod error;
pub mod person;
pub mod reader;
pub mod select;
pub mod writer;

/// Часто используемые типы для `use people::prelude::*`.
pub mod prelude {
    pub use crate::{
        error::{RecordError, RejectReason, WriteError},
        person::Person,
        reader::{PersonReader, ReadStats},
        select::{MinHeap, select_top_by_key, try_youngest, youngest},
        writer::{HEADER, PersonWriter},
    };
}
