//! Ошибки построения записей, разбора строк и записи.

use thiserror::Error;

/// Не удалось построить [`Person`](crate::person::Person) из переданных значений.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Имя пустое или состоит из пробелов.
    #[error("first name is empty")]
    EmptyFirstName,
    /// Фамилия пустая или состоит из пробелов.
    #[error("last name is empty")]
    EmptyLastName,
}

/// Причина, по которой строка входа отклонена парсером.
///
/// Для некорректного входа это штатный исход: reader сообщает о строке
/// и переходит к следующей.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Строка пустая или состоит из пробелов.
    #[error("empty line")]
    EmptyLine,

    /// Меньше трёх полей, разделённых запятыми.
    #[error("expected 3 fields, found {found}")]
    MissingFields {
        /// Сколько полей найдено.
        found: usize,
    },

    /// Недопустимы сами значения записи.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Третье поле не распознаётся как календарная дата.
    #[error("invalid date of birth '{0}'")]
    InvalidDate(String),

    /// Строка не является корректным UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// Ошибки [`PersonWriter`](crate::writer::PersonWriter).
#[derive(Debug, Error)]
pub enum WriteError {
    /// Ошибка ввода-вывода нижележащего writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка кодирования CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Значение поля не прочитается обратно парсером строк.
    #[error("field {field} cannot be written as plain text: '{value}'")]
    Unrepresentable {
        /// Имя поля.
        field: &'static str,
        /// Само значение.
        value: String,
    },
}

/// Тип результата для операций записи.
pub type WriteResult<T> = Result<T, WriteError>;
