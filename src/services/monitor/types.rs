/// Outcome of a single poll that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A new status was found and handed to the notifier
    Notified(String),
    /// The API answered with an empty `homeworks` list
    NoUpdates,
    /// Transport or decode failure; nothing was checked and the cursor stayed put
    Skipped,
}

/// Faults raised while checking the homework API. Every variant ends up in
/// a chat notification, so the texts are written for the student.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BotError {
    #[error("Ошибка ответа от API Практикума: код {0}")]
    BadResponse(u16),
    #[error("Неожиданный формат ответа API: {0}")]
    Shape(String),
    #[error("Ошибка формата from_date: {0}")]
    Timestamp(String),
    #[error("Запрос с некорректным токеном: {0}")]
    Auth(String),
    #[error("В ответе API домашки нет ключа homework_name")]
    MissingName,
    #[error("Неизвестный статус домашней работы: {0}")]
    UnknownStatus(String),
}

/// Prefix of every fault notification.
pub const FAULT_PREFIX: &str = "Сбой в работе программы";

pub fn fault_message(error: &BotError) -> String {
    format!("{}: {}", FAULT_PREFIX, error)
}
