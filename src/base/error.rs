//! Closed set of failures the bot can run into.
//!
//! Display text is user facing: it ends up inside the failure notice that is
//! delivered to the chat, so it is written in the chat's language.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// A required setting is absent or empty.
    #[error("Не задана обязательная переменная окружения {0}")]
    MissingConfig(&'static str),

    /// The request never produced an HTTP response.
    #[error("Сбой соединения с эндпоинтом {endpoint} (from_date={from_date}): {source}")]
    ApiConnection {
        endpoint: String,
        from_date: i64,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with something other than 200.
    #[error("Эндпоинт {endpoint} (from_date={from_date}) вернул некорректный статус: {status}")]
    WrongApiAnswer {
        endpoint: String,
        from_date: i64,
        status: reqwest::StatusCode,
    },

    #[error("Некорректный ответ API: {0}")]
    MalformedResponse(String),

    #[error("В ответе API отсутствует ключ `{0}`")]
    MissingKey(&'static str),

    #[error("В ответе API `{field}` пришел не в виде {expected}, а в виде {found}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Неизвестный статус домашней работы: `{0}`")]
    UnknownStatus(String),

    #[error("У домашней работы отсутствует название")]
    InvalidName,

    #[error("Сообщение не было отправлено: {0}")]
    SendMessage(String),
}
