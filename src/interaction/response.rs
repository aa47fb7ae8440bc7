use serde::Deserialize;
use serde_json::Value;

use crate::base::{
    error::BotError,
    types::{BotResult, Homework},
};

/// Key under which the API returns the homework list.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key under which the API returns the server time used as the next cursor.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Check the API response and extract its homework list.
///
/// The records are returned untouched and in the order the server sent them;
/// only the ones actually reported get decoded, see [`decode_homework`].
pub fn check_response(response: &Value) -> BotResult<Vec<Value>> {
    let body = response.as_object().ok_or(BotError::UnexpectedType {
        field: "response",
        expected: "object",
        found: json_type_name(response),
    })?;

    let homeworks = body.get(HOMEWORKS_KEY).ok_or(BotError::MissingKey(HOMEWORKS_KEY))?;

    let Value::Array(items) = homeworks else {
        return Err(BotError::UnexpectedType {
            field: HOMEWORKS_KEY,
            expected: "array",
            found: json_type_name(homeworks),
        });
    };

    Ok(items.clone())
}

/// Decode a single homework record.
pub fn decode_homework(record: &Value) -> BotResult<Homework> {
    Homework::deserialize(record).map_err(|e| BotError::MalformedResponse(format!("homework record: {e}")))
}

/// The server-reported date, if present and an integer.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
