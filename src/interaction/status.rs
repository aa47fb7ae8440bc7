use crate::base::{
    error::BotError,
    messages,
    types::{BotResult, Homework, HomeworkStatus},
};

/// Build the status-change notification for a single homework.
///
/// The name is checked before the status, so a nameless record is always an
/// `InvalidName` error whatever its status.
pub fn parse_status(homework: &Homework) -> BotResult<String> {
    let name = homework.homework_name.as_deref().filter(|name| !name.is_empty()).ok_or(BotError::InvalidName)?;

    let status: HomeworkStatus = homework.status.as_deref().unwrap_or_default().parse()?;

    Ok(messages::status_changed(name, status.verdict()))
}
