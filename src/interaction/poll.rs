use tracing::{debug, error, info, instrument, warn};

use crate::{
    base::{
        messages,
        types::{BotResult, Cursor},
    },
    service::{homework::HomeworkClient, notify::Notifier},
};

use super::{
    response::{check_response, current_date, decode_homework},
    status::parse_status,
};

/// Run one poll cycle and report any failure to the chat.
///
/// A failure produces a notice sent through the same notifier; if that send
/// fails too, it is only logged. The outcome of the cycle itself is returned.
#[instrument(skip_all, fields(cursor = cursor.value()))]
pub async fn run_cycle(cursor: &mut Cursor, homework: &HomeworkClient, notifier: &Notifier) -> BotResult<Option<String>> {
    let result = poll(cursor, homework, notifier).await;

    if let Err(err) = &result {
        error!("Poll cycle failed: {}", err);

        let notice = messages::failure_notice(err);
        if let Err(send_err) = notifier.send_message(&notice).await {
            error!("Failed to deliver failure notice: {}", send_err);
        }
    }

    result
}

/// Fetch, validate, format and send.
///
/// Returns the notification that was sent, or `None` when nothing changed.
#[instrument(skip_all)]
pub async fn poll(cursor: &mut Cursor, homework: &HomeworkClient, notifier: &Notifier) -> BotResult<Option<String>> {
    let response = homework.homework_statuses(cursor.value()).await?;

    if cursor.advance(current_date(&response)) {
        debug!("Cursor advanced to {}", cursor.value());
    } else {
        warn!("Response has no `current_date`; cursor stays at {}.", cursor.value());
    }

    let homeworks = check_response(&response)?;

    // Only the first record of a batch is reported.
    let Some(first) = homeworks.first() else {
        debug!("No homework status changes.");
        return Ok(None);
    };

    if homeworks.len() > 1 {
        warn!("Received {} homework updates; {} beyond the first are not reported.", homeworks.len(), homeworks.len() - 1);
    }

    let first = decode_homework(first)?;
    let message = parse_status(&first)?;
    notifier.send_message(&message).await?;

    info!("Reported status change for `{}`.", first.homework_name.as_deref().unwrap_or_default());

    Ok(Some(message))
}
