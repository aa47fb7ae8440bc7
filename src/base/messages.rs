//! User-facing message text.

use super::error::BotError;

pub const VERDICT_APPROVED: &str = "Работа проверена: ревьюеру всё понравилось. Ура!";
pub const VERDICT_REVIEWING: &str = "Работа взята на проверку ревьюером.";
pub const VERDICT_REJECTED: &str = "Работа проверена: у ревьюера есть замечания.";

/// Notification for a homework whose review status changed.
pub fn status_changed(homework_name: &str, verdict: &str) -> String {
    format!("Изменился статус проверки работы \"{homework_name}\". {verdict}")
}

/// Notice sent to the chat when a poll cycle fails.
pub fn failure_notice(error: &BotError) -> String {
    format!("Сбой в работе программы: {error}")
}
