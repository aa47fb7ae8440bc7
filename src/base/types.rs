use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{error::BotError, messages};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Result type for component-level operations.
pub type BotResult<T> = Result<T, BotError>;

/// Start of the next query window, as a Unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(i64);

impl Cursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// A cursor pointing at the current wall-clock time.
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Moves the cursor to the server-reported date.
    ///
    /// When the server omits the date the cursor stays where it is, so the
    /// next request re-queries the same window. Returns whether it moved.
    pub fn advance(&mut self, current_date: Option<i64>) -> bool {
        match current_date {
            Some(date) => {
                self.0 = date;
                true
            }
            None => false,
        }
    }
}

/// A homework record as reported by the review API.
///
/// Only the fields this bot reads are decoded; anything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Review status of a homework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// The human-readable verdict for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => messages::VERDICT_APPROVED,
            HomeworkStatus::Reviewing => messages::VERDICT_REVIEWING,
            HomeworkStatus::Rejected => messages::VERDICT_REJECTED,
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(BotError::UnknownStatus(other.to_string())),
        }
    }
}
