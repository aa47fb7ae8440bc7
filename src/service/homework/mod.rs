//! Homework review API integration.

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use crate::base::types::BotResult;

pub mod practicum;

// Traits.

/// Generic homework status source that clients must implement.
///
/// Implementations perform exactly one request per call and never retry;
/// retrying is the poll loop's job.
#[async_trait]
pub trait GenericHomeworkClient: Send + Sync + 'static {
    /// Fetch homework statuses changed since `from_date` (a Unix timestamp).
    ///
    /// Returns the decoded JSON body untouched.
    async fn homework_statuses(&self, from_date: i64) -> BotResult<Value>;
}

// Structs.

/// Homework client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct HomeworkClient {
    inner: Arc<dyn GenericHomeworkClient>,
}

impl Deref for HomeworkClient {
    type Target = dyn GenericHomeworkClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl HomeworkClient {
    pub fn new(inner: Arc<dyn GenericHomeworkClient>) -> Self {
        Self { inner }
    }
}
