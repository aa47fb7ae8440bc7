//! Notification delivery.
//!
//! This module defines the `GenericNotifier` trait that can be implemented for
//! different messaging platforms, with a default implementation for Telegram.

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::BotResult;

pub mod telegram;

// Traits.

/// Generic "notifier" trait that clients must implement.
#[async_trait]
pub trait GenericNotifier: Send + Sync + 'static {
    /// Send a text message to the configured destination.
    ///
    /// Any delivery failure is reported as `BotError::SendMessage`.
    async fn send_message(&self, text: &str) -> BotResult<()>;
}

// Structs.

/// Notifier for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<dyn GenericNotifier>,
}

impl Deref for Notifier {
    type Target = dyn GenericNotifier;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Notifier {
    pub fn new(inner: Arc<dyn GenericNotifier>) -> Self {
        Self { inner }
    }
}
