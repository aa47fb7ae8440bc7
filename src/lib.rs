//! Library root for `homework-bot`.
//!
//! Homework-bot watches the Practicum homework review API and tells a
//! Telegram chat whenever the review status of a submitted homework changes:
//! - Polls the status endpoint on a fixed interval
//! - Validates the response and formats a verdict message
//! - Reports every failure to the same chat and keeps polling
//!
//! The architecture is built around small traits for the status source and
//! the notifier, so that each can be swapped or mocked independently.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the homework-bot runtime:
/// - Creates the runtime context with the homework client and notifier
/// - Starts the endless poll loop
pub async fn start(config: Config) -> Void {
    info!("Starting homework-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
