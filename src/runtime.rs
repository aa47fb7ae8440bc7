//! Runtime services and shared state for the homework-bot.

use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Cursor, Res, Void},
    },
    interaction::poll::run_cycle,
    service::{homework::HomeworkClient, notify::Notifier},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the homework client, notifier, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The homework status client instance.
    pub homework: HomeworkClient,
    /// The notifier instance.
    pub notifier: Notifier,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the homework client.
        let homework = HomeworkClient::practicum(&config);

        // Initialize the notifier.
        let notifier = Notifier::telegram(&config)?;

        Ok(Self { config, homework, notifier })
    }

    /// Poll forever, starting from the current time.
    pub async fn start(&self) -> Void {
        let retry_time = Duration::from_secs(self.config.retry_time);
        let mut cursor = Cursor::now();

        info!("Polling every {} seconds from {}.", retry_time.as_secs(), cursor.value());

        loop {
            match run_cycle(&mut cursor, &self.homework, &self.notifier).await {
                Ok(Some(_)) => debug!("Cycle finished with a notification."),
                Ok(None) => debug!("Cycle finished with nothing to report."),
                // Already logged and reported to the chat inside the cycle.
                Err(_) => debug!("Cycle failed; retrying in {} seconds.", retry_time.as_secs()),
            }

            tokio::time::sleep(retry_time).await;
        }
    }
}
