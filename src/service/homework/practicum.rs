//! Practicum homework status API over `reqwest`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::base::{config::Config, error::BotError, types::BotResult};

use super::{GenericHomeworkClient, HomeworkClient};

// Extra methods on `HomeworkClient` applied by the practicum implementation.

impl HomeworkClient {
    /// Creates a new Practicum homework client.
    pub fn practicum(config: &Config) -> Self {
        let client = PracticumClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// Practicum API client implementation.
#[derive(Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a new Practicum API client.
    #[instrument(name = "PracticumClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.practicum_endpoint.clone(),
            token: config.practicum_token.clone(),
        }
    }
}

#[async_trait]
impl GenericHomeworkClient for PracticumClient {
    #[instrument(skip(self))]
    async fn homework_statuses(&self, from_date: i64) -> BotResult<Value> {
        debug!("Requesting homework statuses from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|source| BotError::ApiConnection {
                endpoint: self.endpoint.clone(),
                from_date,
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::WrongApiAnswer {
                endpoint: self.endpoint.clone(),
                from_date,
                status,
            });
        }

        response.json::<Value>().await.map_err(|e| BotError::MalformedResponse(e.to_string()))
    }
}
