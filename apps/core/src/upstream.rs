//! Member message acquisition.
//!
//! The answer pipeline never does I/O. Request handlers fetch the message
//! collection through a [`MessageSource`] and hand it over as a slice.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

use crate::error::AppError;
use crate::models::{MessageRecord, MessagesPayload};

/// Defines the public interface for anything that can supply member messages.
///
/// This abstracts the upstream service so handlers can be tested against an
/// in-memory collection.
#[async_trait]
pub trait MessageSource: Send + Sync + 'static {
    /// Fetches the full, ordered message collection.
    async fn fetch_messages(&self) -> Result<Vec<MessageRecord>, AppError>;
}

/// Fetches messages from the upstream HTTP API.
#[derive(Clone)]
pub struct HttpMessageSource {
    client: Client,
    url: Url,
}

impl HttpMessageSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl MessageSource for HttpMessageSource {
    async fn fetch_messages(&self) -> Result<Vec<MessageRecord>, AppError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Messages API returned {}: {}", status, body);
            return Err(AppError::Upstream(format!(
                "Messages request failed with status {}: {}",
                status, body
            )));
        }

        let payload: MessagesPayload = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid messages payload: {}", e)))?;
        let records = payload.into_records();

        info!("Fetched {} member messages", records.len());
        Ok(records)
    }
}

/// A fixed message collection, for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticMessageSource {
    messages: Vec<MessageRecord>,
}

impl StaticMessageSource {
    pub fn new(messages: Vec<MessageRecord>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl MessageSource for StaticMessageSource {
    async fn fetch_messages(&self) -> Result<Vec<MessageRecord>, AppError> {
        Ok(self.messages.clone())
    }
}
