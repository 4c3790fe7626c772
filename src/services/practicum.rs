//! Practicum homework status API client.
//!
//! Issues one authenticated GET per poll cycle and hands back the decoded
//! JSON body. Shape validation is left to [`crate::services::homework`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::error::{BotError, BotResult};

/// Source of homework status payloads
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetches statuses changed since the given Unix timestamp
    async fn fetch(&self, since: i64) -> BotResult<Value>;
}

/// HTTP client for the Practicum homework status endpoint
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    /// Creates a new client for the given endpoint and OAuth token
    pub fn new(endpoint: Url, token: impl Into<String>, timeout: Duration) -> BotResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            token: token.into(),
        })
    }

    fn request_url(&self, since: i64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("from_date", &since.to_string());
        url
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, since: i64) -> BotResult<Value> {
        let response = self
            .client
            .get(self.request_url(since))
            .header("Authorization", format!("OAuth {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::error!("Homework endpoint unavailable: HTTP {}", status.as_u16());
            return Err(BotError::ApiStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.json::<Value>().await?;
        log::debug!("Homework request succeeded: HTTP 200");

        Ok(body)
    }
}
