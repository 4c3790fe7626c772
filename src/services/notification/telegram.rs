//! Telegram notification sender.
//!
//! Posts plain text messages through the Bot API `sendMessage` method.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::Notifier;
use crate::error::{BotError, BotResult};

/// Body of a `sendMessage` call
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram notifier bound to a single chat
pub struct TelegramNotifier {
    client: reqwest::Client,
    send_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a new Telegram notifier
    pub fn new(
        api_url: &Url,
        token: &str,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> BotResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            send_url: Self::send_message_url(api_url, token),
            chat_id: chat_id.into(),
        })
    }

    fn send_message_url(api_url: &Url, token: &str) -> String {
        format!(
            "{}/bot{}/sendMessage",
            api_url.as_str().trim_end_matches('/'),
            token
        )
    }

    async fn deliver(&self, message: &str) -> Result<(), String> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text: message,
        };

        let response = self
            .client
            .post(&self.send_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors carry the URL, which embeds the bot token
                let e = e.without_url();
                if e.is_timeout() {
                    "Request to Telegram timed out".to_string()
                } else if e.is_connect() {
                    "Connection to Telegram failed".to_string()
                } else {
                    format!("Telegram request failed: {}", e)
                }
            })?;

        let status = response.status().as_u16();
        let api_response = response.json::<ApiResponse>().await.ok();

        match api_response {
            Some(ApiResponse { ok: true, .. }) if (200..300).contains(&status) => Ok(()),
            Some(ApiResponse {
                description: Some(description),
                ..
            }) => Err(format!("Telegram API error: {}", description)),
            _ => Err(format!("Telegram API error: HTTP {}", status)),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> BotResult<()> {
        match self.deliver(message).await {
            Ok(()) => {
                log::debug!("Message sent to chat {}", self.chat_id);
                Ok(())
            }
            Err(cause) => {
                log::error!("{}", cause);
                Err(BotError::Notification(format!(
                    "failed to send message to chat {}: {}",
                    self.chat_id, cause
                )))
            }
        }
    }
}
