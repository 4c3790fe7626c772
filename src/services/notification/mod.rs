//! Outbound chat notifications.
//!
//! The poll loop only needs "send this text to the configured chat", so the
//! delivery channel sits behind the [`Notifier`] trait.

pub mod telegram;

use async_trait::async_trait;

use crate::error::BotResult;

pub use telegram::TelegramNotifier;

/// Trait for notification senders
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one message to the fixed chat destination. No retry.
    async fn notify(&self, message: &str) -> BotResult<()>;
}
