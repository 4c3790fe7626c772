use chrono::Utc;
use std::time::Duration;

use crate::error::BotResult;
use crate::services::{
    format_status, validate_response, HomeworkApi, Notifier, NO_UPDATES_MESSAGE,
};

/// Cursor for the first cycle: the given timestamp, or now.
///
/// Without an explicit start, anything that changed while the bot was down
/// is not reported.
pub fn initial_cursor(from_date: Option<i64>) -> i64 {
    from_date.unwrap_or_else(|| Utc::now().timestamp())
}

/// State carried from one cycle to the next. Lives only as long as the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (Unix timestamp) of the next query window
    pub cursor: i64,
    /// Last message delivered to the chat
    pub last_message: String,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_message: String::new(),
        }
    }
}

/// Outcome of one cycle, mainly for logs and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new message was delivered and the cursor advanced
    Notified(String),
    /// The message matched the last one sent; nothing was delivered
    Unchanged,
    /// The cycle failed; carries the failure message that was built
    Failed(String),
}

/// Polls the homework API and relays status changes to the notifier
pub struct Poller {
    api: Box<dyn HomeworkApi>,
    notifier: Box<dyn Notifier>,
    state: PollState,
    retry_period: Duration,
}

impl Poller {
    pub fn new(
        api: Box<dyn HomeworkApi>,
        notifier: Box<dyn Notifier>,
        cursor: i64,
        retry_period: Duration,
    ) -> Self {
        Self {
            api,
            notifier,
            state: PollState::new(cursor),
            retry_period,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Fetch, validate, format and notify.
    ///
    /// The cursor only moves after the notifier accepted a new message.
    pub async fn poll_once(&mut self) -> BotResult<CycleOutcome> {
        let payload = self.api.fetch(self.state.cursor).await?;
        let response = validate_response(&payload)?;

        let message = match response.homeworks.first() {
            Some(record) => format_status(record)?,
            None => {
                log::debug!("Homework status has not changed");
                NO_UPDATES_MESSAGE.to_string()
            }
        };

        if message == self.state.last_message {
            return Ok(CycleOutcome::Unchanged);
        }

        self.notifier.notify(&message).await?;
        self.state.last_message = message.clone();
        self.state.cursor = response.current_date;

        Ok(CycleOutcome::Notified(message))
    }

    /// Runs one cycle and converts any failure into a chat notification.
    ///
    /// Never returns an error: a failure to deliver the failure message is
    /// only logged.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let error = match self.poll_once().await {
            Ok(outcome) => return outcome,
            Err(e) => e,
        };

        let message = format!("Program failure: {}", error);
        log::error!("{}", message);

        if message != self.state.last_message {
            match self.notifier.notify(&message).await {
                Ok(()) => self.state.last_message = message.clone(),
                Err(e) => log::error!("Failed to deliver failure message: {}", e),
            }
        }

        CycleOutcome::Failed(message)
    }

    /// Polls forever, sleeping the retry period after every cycle
    pub async fn run(&mut self) {
        log::info!(
            "Polling homework statuses every {}s starting from {}",
            self.retry_period.as_secs(),
            self.state.cursor
        );

        loop {
            match self.run_cycle().await {
                CycleOutcome::Notified(message) => log::info!("Sent: {}", message),
                CycleOutcome::Unchanged => log::debug!("Nothing new to send"),
                CycleOutcome::Failed(_) => {}
            }

            tokio::time::sleep(self.retry_period).await;
        }
    }
}
