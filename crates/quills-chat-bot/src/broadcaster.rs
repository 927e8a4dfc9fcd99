/*
[INPUT]:  ChatClient, Credential, fixed message text, send interval
[OUTPUT]: One spawned send per tick, outcome logged per tick
[POS]:    Execution layer - periodic message broadcast
[UPDATE]: When changing tick scheduling or per-tick failure handling
*/

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use quills_chat_adapter::{ChatClient, Credential, SendError, SendMessageResponse};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Sends a fixed message on a fixed period using a single credential.
///
/// Ticks are independent: each one spawns its own request and is never
/// awaited by the next, so slow responses may overlap. A failed send is
/// logged and the schedule carries on.
#[derive(Debug)]
pub struct Broadcaster {
    client: ChatClient,
    credential: Credential,
    message: Arc<str>,
    interval: Duration,
}

impl Broadcaster {
    pub fn new(
        client: ChatClient,
        credential: Credential,
        message: impl Into<Arc<str>>,
        interval: Duration,
    ) -> Self {
        Self {
            client,
            credential,
            message: message.into(),
            interval: interval.max(MIN_INTERVAL),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Perform a single send with the stored credential and message.
    pub async fn send_once(&self) -> Result<SendMessageResponse, SendError> {
        let response = self
            .client
            .send_message(&self.credential, &self.message)
            .await?;
        Ok(response)
    }

    /// Run the broadcast loop. Never returns; stop it by dropping the future.
    ///
    /// The first send happens one interval after the call.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            message = %self.message,
            interval_ms = self.interval.as_millis() as u64,
            "broadcast loop starting"
        );

        let this = Arc::new(self);
        loop {
            ticker.tick().await;
            let this = Arc::clone(&this);
            tokio::spawn(async move {
                this.tick().await;
            });
        }
    }

    async fn tick(&self) {
        match self.send_once().await {
            Ok(response) => {
                info!(
                    status = response.status.as_deref().unwrap_or_default(),
                    at = %Local::now().format("%H:%M:%S"),
                    "sent message"
                );
            }
            Err(err) => {
                error!(
                    error = %err,
                    timeout = err.inner().is_timeout(),
                    "error sending message"
                );
            }
        }
    }
}
