// Connection status tracker - one-bit status with last-update memory
use crate::domain::channel::TickOutcome;
use chrono::{DateTime, Local};
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionStatus {
    pub connected: bool,
    /// Time of the last fully successful tick. A failed tick leaves it as it was.
    pub last_update: Option<DateTime<Local>>,
}

pub struct ConnectionStatusTracker {
    state: watch::Sender<ConnectionStatus>,
}

impl ConnectionStatusTracker {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ConnectionStatus::default());
        Self { state }
    }

    pub fn current(&self) -> ConnectionStatus {
        self.state.borrow().clone()
    }

    pub fn record(&self, outcome: &TickOutcome) -> ConnectionStatus {
        self.record_at(outcome, Local::now())
    }

    pub fn record_at(&self, outcome: &TickOutcome, now: DateTime<Local>) -> ConnectionStatus {
        let connected = outcome.overall_connected();
        let mut snapshot = ConnectionStatus::default();
        self.state.send_modify(|status| {
            status.connected = connected;
            if connected {
                status.last_update = Some(now);
            }
            snapshot = status.clone();
        });

        match outcome.failed_at() {
            None => tracing::debug!(
                channels = outcome.reached().len(),
                "Tick completed, all channels refreshed"
            ),
            Some((channel, kind)) => {
                tracing::info!(channel = %channel, "Disconnected: tick stopped at {} ({})", channel, kind)
            }
        }

        snapshot
    }
}

impl Default for ConnectionStatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
