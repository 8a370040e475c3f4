// Poll cycle - one tick over the ordered channel list
use crate::application::connection_status::{ConnectionStatus, ConnectionStatusTracker};
use crate::application::render_sinks::RenderSinks;
use crate::application::telemetry_client::TelemetryClient;
use crate::domain::channel::{ChannelId, ChannelResult, TickOutcome};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Everything a tick needs: the client, the sinks, and the connection tracker.
pub struct PollCycle {
    client: TelemetryClient,
    sinks: Arc<dyn RenderSinks>,
    tracker: ConnectionStatusTracker,
    in_flight: AtomicUsize,
    overlapping: AtomicU64,
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl PollCycle {
    pub fn new(client: TelemetryClient, sinks: Arc<dyn RenderSinks>) -> Self {
        Self {
            client,
            sinks,
            tracker: ConnectionStatusTracker::new(),
            in_flight: AtomicUsize::new(0),
            overlapping: AtomicU64::new(0),
        }
    }

    pub fn connection(&self) -> ConnectionStatus {
        self.tracker.current()
    }

    pub fn overlapping_ticks(&self) -> u64 {
        self.overlapping.load(Ordering::SeqCst)
    }

    /// Run one tick and publish the resulting connection status.
    pub async fn run(&self) -> TickOutcome {
        let already_running = self.in_flight.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);
        if already_running > 0 {
            let total = self.overlapping.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::warn!(
                in_flight = already_running,
                overlapping_ticks = total,
                "Tick started while {} earlier tick(s) still running",
                already_running
            );
        }

        let outcome = self.run_channels().await;
        let status = self.tracker.record(&outcome);
        self.sinks.show_connection(&status, self.overlapping_ticks());
        outcome
    }

    /// Fetch and render each channel in order. The first failure ends the tick and
    /// nothing after it is fetched.
    async fn run_channels(&self) -> TickOutcome {
        let mut results = Vec::with_capacity(ChannelId::POLL_ORDER.len());

        for channel in ChannelId::POLL_ORDER {
            match self.client.fetch(channel).await {
                ChannelResult::Success(payload) => {
                    self.sinks.render(&payload);
                    results.push(ChannelResult::Success(payload));
                }
                failure => {
                    tracing::debug!(channel = %channel, "Tick aborted at {}", channel);
                    results.push(failure);
                    break;
                }
            }
        }

        TickOutcome::new(results)
    }
}
