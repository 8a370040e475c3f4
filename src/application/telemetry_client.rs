// Telemetry client - typed per-channel fetch that never fails past its boundary
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::channel::{ChannelId, ChannelResult, FetchFailure};
use crate::domain::payloads::ChannelPayload;
use std::sync::Arc;

#[derive(Clone)]
pub struct TelemetryClient {
    source: Arc<dyn TelemetrySource>,
}

impl TelemetryClient {
    pub fn new(source: Arc<dyn TelemetrySource>) -> Self {
        Self { source }
    }

    /// One request to the channel's endpoint, decoded into its payload shape.
    pub async fn fetch(&self, channel: ChannelId) -> ChannelResult {
        let body = match self.source.get(channel.endpoint()).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(channel = %channel, "Telemetry endpoint unreachable: {:#}", e);
                return ChannelResult::Failure {
                    kind: FetchFailure::Unreachable,
                    channel,
                };
            }
        };

        match ChannelPayload::decode(channel, &body) {
            Ok(payload) => {
                tracing::trace!(channel = %channel, bytes = body.len(), "Decoded channel payload");
                ChannelResult::Success(payload)
            }
            Err(e) => {
                tracing::warn!(channel = %channel, "Malformed telemetry payload: {}", e);
                ChannelResult::Failure {
                    kind: FetchFailure::Malformed,
                    channel,
                }
            }
        }
    }
}
