// Channel identity and per-tick outcome models
use crate::domain::payloads::ChannelPayload;
use std::fmt;

/// One independently fetched telemetry source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    Metrics,
    Events,
    Summary,
    Charts,
    RfMetrics,
    CallFlow,
    CoreStatus,
}

impl ChannelId {
    /// Order in which a tick visits the channels. A failure stops the walk.
    pub const POLL_ORDER: [ChannelId; 7] = [
        ChannelId::Metrics,
        ChannelId::Events,
        ChannelId::Summary,
        ChannelId::Charts,
        ChannelId::RfMetrics,
        ChannelId::CallFlow,
        ChannelId::CoreStatus,
    ];

    pub fn endpoint(&self) -> &'static str {
        match self {
            ChannelId::Metrics => "/api/metrics",
            ChannelId::Events => "/api/events",
            ChannelId::Summary => "/api/summary",
            ChannelId::Charts => "/api/charts",
            ChannelId::RfMetrics => "/api/rf-metrics",
            ChannelId::CallFlow => "/api/call-flow",
            ChannelId::CoreStatus => "/api/open5gs",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelId::Metrics => "metrics",
            ChannelId::Events => "events",
            ChannelId::Summary => "summary",
            ChannelId::Charts => "charts",
            ChannelId::RfMetrics => "rf-metrics",
            ChannelId::CallFlow => "call-flow",
            ChannelId::CoreStatus => "core-status",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    /// Transport error or non-2xx response.
    #[error("endpoint unreachable")]
    Unreachable,
    /// Body did not decode into the channel's payload shape.
    #[error("malformed payload")]
    Malformed,
}

#[derive(Debug, Clone)]
pub enum ChannelResult {
    Success(ChannelPayload),
    Failure {
        kind: FetchFailure,
        channel: ChannelId,
    },
}

impl ChannelResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, ChannelResult::Failure { .. })
    }
}

/// Results of one tick, in poll order, up to and including the first failure.
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub results: Vec<ChannelResult>,
}

impl TickOutcome {
    pub fn new(results: Vec<ChannelResult>) -> Self {
        Self { results }
    }

    pub fn overall_connected(&self) -> bool {
        !self.results.iter().any(ChannelResult::is_failure)
    }

    /// The channel that cut the tick short, if any.
    pub fn failed_at(&self) -> Option<(ChannelId, FetchFailure)> {
        self.results.iter().find_map(|r| match r {
            ChannelResult::Failure { kind, channel } => Some((*channel, *kind)),
            ChannelResult::Success(_) => None,
        })
    }

    /// Channels that were fetched this tick, in order.
    pub fn reached(&self) -> Vec<ChannelId> {
        self.results
            .iter()
            .map(|r| match r {
                ChannelResult::Success(payload) => payload.channel(),
                ChannelResult::Failure { channel, .. } => *channel,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payloads::SummaryText;

    #[test]
    fn test_poll_order_endpoints() {
        let endpoints: Vec<&str> = ChannelId::POLL_ORDER.iter().map(|c| c.endpoint()).collect();
        assert_eq!(
            endpoints,
            vec![
                "/api/metrics",
                "/api/events",
                "/api/summary",
                "/api/charts",
                "/api/rf-metrics",
                "/api/call-flow",
                "/api/open5gs",
            ]
        );
    }

    #[test]
    fn test_outcome_connected_only_without_failures() {
        let ok = ChannelResult::Success(ChannelPayload::Summary(SummaryText {
            summary: Some("Status: running".to_string()),
        }));
        let outcome = TickOutcome::new(vec![ok.clone()]);
        assert!(outcome.overall_connected());
        assert_eq!(outcome.failed_at(), None);

        let outcome = TickOutcome::new(vec![
            ok,
            ChannelResult::Failure {
                kind: FetchFailure::Unreachable,
                channel: ChannelId::Charts,
            },
        ]);
        assert!(!outcome.overall_connected());
        assert_eq!(
            outcome.failed_at(),
            Some((ChannelId::Charts, FetchFailure::Unreachable))
        );
        assert_eq!(outcome.reached(), vec![ChannelId::Summary, ChannelId::Charts]);
    }
}
