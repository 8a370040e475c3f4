// Test doubles and payload fixtures shared by the application tests
use crate::application::connection_status::ConnectionStatus;
use crate::application::render_sinks::RenderSinks;
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::channel::ChannelId;
use crate::domain::payloads::ChannelPayload;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub mod fixtures {
    pub const METRICS: &str = r#"{
        "status": "running",
        "ngap_status": "connected",
        "zmq_status": "active",
        "ue_connections": 1,
        "cell_info": {"pci": "1", "bandwidth_mhz": "10", "tx_antennas": "1", "rx_antennas": "1",
                      "dl_arfcn": "368500", "band": "3", "dl_freq_mhz": "1842.5"},
        "errors": [],
        "warnings": [{"message": "late DL slot", "timestamp": "2025-12-26T15:32:21.460668"}],
        "last_update": null
    }"#;

    pub const EVENTS: &str = r#"{"events": [
        {"type": "cell_start", "data": {"pci": "1", "band": "3"}, "timestamp": "2025-12-26T15:32:21.460668"},
        {"type": "ngap_connected", "data": {"amf_ip": "127.0.0.5", "amf_port": "38412"}}
    ], "count": 2}"#;

    pub const SUMMARY: &str =
        r#"{"summary": "Status: running | NGAP: connected | Connected UEs: 1"}"#;

    pub const CHARTS: &str = r#"{"data": {
        "labels": ["15:32:20", "15:32:22"],
        "ue_count": [0, 1],
        "errors": [0, 0],
        "warnings": [0, 1],
        "gnb_status": [1, 1]
    }}"#;

    pub const MISALIGNED_CHARTS: &str = r#"{"data": {
        "labels": ["15:32:20", "15:32:22"],
        "ue_count": [0],
        "errors": [0, 0],
        "warnings": [0, 1]
    }}"#;

    pub const RF_METRICS: &str = r#"{"data": {
        "signal_power": [-75.2, -74.8],
        "frequency": [1842.51, 1842.49],
        "channel_response": [0.7, 0.8, 0.9],
        "iq_i": [0.1, -0.2],
        "iq_q": [0.3, 0.4]
    }}"#;

    pub const CALL_FLOW: &str = r#"{"messages": [
        {"time": "15:32:21", "from": "gNB", "to": "AMF", "message": "NGAP Setup Request"},
        {"time": "15:32:21", "from": "AMF", "to": "gNB", "message": "NGAP Setup Response"}
    ]}"#;

    pub const CORE_STATUS: &str = r#"{"status": {
        "overall": "running", "amf": "running", "smf": "running", "upf": "running",
        "nrf": "running", "running_count": 8, "total_count": 8
    }}"#;
}

#[derive(Default)]
struct FakeState {
    /// `None` makes the endpoint unreachable.
    responses: HashMap<String, Option<String>>,
    calls: Vec<String>,
}

/// Scripted telemetry service. Clones share responses and the call log.
#[derive(Clone, Default)]
pub struct FakeSource {
    state: Arc<Mutex<FakeState>>,
}

impl FakeSource {
    /// Every endpoint answers with a valid fixture.
    pub fn healthy() -> Self {
        [
            (ChannelId::Metrics, fixtures::METRICS),
            (ChannelId::Events, fixtures::EVENTS),
            (ChannelId::Summary, fixtures::SUMMARY),
            (ChannelId::Charts, fixtures::CHARTS),
            (ChannelId::RfMetrics, fixtures::RF_METRICS),
            (ChannelId::CallFlow, fixtures::CALL_FLOW),
            (ChannelId::CoreStatus, fixtures::CORE_STATUS),
        ]
        .into_iter()
        .fold(Self::default(), |source, (channel, body)| {
            source.respond(channel.endpoint(), body)
        })
    }

    pub fn respond(self, endpoint: &str, body: &str) -> Self {
        self.lock()
            .responses
            .insert(endpoint.to_string(), Some(body.to_string()));
        self
    }

    pub fn unreachable(self, endpoint: &str) -> Self {
        self.lock().responses.insert(endpoint.to_string(), None);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn shared(&self) -> Arc<dyn TelemetrySource> {
        Arc::new(self.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl TelemetrySource for FakeSource {
    async fn get(&self, endpoint: &str) -> anyhow::Result<Bytes> {
        let response = {
            let mut state = self.lock();
            state.calls.push(endpoint.to_string());
            state.responses.get(endpoint).cloned().flatten()
        };
        // Behave like a real request and suspend at least once.
        tokio::task::yield_now().await;
        match response {
            Some(body) => Ok(Bytes::from(body)),
            None => anyhow::bail!("connection refused: {}", endpoint),
        }
    }
}

/// Records what was dispatched instead of drawing it.
#[derive(Clone, Default)]
pub struct RecordingSinks {
    rendered: Arc<Mutex<Vec<ChannelId>>>,
    statuses: Arc<Mutex<Vec<ConnectionStatus>>>,
}

impl RecordingSinks {
    pub fn rendered(&self) -> Vec<ChannelId> {
        self.rendered.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<ConnectionStatus> {
        self.statuses.lock().unwrap().clone()
    }
}

impl RenderSinks for RecordingSinks {
    fn render(&self, payload: &ChannelPayload) {
        self.rendered.lock().unwrap().push(payload.channel());
    }

    fn show_connection(&self, status: &ConnectionStatus, _overlapping_ticks: u64) {
        self.statuses.lock().unwrap().push(status.clone());
    }
}
