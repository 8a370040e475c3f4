// Typed payloads for each telemetry channel
//
// Field names are the service's wire contract. Keys without a default are required;
// a missing key fails the decode and the channel reports `Malformed`.
use crate::domain::channel::ChannelId;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("series `{series}` has {actual} entries, expected {expected}")]
    Misaligned {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Key must be present, value may be `null`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlertRecord {
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Cell configuration values arrive either as strings or as numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(Number),
}

impl CellValue {
    /// Display text, or `None` for values that count as unset (empty or zero).
    pub fn shown(&self) -> Option<String> {
        match self {
            CellValue::Text(s) if s.is_empty() => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) if n.as_f64() == Some(0.0) => None,
            CellValue::Number(n) => Some(n.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CellInfo {
    #[serde(default)]
    pub pci: Option<CellValue>,
    #[serde(default)]
    pub bandwidth_mhz: Option<CellValue>,
    #[serde(default)]
    pub band: Option<CellValue>,
    #[serde(default)]
    pub dl_freq_mhz: Option<CellValue>,
    #[serde(default)]
    pub dl_arfcn: Option<CellValue>,
    #[serde(default)]
    pub tx_antennas: Option<CellValue>,
    #[serde(default)]
    pub rx_antennas: Option<CellValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsSnapshot {
    /// Link (gNB) status.
    #[serde(deserialize_with = "nullable")]
    pub status: Option<String>,
    /// Signaling (NGAP) status.
    #[serde(deserialize_with = "nullable")]
    pub ngap_status: Option<String>,
    /// Transport (ZMQ) status.
    #[serde(deserialize_with = "nullable")]
    pub zmq_status: Option<String>,
    pub ue_connections: u64,
    #[serde(default)]
    pub cell_info: Option<CellInfo>,
    pub errors: Vec<AlertRecord>,
    pub warnings: Vec<AlertRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EventData {
    Text(String),
    Fields(Map<String, Value>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Option<EventData>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventLogPage {
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryText {
    #[serde(deserialize_with = "nullable")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartSeriesBundle {
    pub labels: Vec<String>,
    pub ue_count: Vec<f64>,
    pub errors: Vec<f64>,
    pub warnings: Vec<f64>,
}

impl ChartSeriesBundle {
    fn validate(self) -> Result<Self, DecodeError> {
        let expected = self.labels.len();
        for (series, actual) in [
            ("ue_count", self.ue_count.len()),
            ("errors", self.errors.len()),
            ("warnings", self.warnings.len()),
        ] {
            if actual != expected {
                return Err(DecodeError::Misaligned {
                    series,
                    expected,
                    actual,
                });
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RfSampleBundle {
    pub signal_power: Vec<f64>,
    pub frequency: Vec<f64>,
    /// One magnitude per resource block.
    pub channel_response: Vec<f64>,
    pub iq_i: Vec<f64>,
    pub iq_q: Vec<f64>,
}

impl RfSampleBundle {
    fn validate(self) -> Result<Self, DecodeError> {
        if self.iq_q.len() != self.iq_i.len() {
            return Err(DecodeError::Misaligned {
                series: "iq_q",
                expected: self.iq_i.len(),
                actual: self.iq_q.len(),
            });
        }
        Ok(self)
    }

    /// In-phase and quadrature samples paired up in order.
    pub fn constellation(&self) -> Vec<(f64, f64)> {
        self.iq_i
            .iter()
            .copied()
            .zip(self.iq_q.iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallFlowMessage {
    pub from: String,
    pub to: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallFlowTrace {
    pub messages: Vec<CallFlowMessage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoreStatusSnapshot {
    #[serde(deserialize_with = "nullable")]
    pub overall: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub amf: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub smf: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub upf: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub nrf: Option<String>,
    pub running_count: u32,
    pub total_count: u32,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct StatusEnvelope {
    status: CoreStatusSnapshot,
}

/// Decoded payload for whichever channel produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelPayload {
    Metrics(MetricsSnapshot),
    Events(EventLogPage),
    Summary(SummaryText),
    Charts(ChartSeriesBundle),
    RfMetrics(RfSampleBundle),
    CallFlow(CallFlowTrace),
    CoreStatus(CoreStatusSnapshot),
}

impl ChannelPayload {
    pub fn decode(channel: ChannelId, body: &[u8]) -> Result<Self, DecodeError> {
        let payload = match channel {
            ChannelId::Metrics => ChannelPayload::Metrics(serde_json::from_slice(body)?),
            ChannelId::Events => ChannelPayload::Events(serde_json::from_slice(body)?),
            ChannelId::Summary => ChannelPayload::Summary(serde_json::from_slice(body)?),
            ChannelId::Charts => {
                let envelope: DataEnvelope<ChartSeriesBundle> = serde_json::from_slice(body)?;
                ChannelPayload::Charts(envelope.data.validate()?)
            }
            ChannelId::RfMetrics => {
                let envelope: DataEnvelope<RfSampleBundle> = serde_json::from_slice(body)?;
                ChannelPayload::RfMetrics(envelope.data.validate()?)
            }
            ChannelId::CallFlow => ChannelPayload::CallFlow(serde_json::from_slice(body)?),
            ChannelId::CoreStatus => {
                let envelope: StatusEnvelope = serde_json::from_slice(body)?;
                ChannelPayload::CoreStatus(envelope.status)
            }
        };
        Ok(payload)
    }

    pub fn channel(&self) -> ChannelId {
        match self {
            ChannelPayload::Metrics(_) => ChannelId::Metrics,
            ChannelPayload::Events(_) => ChannelId::Events,
            ChannelPayload::Summary(_) => ChannelId::Summary,
            ChannelPayload::Charts(_) => ChannelId::Charts,
            ChannelPayload::RfMetrics(_) => ChannelId::RfMetrics,
            ChannelPayload::CallFlow(_) => ChannelId::CallFlow,
            ChannelPayload::CoreStatus(_) => ChannelId::CoreStatus,
        }
    }
}

impl fmt::Display for EventData {
    /// `"k: v, k: v"` for maps, in wire order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventData::Text(text) => f.write_str(text),
            EventData::Fields(fields) => {
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match value {
                        Value::String(s) => write!(f, "{}: {}", key, s)?,
                        other => write!(f, "{}: {}", key, other)?,
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_metrics_with_string_cell_values() {
        let body = br#"{
            "status": "running",
            "ngap_status": "connected",
            "zmq_status": null,
            "ue_connections": 2,
            "cell_info": {"pci": "1", "bandwidth_mhz": "10", "band": "3", "dl_freq_mhz": "1842.5",
                          "dl_arfcn": "368500", "tx_antennas": "1", "rx_antennas": "1"},
            "errors": [{"message": "boom", "timestamp": "unknown"}],
            "warnings": [],
            "last_update": "2025-12-26T15:32:21",
            "timestamp": "2025-12-26T15:32:22"
        }"#;

        let payload = ChannelPayload::decode(ChannelId::Metrics, body).unwrap();
        let ChannelPayload::Metrics(metrics) = payload else {
            panic!("expected metrics payload");
        };
        assert_eq!(metrics.status.as_deref(), Some("running"));
        assert_eq!(metrics.zmq_status, None);
        assert_eq!(metrics.ue_connections, 2);
        let cell = metrics.cell_info.unwrap();
        assert_eq!(cell.dl_freq_mhz.unwrap().shown().as_deref(), Some("1842.5"));
        assert_eq!(metrics.errors.len(), 1);
    }

    #[test]
    fn test_decode_metrics_missing_required_key_fails() {
        let body = br#"{"status": "running", "ngap_status": "connected", "ue_connections": 0,
                        "errors": [], "warnings": []}"#;
        assert!(ChannelPayload::decode(ChannelId::Metrics, body).is_err());
    }

    #[test]
    fn test_cell_value_unset_values() {
        let cell: CellInfo = serde_json::from_str(r#"{"pci": 0, "band": "", "dl_arfcn": 368500}"#).unwrap();
        assert_eq!(cell.pci.unwrap().shown(), None);
        assert_eq!(cell.band.unwrap().shown(), None);
        assert_eq!(cell.dl_arfcn.unwrap().shown().as_deref(), Some("368500"));
        assert_eq!(cell.tx_antennas, None);
    }

    #[test]
    fn test_decode_events_with_mixed_data() {
        let body = br#"{"events": [
            {"type": "ngap_connected", "data": {"amf_ip": "127.0.0.5", "amf_port": "38412"}},
            {"type": "ngap_failed", "timestamp": "2025-12-26T15:32:21.460680"},
            {"type": "note", "data": "hello"},
            {"type": "ue_attached", "data": {"total_ues": 3}}
        ], "count": 4}"#;

        let ChannelPayload::Events(page) = ChannelPayload::decode(ChannelId::Events, body).unwrap()
        else {
            panic!("expected events payload");
        };
        assert_eq!(page.events.len(), 4);
        assert_eq!(
            page.events[0].data.as_ref().unwrap().to_string(),
            "amf_ip: 127.0.0.5, amf_port: 38412"
        );
        assert_eq!(page.events[1].data, None);
        assert_eq!(page.events[2].data, Some(EventData::Text("hello".to_string())));
        assert_eq!(page.events[3].data.as_ref().unwrap().to_string(), "total_ues: 3");
    }

    #[test]
    fn test_decode_charts_rejects_misaligned_series() {
        let body = br#"{"data": {"labels": ["12:00:00", "12:00:02"], "ue_count": [1, 2],
                                 "errors": [0], "warnings": [0, 0]}}"#;
        let err = ChannelPayload::decode(ChannelId::Charts, body).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Misaligned {
                series: "errors",
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_decode_rf_rejects_unpaired_iq() {
        let body = br#"{"data": {"signal_power": [], "frequency": [], "channel_response": [],
                                 "iq_i": [0.1, 0.2], "iq_q": [0.3]}}"#;
        assert!(ChannelPayload::decode(ChannelId::RfMetrics, body).is_err());
    }

    #[test]
    fn test_constellation_pairs_in_order() {
        let rf = RfSampleBundle {
            signal_power: vec![],
            frequency: vec![],
            channel_response: vec![],
            iq_i: vec![0.1, -0.2],
            iq_q: vec![0.3, 0.4],
        };
        assert_eq!(rf.constellation(), vec![(0.1, 0.3), (-0.2, 0.4)]);
    }

    #[test]
    fn test_decode_core_status_ignores_extra_components() {
        let body = br#"{"status": {"overall": "partial", "amf": "running", "smf": "running",
                                   "upf": "stopped", "nrf": "running", "ausf": "running",
                                   "running_count": 6, "total_count": 8},
                        "timestamp": "2025-12-26T15:32:21"}"#;
        let ChannelPayload::CoreStatus(core) =
            ChannelPayload::decode(ChannelId::CoreStatus, body).unwrap()
        else {
            panic!("expected core status payload");
        };
        assert_eq!(core.overall.as_deref(), Some("partial"));
        assert_eq!((core.running_count, core.total_count), (6, 8));
    }

    #[test]
    fn test_decode_summary_null_is_accepted() {
        let payload = ChannelPayload::decode(ChannelId::Summary, br#"{"summary": null}"#).unwrap();
        assert_eq!(payload, ChannelPayload::Summary(SummaryText { summary: None }));
        assert!(ChannelPayload::decode(ChannelId::Summary, br#"{}"#).is_err());
    }
}
