// Transport trait for reaching the telemetry service
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Issue a GET for `endpoint` (e.g. `/api/metrics`) and return the raw body.
    /// Transport errors and non-success statuses are both errors.
    async fn get(&self, endpoint: &str) -> anyhow::Result<Bytes>;
}
