// HTTP telemetry source backed by reqwest
use crate::application::telemetry_source::TelemetrySource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct HttpTelemetrySource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTelemetrySource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl TelemetrySource for HttpTelemetrySource {
    async fn get(&self, endpoint: &str) -> Result<Bytes> {
        let url = self.url_for(endpoint);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} responded with status {}: {}", url, status, body);
        }

        response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}
