use crate::application::scheduler::DEFAULT_PERIOD;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub telemetry: TelemetrySettings,
    pub scheduler: SchedulerSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    /// Origin serving the `/api/*` endpoints.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchedulerSettings {
    pub period_ms: u64,
}

impl SchedulerSettings {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

fn with_defaults() -> anyhow::Result<Builder> {
    Ok(config::Config::builder()
        .set_default("telemetry.base_url", "http://127.0.0.1:5000")?
        .set_default("scheduler.period_ms", DEFAULT_PERIOD.as_millis() as u64)?
        .set_default("server.bind", "0.0.0.0:8080")?)
}

/// Defaults, then `config/dashboard.toml` if present, then `RAN_DASHBOARD__*` variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let builder = with_defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("RAN_DASHBOARD").separator("__"));

    finish(builder)
}

fn finish(builder: Builder) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = builder.build()?.try_deserialize()?;
    anyhow::ensure!(
        config.scheduler.period_ms > 0,
        "scheduler.period_ms must be greater than zero"
    );
    Ok(config)
}
