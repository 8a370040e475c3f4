// Application layer - Polling use cases
pub mod connection_status;
pub mod poll_cycle;
pub mod render_sinks;
pub mod scheduler;
pub mod telemetry_client;
pub mod telemetry_source;

#[cfg(test)]
pub mod testing;
