// Render sink contract - where decoded payloads and connection status are drawn
use crate::application::connection_status::ConnectionStatus;
use crate::domain::payloads::ChannelPayload;

/// Presentation adapters for every channel. Each payload only touches the surfaces of
/// its own channel, so dispatch order between channels carries no data dependency.
pub trait RenderSinks: Send + Sync {
    fn render(&self, payload: &ChannelPayload);

    /// Connection badge and last-update stamp. `overlapping_ticks` counts ticks that
    /// started while an earlier one was still in flight.
    fn show_connection(&self, status: &ConnectionStatus, overlapping_ticks: u64);
}
