// Application state for HTTP handlers
use crate::presentation::view::DashboardView;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub view: watch::Receiver<DashboardView>,
}
