// Presentation layer - View surfaces, sinks and HTTP handlers
pub mod app_state;
pub mod handlers;
pub mod sinks;
pub mod view;
pub mod widgets;
