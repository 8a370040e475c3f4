// Domain layer - Channel models, payloads and display rules
pub mod channel;
pub mod payloads;
pub mod status;
pub mod text;
