pub mod background_remover;
pub mod inspector;

pub use background_remover::{remove_background, RemovalRequest, RemovalSummary};
pub use inspector::{inspect, inspect_buffer, inspect_or_configured};
