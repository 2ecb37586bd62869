//! Outbound messaging channel helpers.

pub mod response_builder;

pub use response_builder::{OutboundEnvelope, format_reply};
