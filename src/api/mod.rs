//! Webhook HTTP surface and request processing

pub mod handler;
pub mod parsing;
pub mod router;

// Re-export the main entry points for convenience
pub use handler::RequestHandler;
pub use router::{AppState, create_router};
