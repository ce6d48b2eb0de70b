//! Bot layer - update routing and the receive loop
//!
//! The outermost layer: consumes Telegram updates, applies the access gate,
//! and hands voice events to the pipeline orchestrator.

pub mod app;
pub mod messages;
pub mod router;

pub use app::{load_config, run};
pub use router::Router;
