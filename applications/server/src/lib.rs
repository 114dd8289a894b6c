//! Mixtape Server Library
//!
//! HTTP interface to an in-memory playlist store.
//!
//! This library exposes the router and its state for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
