//! Roster Server Library
//!
//! GraphQL user registry server over a `SQLite` store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use graphql::{build_schema, RosterSchema};
pub use state::AppState;
