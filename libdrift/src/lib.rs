//! Drift - a terminal client for the Drift social backend
//!
//! This library provides the non-UI core of the Drift client: configuration,
//! the local session cache, the backend API clients, and the decoder that
//! turns the document store's tagged wire values into domain records.

pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use config::{Config, Settings};
pub use error::{ApiError, ConfigError, DriftError, Result, SessionError};
pub use session::{Session, SessionStore};
pub use types::{Post, Reply};
