//! drift-tui - Terminal client for Drift
//!
//! Sign in against the identity service, browse the post feed, and read
//! threads, all from the terminal. The application core is a pure reducer
//! over a sum-typed screen state; all I/O happens in the service layer.

pub mod app;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;
