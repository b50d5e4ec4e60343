//! Application core
//!
//! - Actions: what can happen (key presses, fetch completions)
//! - State: which screen is live and what it holds
//! - Reducer: pure function `(State, Action) -> (State, Vec<Command>)`
//! - Commands: asynchronous work the service layer executes
//!
//! The reducer never performs I/O; fetches come back as completion actions
//! delivered through the event loop's channel.

pub mod actions;
pub mod event;
pub mod layout;
pub mod reducer;
pub mod scroll;
pub mod state;

pub use actions::{Action, Command};
pub use reducer::reduce;
pub use state::{AppState, DetailState, FeedState, LoginField, LoginState, Screen};
