//! Actions and commands for the reducer
//!
//! Actions describe what happened (input events and fetch completions);
//! commands describe asynchronous work the reducer wants scheduled. The
//! service layer executes commands and feeds their outcomes back as
//! completion actions.

use crossterm::event::KeyEvent;
use libdrift::{Post, Reply, Session};

/// Everything that can drive a state transition.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI events ===
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick driving the loading spinner
    Tick,

    // === Navigation ===
    /// Open the post under the feed cursor, carrying it forward
    OpenPost(Post),

    /// Leave the detail screen, discarding its model
    Back,

    /// Quit the application
    Quit,

    // === Fetch completions ===
    LoginSucceeded {
        session: Session,
    },
    LoginFailed {
        message: String,
    },
    FeedLoaded {
        posts: Vec<Post>,
    },
    FeedLoadFailed {
        message: String,
    },
    DetailLoaded {
        /// Present only when the fetch had to re-load the post itself
        post: Option<Post>,
        replies: Vec<Reply>,
    },
    DetailLoadFailed {
        message: String,
    },
}

/// Asynchronous work items scheduled by the reducer, executed by the
/// service layer. Commands are self-contained: they carry everything the
/// executor needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Authenticate against the identity service
    SignIn { email: String, password: String },

    /// Snapshot the session to the credential cache
    PersistSession { session: Session },

    /// Load the post feed
    FetchFeed { id_token: String },

    /// Load a thread: the replies, plus the post itself when it was not
    /// carried over from the feed
    FetchThread {
        id_token: String,
        post_id: String,
        need_post: bool,
    },
}
