//! Application state
//!
//! Exactly one screen is live at any time; the [`Screen`] sum type makes
//! cross-screen field mixes unrepresentable. All transitions happen through
//! the reducer (see `reducer.rs`).

use libdrift::{Post, Reply, Session};

use super::actions::Command;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub screen: Screen,

    /// Authenticated session, if any
    pub session: Option<Session>,

    /// Viewport dimensions
    pub width: u16,
    pub height: u16,

    /// Spinner frame counter, advanced by tick events while loading
    pub tick: u64,
}

/// The three mutually exclusive screens.
///
/// `Detail` keeps the feed it was opened from so that backing out restores
/// the list without a refetch; the detail model itself is discarded on back.
#[derive(Debug, Clone)]
pub enum Screen {
    Login(LoginState),
    Feed(FeedState),
    Detail { feed: FeedState, detail: DetailState },
}

/// Login screen state
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Feed screen state
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub posts: Vec<Post>,
    /// Selected row
    pub cursor: usize,
    /// First visible row
    pub offset: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl FeedState {
    /// Fresh feed entering its initial load.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

/// Post detail screen state
#[derive(Debug, Clone)]
pub struct DetailState {
    pub post_id: String,
    /// Pre-populated from the feed when opened from a row; fetched only
    /// when absent.
    pub post: Option<Post>,
    pub replies: Vec<Reply>,
    /// First visible content line
    pub scroll: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl DetailState {
    /// Detail screen opened with a post carried over from the feed.
    pub fn for_post(post: Post) -> Self {
        Self {
            post_id: post.id.clone(),
            post: Some(post),
            replies: Vec::new(),
            scroll: 0,
            loading: true,
            error: None,
        }
    }
}

impl AppState {
    /// Initial state, chosen by the presence of a cached session: straight
    /// to the feed (with a fetch scheduled) when one exists, the login form
    /// otherwise.
    pub fn with_session(session: Option<Session>) -> (Self, Vec<Command>) {
        let authenticated = session
            .as_ref()
            .map(Session::is_authenticated)
            .unwrap_or(false);

        let (screen, commands) = if authenticated {
            let id_token = session.as_ref().map(|s| s.id_token.clone()).unwrap_or_default();
            (
                Screen::Feed(FeedState::loading()),
                vec![Command::FetchFeed { id_token }],
            )
        } else {
            (Screen::Login(LoginState::default()), Vec::new())
        };

        (
            Self {
                should_quit: false,
                screen,
                session,
                width: 0,
                height: 0,
                tick: 0,
            },
            commands,
        )
    }

    /// Is the active screen waiting on a fetch?
    pub fn is_loading(&self) -> bool {
        match &self.screen {
            Screen::Login(login) => login.loading,
            Screen::Feed(feed) => feed.loading,
            Screen::Detail { detail, .. } => detail.loading,
        }
    }

    /// Bearer token of the current session, empty when signed out.
    pub fn id_token(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.id_token.clone())
            .unwrap_or_default()
    }
}
