//! Service layer adapter for the TUI
//!
//! Bridges the synchronous event loop and the async API clients. The
//! reducer returns [`Command`]s; `dispatch` spawns each one onto a tokio
//! runtime and the spawned task sends exactly one completion [`Action`]
//! back over a crossbeam channel, which the event loop drains between
//! renders. All state mutation stays inside the event loop - tasks never
//! touch the screen model.
//!
//! Commands are not correlated or cancelled: a refresh issued while a fetch
//! is in flight simply produces two completions, and the last one processed
//! wins.

use crossbeam_channel::{unbounded, Receiver, Sender};

use libdrift::api::{IdentityClient, StoreClient};
use libdrift::{Config, SessionStore};

use crate::app::{Action, Command};
use crate::error::Result;

pub struct ServiceHandle {
    runtime: tokio::runtime::Runtime,
    http: reqwest::Client,
    config: Config,
    session_store: SessionStore,
    tx: Sender<Action>,
    rx: Receiver<Action>,
}

impl ServiceHandle {
    /// Create the runtime, the shared HTTP client, and the completion
    /// channel.
    pub fn new(config: Config) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (tx, rx) = unbounded();

        Ok(Self {
            runtime,
            http: reqwest::Client::new(),
            config,
            session_store: SessionStore::new()?,
            tx,
            rx,
        })
    }

    /// Completion actions that have arrived since the last poll.
    pub fn try_recv(&self) -> Option<Action> {
        self.rx.try_recv().ok()
    }

    /// Execute one command. Fetch commands spawn onto the runtime and
    /// report back through the channel; persisting the session is a quick
    /// local write handled inline, with failures logged rather than
    /// surfaced.
    pub fn dispatch(&self, command: Command) {
        match command {
            Command::SignIn { email, password } => {
                let identity = self.identity_client();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let action = match identity.sign_in(&email, &password).await {
                        Ok(session) => Action::LoginSucceeded { session },
                        Err(err) => Action::LoginFailed {
                            message: err.to_string(),
                        },
                    };
                    let _ = tx.send(action);
                });
            }

            Command::PersistSession { session } => {
                if let Err(err) = self.session_store.save(&session) {
                    tracing::warn!("failed to persist session: {}", err);
                }
            }

            Command::FetchFeed { id_token } => {
                let store = self.store_client(id_token);
                let limit = self.config.settings.feed_limit;
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let action = match store.fetch_posts(limit).await {
                        Ok(posts) => Action::FeedLoaded { posts },
                        Err(err) => Action::FeedLoadFailed {
                            message: err.to_string(),
                        },
                    };
                    let _ = tx.send(action);
                });
            }

            Command::FetchThread {
                id_token,
                post_id,
                need_post,
            } => {
                let store = self.store_client(id_token);
                let limit = self.config.settings.reply_limit;
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let action = fetch_thread(&store, &post_id, need_post, limit).await;
                    let _ = tx.send(action);
                });
            }
        }
    }

    fn identity_client(&self) -> IdentityClient {
        IdentityClient::new(
            self.http.clone(),
            self.config.api_key.clone(),
            self.config.settings.identity_url.clone(),
            self.config.settings.token_url.clone(),
        )
    }

    fn store_client(&self, id_token: String) -> StoreClient {
        StoreClient::new(
            self.http.clone(),
            self.config.settings.store_url.clone(),
            self.config.project_id.clone(),
            id_token,
        )
    }
}

/// Load a thread: the post itself only when it was not carried over from
/// the feed, then its replies. Either failure fails the whole load.
async fn fetch_thread(store: &StoreClient, post_id: &str, need_post: bool, limit: u32) -> Action {
    let post = if need_post {
        match store.fetch_post(post_id).await {
            Ok(post) => Some(post),
            Err(err) => {
                return Action::DetailLoadFailed {
                    message: err.to_string(),
                }
            }
        }
    } else {
        None
    };

    match store.fetch_replies(post_id, limit).await {
        Ok(replies) => Action::DetailLoaded { post, replies },
        Err(err) => Action::DetailLoadFailed {
            message: err.to_string(),
        },
    }
}
