//! Full screen-flow integration tests driven through the pure reducer:
//! login -> feed -> detail -> back, plus the failure paths, without a
//! terminal or network.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use drift_tui::app::{reduce, Action, AppState, Command, LoginField, Screen};
use libdrift::{Post, Reply, Session};

fn key(state: AppState, code: KeyCode) -> (AppState, Vec<Command>) {
    reduce(state, Action::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn type_text(mut state: AppState, text: &str) -> AppState {
    for c in text.chars() {
        state = key(state, KeyCode::Char(c)).0;
    }
    state
}

fn session() -> Session {
    Session {
        id_token: "tok".to_string(),
        refresh_token: "ref".to_string(),
        user_id: "u1".to_string(),
        email: "ada@example.com".to_string(),
        username: "ada".to_string(),
    }
}

fn post(id: &str, content: &str) -> Post {
    Post {
        id: id.to_string(),
        author_username: "ada".to_string(),
        content: content.to_string(),
        replies_count: 1,
        ..Post::default()
    }
}

fn reply(id: &str, post_id: &str) -> Reply {
    Reply {
        id: id.to_string(),
        post_id: post_id.to_string(),
        author_username: "bob".to_string(),
        content: "a reply".to_string(),
        ..Reply::default()
    }
}

#[test]
fn cold_start_walks_login_feed_detail_and_back() {
    // Cold start: no cached session -> login screen, email focused
    let (state, commands) = AppState::with_session(None);
    assert!(commands.is_empty());
    let state = reduce(state, Action::Resize(80, 30)).0;
    assert!(matches!(&state.screen, Screen::Login(l) if l.focus == LoginField::Email));

    // Fill the form and submit from the password field
    let state = type_text(state, "ada@example.com");
    let state = key(state, KeyCode::Tab).0;
    let state = type_text(state, "hunter2");
    let (state, commands) = key(state, KeyCode::Enter);
    assert_eq!(
        commands,
        vec![Command::SignIn {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        }]
    );

    // Sign-in completes: session persists, feed fetch is scheduled
    let (state, commands) = reduce(
        state,
        Action::LoginSucceeded {
            session: session(),
        },
    );
    assert_eq!(commands.len(), 2);
    assert!(matches!(
        &commands[0],
        Command::PersistSession { session } if session.user_id == "u1"
    ));
    assert!(matches!(&commands[1], Command::FetchFeed { id_token } if id_token == "tok"));
    assert!(matches!(&state.screen, Screen::Feed(f) if f.loading));

    // Feed arrives
    let posts = vec![post("p0", "first"), post("p1", "second"), post("p2", "third")];
    let (state, _) = reduce(state, Action::FeedLoaded { posts });
    let Screen::Feed(feed) = &state.screen else {
        panic!("expected feed");
    };
    assert_eq!(feed.posts.len(), 3);
    assert_eq!((feed.cursor, feed.offset), (0, 0));

    // Select the second post and open it: the post is carried, only the
    // replies are fetched
    let state = key(state, KeyCode::Char('j')).0;
    let (state, commands) = key(state, KeyCode::Enter);
    assert_eq!(
        commands,
        vec![Command::FetchThread {
            id_token: "tok".to_string(),
            post_id: "p1".to_string(),
            need_post: false,
        }]
    );
    let Screen::Detail { detail, .. } = &state.screen else {
        panic!("expected detail");
    };
    assert_eq!(detail.post.as_ref().map(|p| p.content.as_str()), Some("second"));

    // Replies arrive
    let (state, _) = reduce(
        state,
        Action::DetailLoaded {
            post: None,
            replies: vec![reply("r1", "p1")],
        },
    );
    let Screen::Detail { detail, .. } = &state.screen else {
        panic!("expected detail");
    };
    assert!(!detail.loading);
    assert_eq!(detail.replies.len(), 1);

    // Back to the feed: list and cursor survive, detail model is gone
    let (state, _) = key(state, KeyCode::Char('b'));
    let Screen::Feed(feed) = &state.screen else {
        panic!("expected feed");
    };
    assert_eq!(feed.posts.len(), 3);
    assert_eq!(feed.cursor, 1);

    // Quit
    let (state, _) = key(state, KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn failed_login_keeps_the_form_for_a_retry() {
    let (state, _) = AppState::with_session(None);
    let state = type_text(state, "ada@example.com");
    let state = key(state, KeyCode::Tab).0;
    let state = type_text(state, "wrong");
    let (state, _) = key(state, KeyCode::Enter);

    let (state, commands) = reduce(
        state,
        Action::LoginFailed {
            message: "Invalid password".to_string(),
        },
    );
    assert!(commands.is_empty());

    let Screen::Login(login) = &state.screen else {
        panic!("expected login");
    };
    assert_eq!(login.error.as_deref(), Some("Invalid password"));
    assert_eq!(login.email, "ada@example.com");
    assert_eq!(login.password, "wrong");

    // Second attempt submits straight away
    let (_, commands) = key(state, KeyCode::Enter);
    assert!(matches!(&commands[0], Command::SignIn { .. }));
}

#[test]
fn warm_start_skips_login_and_survives_a_failed_refresh() {
    // Cached session -> straight to a loading feed
    let (state, commands) = AppState::with_session(Some(session()));
    assert!(matches!(&commands[0], Command::FetchFeed { .. }));
    let state = reduce(state, Action::Resize(80, 30)).0;

    let (state, _) = reduce(
        state,
        Action::FeedLoaded {
            posts: vec![post("p0", "only one")],
        },
    );

    // Refresh fails: old posts stay, error is shown
    let (state, commands) = key(state, KeyCode::Char('r'));
    assert!(matches!(&commands[0], Command::FetchFeed { .. }));
    let (state, _) = reduce(
        state,
        Action::FeedLoadFailed {
            message: "Network error: connection refused".to_string(),
        },
    );

    let Screen::Feed(feed) = &state.screen else {
        panic!("expected feed");
    };
    assert_eq!(feed.posts.len(), 1);
    assert!(feed.error.as_deref().unwrap().contains("connection refused"));

    // Manual retry succeeds and clears the error
    let (state, _) = key(state, KeyCode::Char('r'));
    let (state, _) = reduce(
        state,
        Action::FeedLoaded {
            posts: vec![post("p0", "fresh"), post("p1", "feed")],
        },
    );
    let Screen::Feed(feed) = &state.screen else {
        panic!("expected feed");
    };
    assert!(feed.error.is_none());
    assert_eq!(feed.posts.len(), 2);
}

#[test]
fn thread_failure_then_retry_refetches_replies() {
    let (state, _) = AppState::with_session(Some(session()));
    let state = reduce(state, Action::Resize(80, 30)).0;
    let (state, _) = reduce(
        state,
        Action::FeedLoaded {
            posts: vec![post("p0", "body")],
        },
    );
    let (state, _) = key(state, KeyCode::Enter);

    let (state, _) = reduce(
        state,
        Action::DetailLoadFailed {
            message: "Request failed (500): boom".to_string(),
        },
    );
    let Screen::Detail { detail, .. } = &state.screen else {
        panic!("expected detail");
    };
    assert!(detail.error.is_some());
    assert!(!detail.loading);

    let (state, commands) = key(state, KeyCode::Char('r'));
    assert_eq!(
        commands,
        vec![Command::FetchThread {
            id_token: "tok".to_string(),
            post_id: "p0".to_string(),
            need_post: false,
        }]
    );
    let Screen::Detail { detail, .. } = &state.screen else {
        panic!("expected detail");
    };
    assert!(detail.loading);
    assert!(detail.error.is_none());
}
