//! Pure reducer for state transitions
//!
//! `reduce` is a pure function `(State, Action) -> (State, Vec<Command>)`:
//! it performs no I/O and schedules asynchronous work only by returning
//! commands. Fetch outcomes re-enter as completion actions and are matched
//! against the screen that is active when they arrive; a completion for a
//! screen that is no longer live is dropped.
//!
//! A refresh while a fetch is already in flight simply issues a second
//! request - completions are not correlated to the request that produced
//! them, so the last one processed wins.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libdrift::{Post, Reply, Session};

use super::actions::{Action, Command};
use super::layout;
use super::scroll::{clamp_cursor, page_capacity, scroll_into_view};
use super::state::{AppState, DetailState, FeedState, LoginField, LoginState, Screen};

/// Apply one action, returning the next state and any commands to schedule.
pub fn reduce(state: AppState, action: Action) -> (AppState, Vec<Command>) {
    match action {
        // === UI events ===
        Action::Key(key) => handle_key(state, key),
        Action::Resize(width, height) => resize(state, width, height),
        Action::Tick => tick(state),

        // === Navigation ===
        Action::OpenPost(post) => open_post(state, post),
        Action::Back => back(state),
        Action::Quit => (
            AppState {
                should_quit: true,
                ..state
            },
            Vec::new(),
        ),

        // === Fetch completions ===
        Action::LoginSucceeded { session } => login_succeeded(state, session),
        Action::LoginFailed { message } => login_failed(state, message),
        Action::FeedLoaded { posts } => feed_loaded(state, posts),
        Action::FeedLoadFailed { message } => feed_load_failed(state, message),
        Action::DetailLoaded { post, replies } => detail_loaded(state, post, replies),
        Action::DetailLoadFailed { message } => detail_load_failed(state, message),
    }
}

/// Route keyboard input. Ctrl+C quits from anywhere, even mid-fetch.
fn handle_key(state: AppState, key: KeyEvent) -> (AppState, Vec<Command>) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return reduce(state, Action::Quit);
    }

    match state.screen {
        Screen::Login(_) => handle_login_key(state, key),
        Screen::Feed(_) => handle_feed_key(state, key),
        Screen::Detail { .. } => handle_detail_key(state, key),
    }
}

fn handle_login_key(mut state: AppState, key: KeyEvent) -> (AppState, Vec<Command>) {
    let Screen::Login(ref mut login) = state.screen else {
        return (state, Vec::new());
    };

    // While the sign-in command is in flight only quit keys are honored
    // (Ctrl+C is handled before screen routing).
    if login.loading {
        return (state, Vec::new());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            return reduce(state, Action::Quit);
        }
        (KeyCode::Tab, _) | (KeyCode::Down, _) => {
            login.focus = other_field(login.focus);
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
            login.focus = other_field(login.focus);
        }
        (KeyCode::Enter, _) => {
            let both_filled = !login.email.is_empty() && !login.password.is_empty();
            if login.focus == LoginField::Password || both_filled {
                login.loading = true;
                login.error = None;
                let command = Command::SignIn {
                    email: login.email.clone(),
                    password: login.password.clone(),
                };
                return (state, vec![command]);
            }
            // Enter on the email field alone advances focus instead
            login.focus = LoginField::Password;
        }
        (KeyCode::Backspace, _) => {
            focused_buffer(login).pop();
        }
        (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            focused_buffer(login).push(c);
        }
        _ => {}
    }

    (state, Vec::new())
}

fn other_field(field: LoginField) -> LoginField {
    match field {
        LoginField::Email => LoginField::Password,
        LoginField::Password => LoginField::Email,
    }
}

fn focused_buffer(login: &mut LoginState) -> &mut String {
    match login.focus {
        LoginField::Email => &mut login.email,
        LoginField::Password => &mut login.password,
    }
}

fn handle_feed_key(mut state: AppState, key: KeyEvent) -> (AppState, Vec<Command>) {
    let capacity = page_capacity(state.height);
    let id_token = state.id_token();
    let Screen::Feed(ref mut feed) = state.screen else {
        return (state, Vec::new());
    };

    if feed.loading {
        return (state, Vec::new());
    }

    match key.code {
        KeyCode::Char('q') => {
            return reduce(state, Action::Quit);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if feed.cursor + 1 < feed.posts.len() {
                feed.cursor += 1;
                feed.offset = scroll_into_view(feed.cursor, feed.offset, capacity);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if feed.cursor > 0 {
                feed.cursor -= 1;
                feed.offset = scroll_into_view(feed.cursor, feed.offset, capacity);
            }
        }
        KeyCode::Char('g') => {
            feed.cursor = 0;
            feed.offset = 0;
        }
        KeyCode::Char('G') => {
            if !feed.posts.is_empty() {
                feed.cursor = feed.posts.len() - 1;
                feed.offset = scroll_into_view(feed.cursor, feed.offset, capacity);
            }
        }
        KeyCode::Char('r') => {
            feed.loading = true;
            feed.error = None;
            return (state, vec![Command::FetchFeed { id_token }]);
        }
        KeyCode::Enter => {
            if let Some(post) = feed.posts.get(feed.cursor).cloned() {
                return reduce(state, Action::OpenPost(post));
            }
        }
        _ => {}
    }

    (state, Vec::new())
}

fn handle_detail_key(mut state: AppState, key: KeyEvent) -> (AppState, Vec<Command>) {
    let (width, height) = (state.width, state.height);
    let id_token = state.id_token();
    let Screen::Detail { ref mut detail, .. } = state.screen else {
        return (state, Vec::new());
    };

    match key.code {
        KeyCode::Char('q') => {
            return reduce(state, Action::Quit);
        }
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => {
            return reduce(state, Action::Back);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let max = layout::max_scroll(detail, width, height);
            detail.scroll = (detail.scroll + 1).min(max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            detail.scroll = detail.scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            detail.scroll = 0;
        }
        KeyCode::Char('G') => {
            detail.scroll = layout::max_scroll(detail, width, height);
        }
        KeyCode::Char('r') => {
            detail.loading = true;
            detail.error = None;
            let command = Command::FetchThread {
                id_token,
                post_id: detail.post_id.clone(),
                need_post: detail.post.is_none(),
            };
            return (state, vec![command]);
        }
        _ => {}
    }

    (state, Vec::new())
}

/// Viewport changed: remember the new size and re-clamp whatever the active
/// screen scrolls.
fn resize(mut state: AppState, width: u16, height: u16) -> (AppState, Vec<Command>) {
    state.width = width;
    state.height = height;

    match &mut state.screen {
        Screen::Login(_) => {}
        Screen::Feed(feed) => {
            let capacity = page_capacity(height);
            let (cursor, offset) =
                clamp_cursor(feed.cursor, feed.offset, feed.posts.len(), capacity);
            feed.cursor = cursor;
            feed.offset = offset;
        }
        Screen::Detail { detail, .. } => {
            let max = layout::max_scroll(detail, width, height);
            detail.scroll = detail.scroll.min(max);
        }
    }

    (state, Vec::new())
}

fn tick(mut state: AppState) -> (AppState, Vec<Command>) {
    if state.is_loading() {
        state.tick = state.tick.wrapping_add(1);
    }
    (state, Vec::new())
}

/// Feed row activated: carry the selected post into a detail screen and
/// fetch only its replies - the post itself needs no re-fetch.
fn open_post(mut state: AppState, post: Post) -> (AppState, Vec<Command>) {
    let id_token = state.id_token();

    match state.screen {
        Screen::Feed(feed) => {
            let detail = DetailState::for_post(post);
            let command = Command::FetchThread {
                id_token,
                post_id: detail.post_id.clone(),
                need_post: false,
            };
            state.screen = Screen::Detail { feed, detail };
            (state, vec![command])
        }
        other => {
            state.screen = other;
            (state, Vec::new())
        }
    }
}

/// Leave the detail screen, restoring the feed it was opened from and
/// discarding the detail model.
fn back(mut state: AppState) -> (AppState, Vec<Command>) {
    match state.screen {
        Screen::Detail { feed, .. } => {
            state.screen = Screen::Feed(feed);
        }
        other => {
            state.screen = other;
        }
    }
    (state, Vec::new())
}

fn login_succeeded(mut state: AppState, session: Session) -> (AppState, Vec<Command>) {
    if !matches!(state.screen, Screen::Login(_)) {
        return (state, Vec::new());
    }

    let id_token = session.id_token.clone();
    state.session = Some(session.clone());
    state.screen = Screen::Feed(FeedState::loading());

    (
        state,
        vec![
            Command::PersistSession { session },
            Command::FetchFeed { id_token },
        ],
    )
}

fn login_failed(mut state: AppState, message: String) -> (AppState, Vec<Command>) {
    if let Screen::Login(ref mut login) = state.screen {
        login.loading = false;
        login.error = Some(message);
    }
    (state, Vec::new())
}

fn feed_loaded(mut state: AppState, posts: Vec<Post>) -> (AppState, Vec<Command>) {
    if let Screen::Feed(ref mut feed) = state.screen {
        feed.posts = posts;
        feed.cursor = 0;
        feed.offset = 0;
        feed.loading = false;
        feed.error = None;
    }
    (state, Vec::new())
}

/// A failed fetch leaves the previous posts untouched - partial data is
/// never shown as if complete, and retry is a manual refresh.
fn feed_load_failed(mut state: AppState, message: String) -> (AppState, Vec<Command>) {
    if let Screen::Feed(ref mut feed) = state.screen {
        feed.loading = false;
        feed.error = Some(message);
    }
    (state, Vec::new())
}

fn detail_loaded(
    mut state: AppState,
    post: Option<Post>,
    replies: Vec<Reply>,
) -> (AppState, Vec<Command>) {
    let (width, height) = (state.width, state.height);
    if let Screen::Detail { ref mut detail, .. } = state.screen {
        if let Some(post) = post {
            detail.post = Some(post);
        }
        detail.replies = replies;
        detail.loading = false;
        detail.error = None;

        let max = layout::max_scroll(detail, width, height);
        detail.scroll = detail.scroll.min(max);
    }
    (state, Vec::new())
}

fn detail_load_failed(mut state: AppState, message: String) -> (AppState, Vec<Command>) {
    if let Screen::Detail { ref mut detail, .. } = state.screen {
        detail.loading = false;
        detail.error = Some(message);
    }
    (state, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn key(code: KeyCode) -> Action {
        Action::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Action {
        Action::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
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

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            author_username: "ada".to_string(),
            content: format!("post {}", id),
            created_at: DateTime::UNIX_EPOCH,
            ..Post::default()
        }
    }

    fn posts(n: usize) -> Vec<Post> {
        (0..n).map(|i| post(&format!("p{}", i))).collect()
    }

    /// Feed state sized so five rows fit the 30-row viewport used below.
    fn feed_state(n: usize) -> AppState {
        let (state, _) = AppState::with_session(Some(session()));
        let (state, _) = reduce(state, Action::Resize(80, 30));
        let (state, _) = reduce(state, Action::FeedLoaded { posts: posts(n) });
        state
    }

    #[test]
    fn reducer_is_pure() {
        let (state, _) = AppState::with_session(None);
        let before = state.clone();

        let _ = reduce(state.clone(), key(KeyCode::Char('x')));

        assert!(matches!(before.screen, Screen::Login(_)));
        assert!(!before.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let (login, _) = AppState::with_session(None);
        assert!(reduce(login, ctrl('c')).0.should_quit);

        let feed = feed_state(3);
        assert!(reduce(feed, ctrl('c')).0.should_quit);
    }

    #[test]
    fn ctrl_c_quits_even_while_loading() {
        let (state, _) = AppState::with_session(Some(session()));
        assert!(state.is_loading());
        assert!(reduce(state, ctrl('c')).0.should_quit);
    }

    // === Login ===

    #[test]
    fn typing_fills_the_focused_buffer() {
        let (mut state, _) = AppState::with_session(None);

        for c in "ada@example.com".chars() {
            state = reduce(state, key(KeyCode::Char(c))).0;
        }
        state = reduce(state, key(KeyCode::Tab)).0;
        for c in "hunter2".chars() {
            state = reduce(state, key(KeyCode::Char(c))).0;
        }

        let Screen::Login(login) = &state.screen else {
            panic!("expected login");
        };
        assert_eq!(login.email, "ada@example.com");
        assert_eq!(login.password, "hunter2");
        assert_eq!(login.focus, LoginField::Password);
    }

    #[test]
    fn backspace_edits_the_focused_buffer() {
        let (mut state, _) = AppState::with_session(None);
        state = reduce(state, key(KeyCode::Char('a'))).0;
        state = reduce(state, key(KeyCode::Char('b'))).0;
        state = reduce(state, key(KeyCode::Backspace)).0;

        let Screen::Login(login) = &state.screen else {
            panic!("expected login");
        };
        assert_eq!(login.email, "a");
    }

    #[test]
    fn focus_toggles_between_exactly_two_fields() {
        let (mut state, _) = AppState::with_session(None);

        state = reduce(state, key(KeyCode::Down)).0;
        let Screen::Login(login) = &state.screen else {
            panic!()
        };
        assert_eq!(login.focus, LoginField::Password);

        state = reduce(state, key(KeyCode::BackTab)).0;
        let Screen::Login(login) = &state.screen else {
            panic!()
        };
        assert_eq!(login.focus, LoginField::Email);
    }

    #[test]
    fn enter_on_empty_email_advances_focus_instead_of_submitting() {
        let (state, _) = AppState::with_session(None);

        let (state, commands) = reduce(state, key(KeyCode::Enter));

        assert!(commands.is_empty());
        let Screen::Login(login) = &state.screen else {
            panic!()
        };
        assert_eq!(login.focus, LoginField::Password);
        assert!(!login.loading);
    }

    #[test]
    fn enter_on_password_field_submits_regardless_of_buffers() {
        let (mut state, _) = AppState::with_session(None);
        state = reduce(state, key(KeyCode::Tab)).0;

        let (state, commands) = reduce(state, key(KeyCode::Enter));

        assert_eq!(
            commands,
            vec![Command::SignIn {
                email: String::new(),
                password: String::new(),
            }]
        );
        let Screen::Login(login) = &state.screen else {
            panic!()
        };
        assert!(login.loading);
    }

    #[test]
    fn enter_on_email_with_both_fields_filled_submits() {
        let (mut state, _) = AppState::with_session(None);
        for c in "a@b.c".chars() {
            state = reduce(state, key(KeyCode::Char(c))).0;
        }
        state = reduce(state, key(KeyCode::Tab)).0;
        for c in "pw".chars() {
            state = reduce(state, key(KeyCode::Char(c))).0;
        }
        state = reduce(state, key(KeyCode::BackTab)).0;

        let (state, commands) = reduce(state, key(KeyCode::Enter));

        assert_eq!(
            commands,
            vec![Command::SignIn {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
            }]
        );
        assert!(state.is_loading());
    }

    #[test]
    fn keys_are_ignored_while_sign_in_is_in_flight() {
        let (mut state, _) = AppState::with_session(None);
        state = reduce(state, key(KeyCode::Tab)).0;
        state = reduce(state, key(KeyCode::Enter)).0;
        assert!(state.is_loading());

        let (state, commands) = reduce(state, key(KeyCode::Char('x')));
        let Screen::Login(login) = &state.screen else {
            panic!()
        };
        assert_eq!(login.password, "");
        assert!(commands.is_empty());
    }

    #[test]
    fn login_failure_sets_error_and_keeps_buffers() {
        let (mut state, _) = AppState::with_session(None);
        for c in "a@b.c".chars() {
            state = reduce(state, key(KeyCode::Char(c))).0;
        }
        state = reduce(state, key(KeyCode::Tab)).0;
        for c in "pw".chars() {
            state = reduce(state, key(KeyCode::Char(c))).0;
        }
        state = reduce(state, key(KeyCode::Enter)).0;
        assert!(state.is_loading());

        let (state, _) = reduce(
            state,
            Action::LoginFailed {
                message: "Invalid password".to_string(),
            },
        );

        let Screen::Login(login) = &state.screen else {
            panic!()
        };
        assert!(!login.loading);
        assert_eq!(login.error.as_deref(), Some("Invalid password"));
        assert_eq!(login.email, "a@b.c");
        assert_eq!(login.password, "pw");
    }

    #[test]
    fn login_success_persists_session_and_fetches_feed() {
        let (state, _) = AppState::with_session(None);

        let (state, commands) = reduce(
            state,
            Action::LoginSucceeded {
                session: session(),
            },
        );

        assert!(matches!(&state.screen, Screen::Feed(feed) if feed.loading));
        assert_eq!(state.session, Some(session()));
        assert_eq!(
            commands,
            vec![
                Command::PersistSession { session: session() },
                Command::FetchFeed {
                    id_token: "tok".to_string()
                },
            ]
        );
    }

    #[test]
    fn stale_login_completion_on_other_screen_is_dropped() {
        let state = feed_state(2);

        let (state, commands) = reduce(
            state,
            Action::LoginFailed {
                message: "late".to_string(),
            },
        );

        assert!(commands.is_empty());
        let Screen::Feed(feed) = &state.screen else {
            panic!()
        };
        assert!(feed.error.is_none());
    }

    // === Feed ===

    #[test]
    fn cursor_saturates_at_list_bounds() {
        let mut state = feed_state(3);

        state = reduce(state, key(KeyCode::Char('k'))).0;
        let Screen::Feed(feed) = &state.screen else {
            panic!()
        };
        assert_eq!(feed.cursor, 0);

        for _ in 0..10 {
            state = reduce(state, key(KeyCode::Char('j'))).0;
        }
        let Screen::Feed(feed) = &state.screen else {
            panic!()
        };
        assert_eq!(feed.cursor, 2);
    }

    #[test]
    fn cursor_and_offset_hold_the_clamp_invariant_under_key_storms() {
        let mut state = feed_state(25);
        let capacity = page_capacity(30);

        let script = "jjjjjjjjjjkkkjjjjjjjjjjjjjjkkkkkkkkkkkkkkkkkkkkjjjj";
        for c in script.chars() {
            state = reduce(state, key(KeyCode::Char(c))).0;
            let Screen::Feed(feed) = &state.screen else {
                panic!()
            };
            assert!(feed.offset <= feed.cursor);
            assert!(feed.cursor <= feed.offset + capacity - 1);
            assert!(feed.cursor < 25);
        }
    }

    #[test]
    fn jump_keys_hit_both_ends() {
        let mut state = feed_state(25);

        state = reduce(state, key(KeyCode::Char('G'))).0;
        let Screen::Feed(feed) = &state.screen else {
            panic!()
        };
        assert_eq!(feed.cursor, 24);
        assert!(feed.offset > 0);

        state = reduce(state, key(KeyCode::Char('g'))).0;
        let Screen::Feed(feed) = &state.screen else {
            panic!()
        };
        assert_eq!(feed.cursor, 0);
        assert_eq!(feed.offset, 0);
    }

    #[test]
    fn resize_reclamps_cursor_and_offset() {
        let mut state = feed_state(25);
        state = reduce(state, key(KeyCode::Char('G'))).0;

        // Shrink hard: capacity drops to 1
        let (state, _) = reduce(state, Action::Resize(80, 7));
        let capacity = page_capacity(7);
        let Screen::Feed(feed) = &state.screen else {
            panic!()
        };
        assert!(feed.offset <= feed.cursor);
        assert!(feed.cursor <= feed.offset + capacity - 1);
    }

    #[test]
    fn refresh_reenters_loading_and_issues_fetch() {
        let state = feed_state(3);

        let (state, commands) = reduce(state, key(KeyCode::Char('r')));

        assert!(state.is_loading());
        assert_eq!(
            commands,
            vec![Command::FetchFeed {
                id_token: "tok".to_string()
            }]
        );
    }

    #[test]
    fn second_refresh_completion_wins() {
        let state = feed_state(3);
        let (state, _) = reduce(state, key(KeyCode::Char('r')));

        // Both in-flight fetches eventually complete; the last one processed
        // overwrites the first.
        let (state, _) = reduce(state, Action::FeedLoaded { posts: posts(5) });
        let (state, _) = reduce(state, Action::FeedLoaded { posts: posts(2) });

        let Screen::Feed(feed) = &state.screen else {
            panic!()
        };
        assert_eq!(feed.posts.len(), 2);
        assert!(!feed.loading);
    }

    #[test]
    fn fetch_failure_keeps_previous_posts_and_sets_error() {
        let state = feed_state(3);
        let (state, _) = reduce(state, key(KeyCode::Char('r')));

        let (state, _) = reduce(
            state,
            Action::FeedLoadFailed {
                message: "Network error: timeout".to_string(),
            },
        );

        let Screen::Feed(feed) = &state.screen else {
            panic!()
        };
        assert!(!feed.loading);
        assert_eq!(feed.posts.len(), 3);
        assert_eq!(feed.error.as_deref(), Some("Network error: timeout"));
    }

    #[test]
    fn keys_are_ignored_while_feed_is_loading() {
        let (state, _) = AppState::with_session(Some(session()));
        assert!(state.is_loading());

        let (state, commands) = reduce(state, key(KeyCode::Char('j')));
        assert!(commands.is_empty());
        let Screen::Feed(feed) = &state.screen else {
            panic!()
        };
        assert_eq!(feed.cursor, 0);
    }

    #[test]
    fn enter_on_empty_feed_does_nothing() {
        let state = feed_state(0);

        let (state, commands) = reduce(state, key(KeyCode::Enter));

        assert!(commands.is_empty());
        assert!(matches!(state.screen, Screen::Feed(_)));
    }

    // === Feed -> Detail ===

    #[test]
    fn enter_carries_selected_post_and_fetches_only_replies() {
        let mut state = feed_state(5);
        state = reduce(state, key(KeyCode::Char('j'))).0;
        state = reduce(state, key(KeyCode::Char('j'))).0;

        let (state, commands) = reduce(state, key(KeyCode::Enter));

        let Screen::Detail { detail, .. } = &state.screen else {
            panic!("expected detail screen");
        };
        assert_eq!(detail.post.as_ref().map(|p| p.id.as_str()), Some("p2"));
        assert!(detail.loading);
        assert_eq!(
            commands,
            vec![Command::FetchThread {
                id_token: "tok".to_string(),
                post_id: "p2".to_string(),
                need_post: false,
            }]
        );
    }

    #[test]
    fn back_restores_the_feed_and_discards_the_detail_model() {
        let mut state = feed_state(5);
        state = reduce(state, key(KeyCode::Char('j'))).0;
        state = reduce(state, key(KeyCode::Enter)).0;
        let (state, _) = reduce(
            state,
            Action::DetailLoaded {
                post: None,
                replies: vec![Reply {
                    id: "r1".to_string(),
                    ..Reply::default()
                }],
            },
        );

        let (state, commands) = reduce(state, key(KeyCode::Esc));

        assert!(commands.is_empty());
        let Screen::Feed(feed) = &state.screen else {
            panic!("expected feed screen");
        };
        assert_eq!(feed.posts.len(), 5);
        assert_eq!(feed.cursor, 1);
    }

    #[test]
    fn detail_refresh_refetches_replies_but_not_the_carried_post() {
        let mut state = feed_state(2);
        state = reduce(state, key(KeyCode::Enter)).0;
        let (state, _) = reduce(
            state,
            Action::DetailLoaded {
                post: None,
                replies: Vec::new(),
            },
        );

        let (_, commands) = reduce(state, key(KeyCode::Char('r')));

        assert_eq!(
            commands,
            vec![Command::FetchThread {
                id_token: "tok".to_string(),
                post_id: "p0".to_string(),
                need_post: false,
            }]
        );
    }

    #[test]
    fn detail_failure_sets_error_and_clears_loading() {
        let mut state = feed_state(2);
        state = reduce(state, key(KeyCode::Enter)).0;

        let (state, _) = reduce(
            state,
            Action::DetailLoadFailed {
                message: "Request failed (503): unavailable".to_string(),
            },
        );

        let Screen::Detail { detail, .. } = &state.screen else {
            panic!()
        };
        assert!(!detail.loading);
        assert!(detail.error.is_some());
    }

    #[test]
    fn detail_scroll_saturates_at_both_ends() {
        let mut state = feed_state(2);
        state = reduce(state, key(KeyCode::Enter)).0;
        let (mut state, _) = reduce(
            state,
            Action::DetailLoaded {
                post: None,
                replies: Vec::new(),
            },
        );

        // Content fits in a 30-row viewport: max scroll is 0
        state = reduce(state, key(KeyCode::Char('j'))).0;
        let Screen::Detail { detail, .. } = &state.screen else {
            panic!()
        };
        assert_eq!(detail.scroll, 0);

        state = reduce(state, key(KeyCode::Char('k'))).0;
        let Screen::Detail { detail, .. } = &state.screen else {
            panic!()
        };
        assert_eq!(detail.scroll, 0);
    }

    #[test]
    fn tick_advances_spinner_only_while_loading() {
        let (state, _) = AppState::with_session(Some(session()));
        let (state, _) = reduce(state, Action::Tick);
        assert_eq!(state.tick, 1);

        let (state, _) = reduce(state, Action::FeedLoaded { posts: posts(1) });
        let (state, _) = reduce(state, Action::Tick);
        assert_eq!(state.tick, 1);
    }
}
