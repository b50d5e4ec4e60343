//! drift-tui - Terminal client for Drift
//!
//! Signs in against the identity service (or reuses a cached session),
//! then drives the feed/detail screens through the pure reducer.

use chrono::Utc;

use drift_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui::{self, Theme},
};
use libdrift::{logging, Config, Session, SessionStore};

fn main() -> Result<()> {
    if let Err(err) = logging::init_tui() {
        eprintln!("Warning: failed to open log file: {}", err);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Set DRIFT_API_KEY and DRIFT_PROJECT_ID in the environment.");
            std::process::exit(1);
        }
    };

    let session = load_cached_session();

    // Install panic hook to restore the terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, config, session);
    restore_terminal(terminal)?;

    result
}

/// A broken cache is a warning, not a reason to refuse startup.
fn load_cached_session() -> Option<Session> {
    let store = match SessionStore::new() {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!("session cache unavailable: {}", err);
            return None;
        }
    };

    match store.load() {
        Ok(session) => session,
        Err(err) => {
            tracing::warn!("failed to load cached session: {}", err);
            None
        }
    }
}

fn run_app(terminal: &mut Tui, config: Config, session: Option<Session>) -> Result<()> {
    let tick_rate_ms = config.settings.tick_rate_ms;
    let services = ServiceHandle::new(config)?;
    let theme = Theme::default();

    // Initial state by cached session; schedule the startup fetch if any
    let (mut state, commands) = AppState::with_session(session);
    for command in commands {
        services.dispatch(command);
    }

    // Seed the viewport before the first draw
    let size = terminal.size()?;
    state = reduce(state, Action::Resize(size.width, size.height)).0;

    let event_handler = EventHandler::new(tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state, &theme, Utc::now()))?;

        // Terminal input (or a tick timeout) ...
        let action: Action = event_handler.next()?.into();
        let (next, commands) = reduce(state, action);
        state = next;
        for command in commands {
            services.dispatch(command);
        }

        // ... then any fetch completions that arrived meanwhile
        while let Some(action) = services.try_recv() {
            let (next, commands) = reduce(state, action);
            state = next;
            for command in commands {
                services.dispatch(command);
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
