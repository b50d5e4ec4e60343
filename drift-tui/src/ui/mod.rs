//! UI rendering
//!
//! Pure render functions that draw the current state into a frame. All
//! styling comes from the injected [`Theme`]; nothing here mutates state.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, Screen};

pub mod detail;
pub mod feed;
pub mod format;
pub mod login;
pub mod theme;

pub use theme::Theme;

/// Main rendering entry point: dispatch on the active screen.
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, now: DateTime<Utc>) {
    match &state.screen {
        Screen::Login(login) => login::render(frame, login, theme),
        Screen::Feed(feed) => feed::render(frame, feed, theme, state.tick, now),
        Screen::Detail { detail, .. } => detail::render(frame, detail, theme, state.tick, now),
    }
}

/// Two-line screen header: title with key hints, then a divider.
pub(crate) fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, title: &str, hints: &str) {
    let divider = "─".repeat(area.width as usize);
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!(" {} ", title), theme.title),
            Span::raw(" "),
            Span::styled(hints.to_string(), theme.muted),
        ]),
        Line::from(Span::styled(divider, theme.muted)),
    ]);
    frame.render_widget(header, area);
}

/// Spinner + message, centered.
pub(crate) fn render_loading(frame: &mut Frame, area: Rect, theme: &Theme, tick: u64, message: &str) {
    let line = Line::from(vec![
        Span::styled(format::spinner_frame(tick), theme.spinner),
        Span::raw(" "),
        Span::raw(message.to_string()),
    ]);
    let widget = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(widget, vertically_centered(area, 1));
}

/// Full-screen error panel with a retry hint.
pub(crate) fn render_error(frame: &mut Frame, area: Rect, theme: &Theme, error: &str, hint: &str) {
    let lines = vec![
        Line::from(Span::styled(format!("Error: {}", error), theme.error)),
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), theme.muted)),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, vertically_centered(area, 3));
}

/// A sub-rectangle of `area` that is `height` rows tall and vertically
/// centered.
pub(crate) fn vertically_centered(area: Rect, height: u16) -> Rect {
    let pad = area.height.saturating_sub(height) / 2;
    Rect {
        x: area.x,
        y: area.y + pad,
        width: area.width,
        height: height.min(area.height),
    }
}

/// A centered rectangle with fixed dimensions, clamped to `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Standard three-part vertical layout: header, body, footer.
pub(crate) fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area)
}
