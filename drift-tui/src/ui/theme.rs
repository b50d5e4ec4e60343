//! Visual theme
//!
//! Immutable style data injected into the render functions - no globals,
//! no lifecycle. Swap the palette here and every screen follows.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    /// Titles and usernames
    pub title: Style,
    /// Timestamps, help text, dividers
    pub muted: Style,
    /// Post body text
    pub content: Style,
    /// Topic tags
    pub topic: Style,
    /// Error text
    pub error: Style,
    /// Overlay applied to the selected feed row
    pub selected: Style,
    /// Loading spinner
    pub spinner: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            content: Style::default().fg(Color::Gray),
            topic: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),
            selected: Style::default()
                .bg(Color::Rgb(40, 40, 48))
                .add_modifier(Modifier::BOLD),
            spinner: Style::default().fg(Color::Cyan),
        }
    }
}
