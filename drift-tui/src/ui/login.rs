//! Login screen rendering

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{LoginField, LoginState};

use super::{centered_rect, Theme};

const BOX_WIDTH: u16 = 44;
const BOX_HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame, login: &LoginState, theme: &Theme) {
    let area = centered_rect(frame.area(), BOX_WIDTH, BOX_HEIGHT);

    let status = if login.loading {
        Line::from(Span::raw("Signing in..."))
    } else if let Some(error) = &login.error {
        Line::from(Span::styled(format!("Error: {}", error), theme.error))
    } else {
        Line::from(Span::styled("Press Enter to sign in", theme.muted))
    };

    let masked: String = "•".repeat(login.password.chars().count());
    let lines = vec![
        Line::from(Span::styled("DRIFT", theme.title)),
        Line::from(""),
        Line::from(Span::styled("Email", theme.muted)),
        field_line(&login.email, login.focus == LoginField::Email, theme),
        Line::from(""),
        Line::from(Span::styled("Password", theme.muted)),
        field_line(&masked, login.focus == LoginField::Password, theme),
        Line::from(""),
        status,
    ];

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.muted)
            .title(" Sign in "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(form, area);
}

/// An input row: focus marker, buffer contents, and a block cursor on the
/// focused field.
fn field_line(value: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let mut spans = vec![
        Span::styled(marker.to_string(), theme.title),
        Span::raw(value.to_string()),
    ];
    if focused {
        spans.push(Span::styled("█".to_string(), theme.muted));
    }
    Line::from(spans)
}
