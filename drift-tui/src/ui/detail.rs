//! Post detail screen rendering
//!
//! Draws the line enumeration produced by `app::layout`, windowed by the
//! scroll offset, so what the reducer clamps against is exactly what shows.

use chrono::{DateTime, Utc};
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::layout::{detail_lines, DetailLine};
use crate::app::scroll::detail_viewport;
use crate::app::DetailState;

use super::format::{format_topics, spinner_frame, time_ago};
use super::{render_error, render_header, render_loading, screen_chunks, Theme};

pub fn render(frame: &mut Frame, detail: &DetailState, theme: &Theme, tick: u64, now: DateTime<Utc>) {
    let area = frame.area();

    // Nothing to show yet: the post was not carried over and is still loading
    if detail.loading && detail.post.is_none() {
        render_loading(frame, area, theme, tick, "Loading post...");
        return;
    }

    if let Some(error) = &detail.error {
        render_error(frame, area, theme, error, "Press 'b' to go back, 'r' to retry");
        return;
    }

    let chunks = screen_chunks(area);
    render_header(
        frame,
        chunks[0],
        theme,
        "POST",
        "b:back  j/k:scroll  r:refresh  q:quit",
    );

    let all_lines = detail_lines(detail, area.width);
    let viewport = detail_viewport(area.height);
    let start = detail.scroll.min(all_lines.len());
    let end = (start + viewport).min(all_lines.len());

    let body: Vec<Line> = all_lines[start..end]
        .iter()
        .map(|line| style_line(line, theme, tick, now))
        .collect();
    frame.render_widget(Paragraph::new(body), chunks[1]);

    if all_lines.len() > viewport {
        let indicator = Paragraph::new(Span::styled(
            format!(" Line {}-{} of {}", start + 1, end, all_lines.len()),
            theme.muted,
        ));
        frame.render_widget(indicator, chunks[2]);
    }
}

fn style_line(line: &DetailLine, theme: &Theme, tick: u64, now: DateTime<Utc>) -> Line<'static> {
    match line {
        DetailLine::Author {
            username,
            created_at,
        } => Line::from(vec![
            Span::styled(format!("@{}", username), theme.title),
            Span::styled(format!(" · {}", time_ago(now, *created_at)), theme.muted),
        ]),
        DetailLine::Content(text) => Line::from(Span::styled(text.clone(), theme.content)),
        DetailLine::Stats {
            replies,
            bookmarks,
            topics,
        } => {
            let mut spans = vec![Span::styled(
                format!("↩ {} replies  ★ {} bookmarks", replies, bookmarks),
                theme.muted,
            )];
            if !topics.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(format_topics(topics), theme.topic));
            }
            Line::from(spans)
        }
        DetailLine::Divider => Line::from(Span::styled("─".repeat(76), theme.muted)),
        DetailLine::RepliesHeader(count) => Line::from(Span::styled(
            format!("REPLIES ({})", count),
            theme.title,
        )),
        DetailLine::NoReplies => Line::from(Span::styled("No replies yet".to_string(), theme.muted)),
        DetailLine::LoadingReplies => Line::from(vec![
            Span::styled(spinner_frame(tick), theme.spinner),
            Span::raw(" Loading replies..."),
        ]),
        DetailLine::ReplyAuthor {
            username,
            created_at,
        } => Line::from(vec![
            Span::styled(format!("@{}", username), theme.title),
            Span::styled(format!(" · {}", time_ago(now, *created_at)), theme.muted),
        ]),
        DetailLine::ReplyContent(text) => {
            Line::from(Span::styled(format!("  {}", text), theme.content))
        }
        DetailLine::Blank => Line::from(""),
    }
}
