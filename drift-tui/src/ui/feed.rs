//! Feed screen rendering

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use libdrift::Post;

use crate::app::scroll::page_capacity;
use crate::app::FeedState;

use super::format::{format_topics, strip_markup, time_ago, truncate};
use super::{render_error, render_header, render_loading, vertically_centered, screen_chunks, Theme};

pub fn render(frame: &mut Frame, feed: &FeedState, theme: &Theme, tick: u64, now: DateTime<Utc>) {
    let area = frame.area();

    if feed.loading {
        render_loading(frame, area, theme, tick, "Loading posts...");
        return;
    }

    if let Some(error) = &feed.error {
        render_error(frame, area, theme, error, "Press 'r' to retry, 'q' to quit");
        return;
    }

    if feed.posts.is_empty() {
        let widget = Paragraph::new("No posts found. Press 'r' to refresh.")
            .alignment(Alignment::Center);
        frame.render_widget(widget, vertically_centered(area, 1));
        return;
    }

    let chunks = screen_chunks(area);
    render_header(
        frame,
        chunks[0],
        theme,
        "DRIFT FEED",
        "j/k:nav  enter:open  r:refresh  q:quit",
    );

    let capacity = page_capacity(area.height);
    let mut lines: Vec<Line> = Vec::new();
    for (i, post) in feed
        .posts
        .iter()
        .enumerate()
        .skip(feed.offset)
        .take(capacity)
    {
        render_row(&mut lines, post, i == feed.cursor, theme, now, area.width);
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    let footer = Paragraph::new(Span::styled(
        format!(" Post {} of {}", feed.cursor + 1, feed.posts.len()),
        theme.muted,
    ));
    frame.render_widget(footer, chunks[2]);
}

/// One feed card: author line, one-line preview, stats line, spacing row.
fn render_row(
    lines: &mut Vec<Line<'static>>,
    post: &Post,
    selected: bool,
    theme: &Theme,
    now: DateTime<Utc>,
    width: u16,
) {
    let marker = if selected { "▌ " } else { "  " };
    let preview_width = (width as usize).saturating_sub(4).clamp(10, 140);

    let author = vec![
        Span::styled(marker.to_string(), theme.title),
        Span::styled(format!("@{}", post.author_username), theme.title),
        Span::styled(format!(" · {}", time_ago(now, post.created_at)), theme.muted),
    ];

    let content = vec![
        Span::raw("  "),
        Span::styled(
            truncate(&strip_markup(&post.content), preview_width),
            theme.content,
        ),
    ];

    let mut stats = vec![
        Span::raw("  "),
        Span::styled(
            format!("↩ {}  ★ {}", post.replies_count, post.bookmarks_count),
            theme.muted,
        ),
    ];
    if !post.topics.is_empty() {
        stats.push(Span::raw("  "));
        stats.push(Span::styled(format_topics(&post.topics), theme.topic));
    }

    lines.push(styled_row(author, selected, theme));
    lines.push(styled_row(content, selected, theme));
    lines.push(styled_row(stats, selected, theme));
    lines.push(Line::from(""));
}

fn styled_row(spans: Vec<Span<'static>>, selected: bool, theme: &Theme) -> Line<'static> {
    if selected {
        Line::from(
            spans
                .into_iter()
                .map(|span| span.patch_style(theme.selected))
                .collect::<Vec<_>>(),
        )
    } else {
        Line::from(spans)
    }
}
