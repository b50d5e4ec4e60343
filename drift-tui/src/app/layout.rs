//! Detail screen text layout
//!
//! The detail view scrolls line-by-line over rendered content, so clamping
//! the scroll offset needs the same line enumeration the renderer draws
//! from. This module builds that enumeration as pure data: one
//! [`DetailLine`] per terminal row, derived only from state and viewport
//! width. The renderer styles the lines; the reducer only counts them.

use chrono::{DateTime, Utc};

use super::scroll::detail_viewport;
use super::state::DetailState;

/// One rendered row of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailLine {
    Author {
        username: String,
        created_at: DateTime<Utc>,
    },
    Content(String),
    Stats {
        replies: i64,
        bookmarks: i64,
        topics: Vec<String>,
    },
    Divider,
    RepliesHeader(usize),
    NoReplies,
    LoadingReplies,
    ReplyAuthor {
        username: String,
        created_at: DateTime<Utc>,
    },
    ReplyContent(String),
    Blank,
}

/// Usable text width for detail content: viewport minus side padding,
/// capped for readability.
pub fn content_width(width: u16) -> usize {
    let w = (width as usize).saturating_sub(4);
    if w < 1 {
        76
    } else {
        w.min(76)
    }
}

/// Greedy word wrap by character count. Explicit newlines are preserved;
/// an overlong word occupies a line of its own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }

    lines
}

/// Enumerate the full detail view, one entry per terminal row.
pub fn detail_lines(detail: &DetailState, width: u16) -> Vec<DetailLine> {
    let text_width = content_width(width);
    let mut lines = Vec::new();

    let Some(post) = &detail.post else {
        return lines;
    };

    lines.push(DetailLine::Author {
        username: post.author_username.clone(),
        created_at: post.created_at,
    });
    lines.push(DetailLine::Blank);

    for line in wrap(&post.content, text_width) {
        lines.push(DetailLine::Content(line));
    }
    lines.push(DetailLine::Blank);

    lines.push(DetailLine::Stats {
        replies: post.replies_count,
        bookmarks: post.bookmarks_count,
        topics: post.topics.clone(),
    });
    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Divider);
    lines.push(DetailLine::Blank);

    if detail.loading {
        lines.push(DetailLine::LoadingReplies);
    } else if detail.replies.is_empty() {
        lines.push(DetailLine::NoReplies);
    } else {
        lines.push(DetailLine::RepliesHeader(detail.replies.len()));
        lines.push(DetailLine::Blank);

        for (i, reply) in detail.replies.iter().enumerate() {
            lines.push(DetailLine::ReplyAuthor {
                username: reply.author_username.clone(),
                created_at: reply.created_at,
            });
            for line in wrap(&reply.content, text_width.saturating_sub(2).max(1)) {
                lines.push(DetailLine::ReplyContent(line));
            }
            if i + 1 < detail.replies.len() {
                lines.push(DetailLine::Blank);
            }
        }
    }

    lines
}

/// Greatest valid scroll offset: content height minus the viewport, zero
/// when everything fits.
pub fn max_scroll(detail: &DetailState, width: u16, height: u16) -> usize {
    detail_lines(detail, width)
        .len()
        .saturating_sub(detail_viewport(height))
}
