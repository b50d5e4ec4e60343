//! Scroll and pagination arithmetic shared by the reducer and the renderer.
//!
//! Invariant for cursor/offset pairs over a non-empty list:
//! `0 <= offset <= cursor <= offset + capacity - 1`; both are 0 when the
//! list is empty. Capacity derives from the viewport height, so a resize
//! re-clamps both.

/// Terminal rows a single feed card occupies.
pub const FEED_ROW_HEIGHT: usize = 4;

/// Rows taken by the feed chrome (two-line header, one-line footer).
pub const FEED_CHROME_ROWS: usize = 3;

/// Rows taken by the detail chrome (two-line header, one-line indicator,
/// one spacing row).
pub const DETAIL_CHROME_ROWS: usize = 4;

/// Feed rows that fit in the current viewport, never less than one.
pub fn page_capacity(height: u16) -> usize {
    ((height as usize).saturating_sub(FEED_CHROME_ROWS) / FEED_ROW_HEIGHT).max(1)
}

/// Content lines visible on the detail screen, never less than one.
pub fn detail_viewport(height: u16) -> usize {
    (height as usize).saturating_sub(DETAIL_CHROME_ROWS).max(1)
}

/// Recompute the scroll offset so the cursor row stays within the visible
/// window - scroll-into-view, not continuous centering.
pub fn scroll_into_view(cursor: usize, offset: usize, capacity: usize) -> usize {
    if cursor < offset {
        cursor
    } else if cursor >= offset + capacity {
        cursor + 1 - capacity
    } else {
        offset
    }
}

/// Clamp a cursor/offset pair after the list or viewport changed.
pub fn clamp_cursor(cursor: usize, offset: usize, len: usize, capacity: usize) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    let cursor = cursor.min(len - 1);
    let offset = scroll_into_view(cursor, offset.min(cursor), capacity);
    (cursor, offset)
}
