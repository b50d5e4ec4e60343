//! Domain records for Drift
//!
//! Posts and replies are constructed only by the document decoder and are
//! immutable once placed in a screen model; a refresh replaces them
//! wholesale.

use chrono::{DateTime, Utc};

/// A single feed post.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Final path segment of the backing document's name.
    pub id: String,
    pub author_id: String,
    pub author_username: String,
    /// Raw text, may contain lightweight markup.
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub replies_count: i64,
    pub bookmarks_count: i64,
    /// Short tags in store order.
    pub topics: Vec<String>,
    pub deleted: bool,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            id: String::new(),
            author_id: String::new(),
            author_username: String::new(),
            content: String::new(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            replies_count: 0,
            bookmarks_count: 0,
            topics: Vec::new(),
            deleted: false,
        }
    }
}

/// A reply within a post's thread. `post_id` is a lookup back-reference,
/// not an ownership edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub author_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

impl Default for Reply {
    fn default() -> Self {
        Self {
            id: String::new(),
            post_id: String::new(),
            author_id: String::new(),
            author_username: String::new(),
            content: String::new(),
            created_at: DateTime::UNIX_EPOCH,
            deleted: false,
        }
    }
}
