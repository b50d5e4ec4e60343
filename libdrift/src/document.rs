//! Document store wire format and decoder
//!
//! The store encodes every field as a tagged value carrying exactly one typed
//! payload. On the wire that arrives as a struct of optional payloads
//! ([`WireValue`]); the decoder first collapses it into the closed union
//! [`Value`] and then pattern-matches, so a value is always exactly one of
//! the known kinds or `Absent` - never an ambiguous half-set pointer soup.
//!
//! Decoding is total: `decode_post` and `decode_reply` never fail. A missing
//! or wrong-kind field leaves the target at its zero value, an unparsable
//! integer string decodes to 0, and an unparsable timestamp decodes to the
//! Unix epoch. The design favors showing partial-but-valid data over failing
//! a whole view.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

use crate::types::{Post, Reply};

/// A named document as returned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// Path-like resource name; the record id is its final segment.
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, WireValue>,
}

/// Raw tagged value exactly as serialized by the store.
///
/// Unknown kinds (`nullValue`, `doubleValue`, ...) leave every payload unset
/// and classify as [`Value::Absent`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireValue {
    string_value: Option<String>,
    integer_value: Option<String>,
    boolean_value: Option<bool>,
    timestamp_value: Option<String>,
    array_value: Option<WireArray>,
    map_value: Option<WireMap>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireArray {
    #[serde(default)]
    values: Vec<WireValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireMap {
    #[serde(default)]
    fields: HashMap<String, WireValue>,
}

/// Closed union over the tagged kinds the store can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    /// Integers travel as decimal strings.
    Integer(String),
    Boolean(bool),
    /// RFC 3339 instant as a string.
    Timestamp(String),
    Array(Vec<Value>),
    Map(HashMap<String, Value>),
    Absent,
}

impl WireValue {
    /// Collapse the optional payloads into exactly one [`Value`] kind.
    pub fn classify(&self) -> Value {
        if let Some(s) = &self.string_value {
            Value::String(s.clone())
        } else if let Some(s) = &self.integer_value {
            Value::Integer(s.clone())
        } else if let Some(b) = self.boolean_value {
            Value::Boolean(b)
        } else if let Some(s) = &self.timestamp_value {
            Value::Timestamp(s.clone())
        } else if let Some(array) = &self.array_value {
            Value::Array(array.values.iter().map(WireValue::classify).collect())
        } else if let Some(map) = &self.map_value {
            Value::Map(
                map.fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.classify()))
                    .collect(),
            )
        } else {
            Value::Absent
        }
    }
}

impl Document {
    /// The record id: everything after the last `/` of the document name,
    /// or the whole name when it carries no separator.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn value(&self, field: &str) -> Value {
        self.fields
            .get(field)
            .map(WireValue::classify)
            .unwrap_or(Value::Absent)
    }

    fn string_field(&self, field: &str) -> String {
        match self.value(field) {
            Value::String(s) => s,
            _ => String::new(),
        }
    }

    fn integer_field(&self, field: &str) -> i64 {
        match self.value(field) {
            Value::Integer(s) => s.parse().unwrap_or(0),
            _ => 0,
        }
    }

    fn boolean_field(&self, field: &str) -> bool {
        match self.value(field) {
            Value::Boolean(b) => b,
            _ => false,
        }
    }

    fn timestamp_field(&self, field: &str) -> DateTime<Utc> {
        match self.value(field) {
            Value::Timestamp(s) => DateTime::parse_from_rfc3339(&s)
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or(DateTime::UNIX_EPOCH),
            _ => DateTime::UNIX_EPOCH,
        }
    }

    /// Elements whose kind does not match are skipped, not fatal; the
    /// surviving strings keep their original order.
    fn string_list_field(&self, field: &str) -> Vec<String> {
        match self.value(field) {
            Value::Array(values) => values
                .into_iter()
                .filter_map(|value| match value {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Decode one document into a [`Post`]. Total - every field independently
/// optional.
pub fn decode_post(doc: &Document) -> Post {
    Post {
        id: doc.id().to_string(),
        author_id: doc.string_field("authorId"),
        author_username: doc.string_field("authorUsername"),
        content: doc.string_field("content"),
        created_at: doc.timestamp_field("createdAt"),
        updated_at: doc.timestamp_field("updatedAt"),
        replies_count: doc.integer_field("repliesCount"),
        bookmarks_count: doc.integer_field("bookmarksCount"),
        topics: doc.string_list_field("topics"),
        deleted: doc.boolean_field("deleted"),
    }
}

/// Decode one document into a [`Reply`]. Total.
pub fn decode_reply(doc: &Document) -> Reply {
    Reply {
        id: doc.id().to_string(),
        post_id: doc.string_field("postId"),
        author_id: doc.string_field("authorId"),
        author_username: doc.string_field("authorUsername"),
        content: doc.string_field("content"),
        created_at: doc.timestamp_field("createdAt"),
        deleted: doc.boolean_field("deleted"),
    }
}

/// Extract the documents from a raw query response.
///
/// Each row wraps an optional document; the store also emits rows carrying
/// only a read time, which are skipped. A row that fails to deserialize is
/// skipped as well - one malformed row never aborts the batch.
pub fn documents_from_rows(rows: Vec<serde_json::Value>) -> Vec<Document> {
    #[derive(Debug, Default, Deserialize)]
    struct QueryRow {
        #[serde(default)]
        document: Option<Document>,
    }

    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<QueryRow>(row) {
            Ok(row) => row.document,
            Err(err) => {
                tracing::debug!("skipping malformed query row: {}", err);
                None
            }
        })
        .collect()
}
