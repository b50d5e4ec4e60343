//! Document store client
//!
//! Bearer-authenticated structured queries and direct gets against the
//! store's REST surface. Responses are handed to the decoder in
//! [`crate::document`]; malformed rows are dropped there, never here.

use super::{status_error, transport_error};
use crate::document::{self, Document};
use crate::error::ApiError;
use crate::types::{Post, Reply};

pub struct StoreClient {
    http: reqwest::Client,
    store_url: String,
    project_id: String,
    id_token: String,
}

impl StoreClient {
    pub fn new(
        http: reqwest::Client,
        store_url: String,
        project_id: String,
        id_token: String,
    ) -> Self {
        Self {
            http,
            store_url,
            project_id,
            id_token,
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents",
            self.store_url, self.project_id
        )
    }

    /// Fetch the newest non-deleted posts, newest first.
    pub async fn fetch_posts(&self, limit: u32) -> Result<Vec<Post>, ApiError> {
        let rows = self.run_query(posts_query(limit)).await?;
        Ok(document::documents_from_rows(rows)
            .iter()
            .map(document::decode_post)
            .collect())
    }

    /// Fetch a single post by id.
    pub async fn fetch_post(&self, post_id: &str) -> Result<Post, ApiError> {
        let url = format!("{}/posts/{}", self.documents_url(), post_id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.id_token)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        let doc: Document =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(document::decode_post(&doc))
    }

    /// Fetch the non-deleted replies of a post, oldest first.
    pub async fn fetch_replies(&self, post_id: &str, limit: u32) -> Result<Vec<Reply>, ApiError> {
        let rows = self.run_query(replies_query(post_id, limit)).await?;
        Ok(document::documents_from_rows(rows)
            .iter()
            .map(document::decode_reply)
            .collect())
    }

    async fn run_query(
        &self,
        query: serde_json::Value,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        let url = format!("{}:runQuery", self.documents_url());

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.id_token)
            .json(&query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Structured query for the feed: non-deleted posts, newest first.
fn posts_query(limit: u32) -> serde_json::Value {
    serde_json::json!({
        "structuredQuery": {
            "from": [{ "collectionId": "posts" }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": "deleted" },
                    "op": "EQUAL",
                    "value": { "booleanValue": false }
                }
            },
            "orderBy": [{
                "field": { "fieldPath": "createdAt" },
                "direction": "DESCENDING"
            }],
            "limit": limit
        }
    })
}

/// Structured query for a thread: the post's non-deleted replies, oldest
/// first.
fn replies_query(post_id: &str, limit: u32) -> serde_json::Value {
    serde_json::json!({
        "structuredQuery": {
            "from": [{ "collectionId": "replies" }],
            "where": {
                "compositeFilter": {
                    "op": "AND",
                    "filters": [
                        {
                            "fieldFilter": {
                                "field": { "fieldPath": "postId" },
                                "op": "EQUAL",
                                "value": { "stringValue": post_id }
                            }
                        },
                        {
                            "fieldFilter": {
                                "field": { "fieldPath": "deleted" },
                                "op": "EQUAL",
                                "value": { "booleanValue": false }
                            }
                        }
                    ]
                }
            },
            "orderBy": [{
                "field": { "fieldPath": "createdAt" },
                "direction": "ASCENDING"
            }],
            "limit": limit
        }
    })
}
