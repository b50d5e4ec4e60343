//! Backend API clients
//!
//! Two collaborators, both HTTPS+JSON: the identity service that exchanges
//! credentials for tokens, and the document store that serves posts and
//! replies. Both clients are thin - they issue one request, map failures
//! into [`crate::error::ApiError`], and hand documents to the decoder.

pub mod identity;
pub mod store;

pub use identity::{IdentityClient, TokenRefresh};
pub use store::StoreClient;

use crate::error::ApiError;

/// Map a transport-level failure to the fetch-error taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Build a status error from a non-success response, keeping a trimmed
/// slice of the body as the message.
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    const MAX_MESSAGE: usize = 200;

    let trimmed = body.trim();
    let message = if trimmed.is_empty() {
        "no response body".to_string()
    } else if trimmed.chars().count() > MAX_MESSAGE {
        let cut: String = trimmed.chars().take(MAX_MESSAGE).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    };

    ApiError::Status { status, message }
}
