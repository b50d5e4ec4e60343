//! Identity service client
//!
//! Exchanges email/password for a token bundle, and refresh tokens for new
//! id tokens. Failure messages from the service arrive as SCREAMING_SNAKE
//! codes inside a structured error envelope; known codes are mapped to short
//! phrases for inline display, unknown codes pass through verbatim.

use serde::{Deserialize, Serialize};

use super::{status_error, transport_error};
use crate::error::ApiError;
use crate::session::Session;

pub struct IdentityClient {
    http: reqwest::Client,
    api_key: String,
    identity_url: String,
    token_url: String,
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    refresh_token: String,
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    #[allow(dead_code)]
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    #[allow(dead_code)]
    code: i64,
    message: String,
}

/// Result of a token refresh. Unused by the screen flow (expiry is only
/// discovered by a failed call), but part of the identity contract.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenRefresh {
    pub id_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub expires_in: String,
}

impl IdentityClient {
    pub fn new(http: reqwest::Client, api_key: String, identity_url: String, token_url: String) -> Self {
        Self {
            http,
            api_key,
            identity_url,
            token_url,
        }
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// `ApiError::Auth` with a short phrase when the service rejects the
    /// credentials, `ApiError::Network`/`Status` for transport failures.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = format!(
            "{}/accounts:signInWithPassword?key={}",
            self.identity_url, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            // The service wraps auth failures in a structured envelope; fall
            // back to a plain status error when the body is something else.
            return match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => Err(ApiError::Auth(friendly_auth_message(
                    &envelope.error.message,
                ))),
                Err(_) => Err(status_error(status.as_u16(), &body)),
            };
        }

        let parsed: SignInResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        tracing::debug!(user = %parsed.local_id, "sign-in succeeded");

        Ok(Session {
            id_token: parsed.id_token,
            refresh_token: parsed.refresh_token,
            user_id: parsed.local_id,
            email: parsed.email,
            username: parsed.display_name,
        })
    }

    /// Exchange a refresh token for a fresh token bundle.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenRefresh, ApiError> {
        let url = format!("{}/token?key={}", self.token_url, self.api_key);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
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

/// Map the identity service's error codes to short user-facing phrases.
/// Unknown codes pass through verbatim.
pub fn friendly_auth_message(code: &str) -> String {
    match code {
        "EMAIL_NOT_FOUND" => "Email not found".to_string(),
        "INVALID_PASSWORD" => "Invalid password".to_string(),
        "USER_DISABLED" => "Account has been disabled".to_string(),
        "INVALID_EMAIL" => "Invalid email format".to_string(),
        "INVALID_LOGIN_CREDENTIALS" => "Invalid email or password".to_string(),
        other => other.to_string(),
    }
}
