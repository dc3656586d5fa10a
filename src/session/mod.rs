//! Bearer token lifecycle for the upstream service.
//!
//! The token endpoint issues short-lived bearer tokens (about five
//! minutes server-side). [`TokenManager`] caches the current token and
//! re-authenticates lazily when a caller asks for a token past the
//! local validity window. Expiry is checked on access, not by a timer.
//!
//! Concurrent callers that each observe an expired token may each
//! authenticate; the endpoint is safe to call redundantly and the last
//! write wins. All results derive from the same credentials, so every
//! winner is equally valid.

use crate::config::Credentials;
use crate::constants::{TOKEN_VALIDITY_SECONDS, USER_AGENT};
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// A bearer token together with the instant this client stops using it
#[derive(Debug, Clone)]
pub struct Token {
    /// Raw bearer value sent in the `Authorization` header
    pub value: String,
    /// Local expiry; intentionally earlier than the server-side expiry
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Whether the token may still be attached to an outgoing call at `now`
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Owns the cached token and re-authenticates when it lapses.
///
/// States are `Unauthenticated` (no token yet), `Valid` and `Expired`;
/// a failed authentication leaves whatever state was there before.
pub struct TokenManager {
    http: Client,
    credentials: Credentials,
    token_url: String,
    validity: Duration,
    token: RwLock<Option<Token>>,
}

impl TokenManager {
    /// Creates a manager with the default validity window
    pub fn new(credentials: Credentials, token_url: impl Into<String>) -> Self {
        Self::with_validity(
            credentials,
            token_url,
            Duration::seconds(TOKEN_VALIDITY_SECONDS),
        )
    }

    /// Creates a manager with an explicit validity window
    pub fn with_validity(
        credentials: Credentials,
        token_url: impl Into<String>,
        validity: Duration,
    ) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("reqwest client");

        Self {
            http,
            credentials,
            token_url: token_url.into(),
            validity,
            token: RwLock::new(None),
        }
    }

    /// Returns a token guaranteed valid for immediate use.
    ///
    /// Serves the cached token while it is inside the validity window,
    /// otherwise authenticates again. An authentication failure
    /// propagates and keeps the previous token untouched.
    pub async fn ensure_valid(&self) -> Result<Token, AppError> {
        {
            let guard = self.token.read().await;
            if let Some(token) = guard.as_ref() {
                if token.is_valid_at(Utc::now()) {
                    return Ok(token.clone());
                }
                debug!("cached token expired at {}", token.expires_at);
            }
        }

        self.authenticate().await
    }

    /// Authenticates against the token endpoint.
    ///
    /// Sends `{Username, Password, Sistema}` as JSON; an HTTP 200 body
    /// is the plain-text bearer token. Any other status fails with
    /// [`AppError::Authentication`]. On success the stored token is
    /// replaced atomically with `expires_at = now + validity`.
    pub async fn authenticate(&self) -> Result<Token, AppError> {
        debug!("authenticating against {}", self.token_url);

        let body = json!({
            "Username": self.credentials.username,
            "Password": self.credentials.password,
            "Sistema": self.credentials.system,
        });

        let response = self
            .http
            .post(&self.token_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Authentication(format!("token endpoint unreachable: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("authentication failed with status code: {status}");
            return Err(AppError::Authentication(format!(
                "token endpoint returned status {status}"
            )));
        }

        let value = response
            .text()
            .await
            .map_err(|e| AppError::Authentication(format!("failed to read token body: {e}")))?;

        let token = Token {
            value,
            expires_at: Utc::now() + self.validity,
        };

        let mut guard = self.token.write().await;
        *guard = Some(token.clone());
        info!("authenticated, token valid until {}", token.expires_at);

        Ok(token)
    }
}
