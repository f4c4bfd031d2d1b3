//! Confidential-client token acquisition.
//!
//! Implements the OAuth2 client-credentials flow against the identity
//! authority and caches the resulting token until shortly before expiry,
//! so concurrent requests share one token instead of hammering the
//! token endpoint.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::config::GraphConfig;
use crate::error::NoteDriveError;
use crate::graph::types::TokenResponse;
use crate::Result;

/// Seconds subtracted from the token lifetime before a refresh is forced.
const EXPIRY_MARGIN_SECS: u64 = 60;

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Acquires and caches bearer tokens for the drive client.
pub struct TokenProvider {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    scope: String,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    /// Create a token provider from Graph configuration.
    ///
    /// The `http` client is shared with the drive client so both reuse
    /// one connection pool.
    pub fn new(http: reqwest::Client, config: &GraphConfig) -> Self {
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            config.authority.trim_end_matches('/'),
            config.tenant_id
        );

        Self {
            http,
            token_url,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            scope: config.scope.clone(),
            cached: Mutex::new(None),
        }
    }

    /// Return a valid bearer token, fetching a fresh one if needed.
    pub async fn bearer_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Instant::now()) {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.request_token().await?;
        let lifetime = token.expires_in.saturating_sub(EXPIRY_MARGIN_SECS);
        *cached = Some(CachedToken {
            access_token: token.access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        });

        tracing::debug!("Acquired drive access token (lifetime {}s)", token.expires_in);

        Ok(token.access_token)
    }

    async fn request_token(&self) -> Result<TokenResponse> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", self.scope.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| NoteDriveError::Upstream(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // Response bodies from the identity endpoint can carry the
            // client secret's correlation data; log the status only.
            return Err(NoteDriveError::Upstream(format!(
                "token endpoint returned HTTP {status}"
            )));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| NoteDriveError::Upstream(format!("malformed token response: {e}")))
    }
}
