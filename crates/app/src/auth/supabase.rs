//! Supabase Auth client for resolving access tokens.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::users::records::{SessionUser, UserUuid};

/// Configuration for connecting to a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `"https://abc.supabase.co"`.
    pub url: String,

    /// Public anon key sent as the `apikey` header.
    pub anon_key: String,
}

/// HTTP client for the Supabase Auth `user` endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseAuthClient {
    config: SupabaseConfig,
    http: Client,
}

impl SupabaseAuthClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub(crate) fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.config.url.trim_end_matches('/'))
    }

    /// Look up the user that owns `access_token`.
    ///
    /// Returns `Ok(None)` when Supabase rejects the token.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn fetch_user(&self, access_token: &str) -> Result<Option<SessionUser>, SupabaseError> {
        let response = self
            .http
            .get(self.user_endpoint())
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Ok(None);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(SupabaseError::UnexpectedResponse(format!(
                "user request failed with status {status}: {text}"
            )));
        }

        let user: UserResponse = response.json().await?;

        Ok(Some(user.into()))
    }
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: Uuid,

    #[serde(default)]
    email: Option<String>,
}

impl From<UserResponse> for SessionUser {
    fn from(user: UserResponse) -> Self {
        Self {
            uuid: UserUuid::from_uuid(user.id),
            email: user.email.filter(|email| !email.is_empty()),
        }
    }
}

/// Errors that can occur when communicating with Supabase.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Supabase returned a non-2xx response other than a token rejection.
    #[error("unexpected response from Supabase: {0}")]
    UnexpectedResponse(String),
}
