//! Sessions service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{SessionsServiceError, SupabaseAuthClient},
    domain::users::records::SessionUser,
};

#[derive(Debug, Clone)]
pub struct SupabaseSessionsService {
    client: SupabaseAuthClient,
}

impl SupabaseSessionsService {
    #[must_use]
    pub fn new(client: SupabaseAuthClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionsService for SupabaseSessionsService {
    async fn resolve_session(
        &self,
        access_token: &str,
    ) -> Result<Option<SessionUser>, SessionsServiceError> {
        let access_token = access_token.trim();

        if access_token.is_empty() {
            return Ok(None);
        }

        Ok(self.client.fetch_user(access_token).await?)
    }
}

#[automock]
#[async_trait]
pub trait SessionsService: Send + Sync {
    /// Resolve an access token to the user it was issued for.
    ///
    /// `Ok(None)` means the token is missing, expired or revoked.
    async fn resolve_session(
        &self,
        access_token: &str,
    ) -> Result<Option<SessionUser>, SessionsServiceError>;
}
