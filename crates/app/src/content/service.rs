//! Content service.

use async_trait::async_trait;
use mockall::automock;

use crate::content::{
    CmsClient, ContentServiceError,
    records::{ContentKind, ContentPage},
};

#[derive(Debug, Clone)]
pub struct CmsContentService {
    client: CmsClient,
}

impl CmsContentService {
    #[must_use]
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentService for CmsContentService {
    async fn fetch_page(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<ContentPage, ContentServiceError> {
        self.client.fetch_page(kind, slug).await
    }
}

#[automock]
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Fetch a published page by kind and slug.
    async fn fetch_page(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<ContentPage, ContentServiceError>;
}
