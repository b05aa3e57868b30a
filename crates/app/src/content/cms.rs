//! GraphQL client for the headless CMS.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::content::{
    ContentServiceError,
    records::{ContentKind, ContentPage},
};

const PAGE_FIELDS: &str = "slug title summary body heroImage { url } seo { title description }";

/// Configuration for connecting to the CMS.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,

    /// Bearer token for the content API, if the project requires one.
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CmsClient {
    config: CmsConfig,
    http: Client,
}

impl CmsClient {
    #[must_use]
    pub fn new(config: CmsConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch one entry by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ContentServiceError::NotFound`] for a `null` entry, and an
    /// upstream error for transport failures or GraphQL errors.
    pub async fn fetch_page(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<ContentPage, ContentServiceError> {
        let mut request = self
            .http
            .post(&self.config.endpoint)
            .json(&page_request(kind, slug));

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(ContentServiceError::Upstream(format!(
                "query failed with status {status}: {text}"
            )));
        }

        let body: GraphQlResponse = response.json().await?;

        parse_page(kind, body)
    }
}

pub(crate) fn page_request(kind: ContentKind, slug: &str) -> Value {
    let query = format!(
        "query Page($slug: String!) {{ {kind}(where: {{ slug: $slug }}) {{ {PAGE_FIELDS} }} }}"
    );

    json!({ "query": query, "variables": { "slug": slug } })
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,

    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

pub(crate) fn parse_page(
    kind: ContentKind,
    response: GraphQlResponse,
) -> Result<ContentPage, ContentServiceError> {
    if !response.errors.is_empty() {
        let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();

        return Err(ContentServiceError::Upstream(messages.join("; ")));
    }

    let entry = response
        .data
        .and_then(|mut data| data.remove(kind.as_str()))
        .unwrap_or(Value::Null);

    if entry.is_null() {
        return Err(ContentServiceError::NotFound);
    }

    serde_json::from_value(entry).map_err(|e| ContentServiceError::Upstream(e.to_string()))
}
