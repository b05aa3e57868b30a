//! Content Config

use clap::Args;

/// Headless CMS settings.
#[derive(Debug, Args)]
pub struct ContentConfig {
    /// CMS GraphQL endpoint
    #[arg(long, env = "CMS_GRAPHQL_URL")]
    pub cms_graphql_url: String,

    /// CMS content API token
    #[arg(long, env = "CMS_API_TOKEN", hide_env_values = true)]
    pub cms_api_token: Option<String>,
}
