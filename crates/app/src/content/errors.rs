//! Content service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentServiceError {
    #[error("content not found")]
    NotFound,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from the CMS: {0}")]
    Upstream(String),
}
