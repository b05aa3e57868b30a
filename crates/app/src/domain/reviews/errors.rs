//! Reviews service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewsServiceError {
    #[error("storage error")]
    Sql(#[from] Error),
}
