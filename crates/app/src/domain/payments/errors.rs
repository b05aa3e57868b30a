//! Payments service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    #[error("storage error")]
    Sql(#[from] Error),
}
