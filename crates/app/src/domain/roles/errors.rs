//! Roles service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RolesServiceError {
    #[error("storage error")]
    Sql(#[from] Error),
}
