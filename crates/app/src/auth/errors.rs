//! Sessions service errors.

use thiserror::Error;

use crate::auth::SupabaseError;

#[derive(Debug, Error)]
pub enum SessionsServiceError {
    #[error("identity provider error")]
    Provider(#[from] SupabaseError),
}
