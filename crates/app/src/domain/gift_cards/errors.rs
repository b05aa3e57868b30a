//! Gift cards service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Why a code failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GiftCardRejection {
    #[error("gift card not found")]
    NotFound,

    #[error("gift card expired")]
    Expired,

    #[error("gift card not active or exhausted")]
    Invalid,
}

#[derive(Debug, Error)]
pub enum GiftCardsServiceError {
    #[error("missing required data")]
    InsufficientData,

    #[error("amount to pay must be positive")]
    InvalidAmount,

    #[error("validation failed: {0}")]
    ValidationFailed(#[from] GiftCardRejection),

    #[error("gift card balance changed concurrently")]
    BalanceChanged,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for GiftCardsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::ValidationFailed(GiftCardRejection::NotFound);
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
