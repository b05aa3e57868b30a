//! Gift Card Errors

use salvo::http::StatusCode;
use tracing::error;

use weshoot_app::domain::gift_cards::{GiftCardRejection, GiftCardsServiceError};

/// A failed validate/apply call, as the storefront expects to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GiftCardFailure {
    pub(crate) status: StatusCode,
    pub(crate) message: &'static str,
    /// Metric label.
    pub(crate) outcome: &'static str,
}

impl GiftCardFailure {
    const fn new(status: StatusCode, message: &'static str, outcome: &'static str) -> Self {
        Self {
            status,
            message,
            outcome,
        }
    }

    pub(crate) const fn missing_data() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Dati mancanti", "insufficient_data")
    }
}

pub(crate) fn into_failure(error: GiftCardsServiceError) -> GiftCardFailure {
    match error {
        GiftCardsServiceError::InsufficientData => GiftCardFailure::missing_data(),
        GiftCardsServiceError::InvalidAmount => GiftCardFailure::new(
            StatusCode::BAD_REQUEST,
            "Importo non valido",
            "invalid_amount",
        ),
        GiftCardsServiceError::ValidationFailed(GiftCardRejection::NotFound) => {
            GiftCardFailure::new(StatusCode::NOT_FOUND, "Gift card non trovata", "not_found")
        }
        GiftCardsServiceError::ValidationFailed(GiftCardRejection::Expired) => {
            GiftCardFailure::new(StatusCode::BAD_REQUEST, "Gift card scaduta", "expired")
        }
        GiftCardsServiceError::ValidationFailed(GiftCardRejection::Invalid) => {
            GiftCardFailure::new(
                StatusCode::BAD_REQUEST,
                "Gift card non valida o già utilizzata",
                "invalid",
            )
        }
        GiftCardsServiceError::BalanceChanged => GiftCardFailure::new(
            StatusCode::CONFLICT,
            "Il saldo della gift card è cambiato, riprova",
            "balance_changed",
        ),
        GiftCardsServiceError::InvalidData => {
            error!("gift card write violated a constraint");

            persistence_failure()
        }
        GiftCardsServiceError::Sql(source) => {
            error!("gift card storage error: {source}");

            persistence_failure()
        }
    }
}

const fn persistence_failure() -> GiftCardFailure {
    GiftCardFailure::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Errore durante l'elaborazione della gift card",
        "persistence_error",
    )
}
