//! Gift card listing responses shared by the JSON and dashboard pages.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use weshoot_app::domain::gift_cards::records::GiftCardRecord;

/// A gift card as shown to its purchaser or to staff.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct GiftCardSummary {
    pub code: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub original_balance: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub remaining_balance: Decimal,

    pub currency: String,

    /// `active`, `redeemed` or `expired`
    pub status: String,

    pub expires_at: Option<String>,

    pub created_at: String,
}

impl From<GiftCardRecord> for GiftCardSummary {
    fn from(card: GiftCardRecord) -> Self {
        Self {
            code: card.code,
            original_balance: card.original_balance,
            remaining_balance: card.remaining_balance,
            currency: card.currency,
            status: card.status.to_string(),
            expires_at: card.expires_at.map(|at| at.to_string()),
            created_at: card.created_at.to_string(),
        }
    }
}
