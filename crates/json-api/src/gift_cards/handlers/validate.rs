//! Validate Gift Card Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use weshoot_app::domain::gift_cards::records::PublicGiftCard;

use crate::{
    extensions::*,
    gift_cards::errors::{GiftCardFailure, into_failure},
    observability::record_gift_card_outcome,
    state::State,
};

/// Validate Gift Card Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidateGiftCardRequest {
    pub code: Option<String>,
}

/// Public fields of a spendable card.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidatedGiftCard {
    pub code: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub remaining_balance: Decimal,

    pub expires_at: Option<String>,
}

impl From<PublicGiftCard> for ValidatedGiftCard {
    fn from(card: PublicGiftCard) -> Self {
        Self {
            code: card.code,
            remaining_balance: card.remaining_balance,
            expires_at: card.expires_at.map(|at| at.to_string()),
        }
    }
}

/// Validate Gift Card Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateGiftCardResponse {
    pub valid: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<ValidatedGiftCard>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidateGiftCardResponse {
    fn rejected(failure: GiftCardFailure, res: &mut Response) -> Json<Self> {
        record_gift_card_outcome("validate", failure.outcome);

        res.status_code(failure.status);

        Json(Self {
            valid: false,
            gift_card: None,
            error: Some(failure.message.to_string()),
        })
    }
}

/// Validate Gift Card Handler
///
/// Checks that a code exists and can be spent now. Never writes.
#[endpoint(
    tags("gift-cards"),
    summary = "Validate Gift Card",
    responses(
        (status_code = StatusCode::OK, description = "Card is spendable"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing code, expired or exhausted card"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown code"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ValidateGiftCardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(code) = req
        .parse_json::<ValidateGiftCardRequest>()
        .await
        .ok()
        .and_then(|body| body.code)
        .filter(|code| !code.trim().is_empty())
    else {
        return Ok(ValidateGiftCardResponse::rejected(
            GiftCardFailure::missing_data(),
            res,
        ));
    };

    match state
        .app
        .gift_cards
        .validate_gift_card(&code, Timestamp::now())
        .await
    {
        Ok(card) => {
            record_gift_card_outcome("validate", "valid");

            Ok(Json(ValidateGiftCardResponse {
                valid: true,
                gift_card: Some(card.into()),
                error: None,
            }))
        }
        Err(error) => Ok(ValidateGiftCardResponse::rejected(into_failure(error), res)),
    }
}
