//! Apply Gift Card Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use weshoot_app::domain::{
    bookings::records::BookingUuid, gift_cards::data::ApplyGiftCard, users::records::UserUuid,
};

use crate::{
    extensions::*,
    gift_cards::errors::{GiftCardFailure, into_failure},
    observability::record_gift_card_outcome,
    state::State,
};

/// Apply Gift Card Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplyGiftCardRequest {
    pub code: Option<String>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub amount_to_pay: Option<Decimal>,

    pub user_id: Option<String>,

    pub booking_id: Option<String>,
}

impl ApplyGiftCardRequest {
    /// `None` when a required field is absent or an id does not parse.
    fn into_apply(self) -> Option<ApplyGiftCard> {
        let code = self.code.filter(|code| !code.trim().is_empty())?;
        let amount_to_pay = self.amount_to_pay?;
        let user_uuid = self.user_id?.trim().parse::<UserUuid>().ok()?;

        let booking_uuid = match self.booking_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => Some(id.trim().parse::<BookingUuid>().ok()?),
            None => None,
        };

        Some(ApplyGiftCard {
            code,
            amount_to_pay,
            user_uuid,
            booking_uuid,
        })
    }
}

/// Apply Gift Card Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplyGiftCardResponse {
    pub success: bool,

    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[salvo(schema(value_type = Option<f64>))]
    pub discount_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[salvo(schema(value_type = Option<f64>))]
    pub remaining_balance: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApplyGiftCardResponse {
    fn rejected(failure: GiftCardFailure, res: &mut Response) -> Json<Self> {
        record_gift_card_outcome("apply", failure.outcome);

        res.status_code(failure.status);

        Json(Self {
            success: false,
            discount_amount: None,
            remaining_balance: None,
            error: Some(failure.message.to_string()),
        })
    }
}

/// Apply Gift Card Handler
///
/// Takes `min(balance, amountToPay)` off the card and records the application.
#[endpoint(
    tags("gift-cards"),
    summary = "Apply Gift Card",
    responses(
        (status_code = StatusCode::OK, description = "Discount applied"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing data, bad amount or unusable card"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown code"),
        (status_code = StatusCode::CONFLICT, description = "Balance changed concurrently"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Storage failure"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ApplyGiftCardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(apply) = req
        .parse_json::<ApplyGiftCardRequest>()
        .await
        .ok()
        .and_then(ApplyGiftCardRequest::into_apply)
    else {
        return Ok(ApplyGiftCardResponse::rejected(
            GiftCardFailure::missing_data(),
            res,
        ));
    };

    match state
        .app
        .gift_cards
        .apply_gift_card(apply, Timestamp::now())
        .await
    {
        Ok(applied) => {
            record_gift_card_outcome("apply", "applied");

            Ok(Json(ApplyGiftCardResponse {
                success: true,
                discount_amount: Some(applied.discount_amount),
                remaining_balance: Some(applied.remaining_balance),
                error: None,
            }))
        }
        Err(error) => Ok(ApplyGiftCardResponse::rejected(into_failure(error), res)),
    }
}
