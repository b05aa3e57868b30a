//! List User Gift Cards Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, gift_cards::responses::GiftCardSummary, state::State};

/// User Gift Cards Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserGiftCardsResponse {
    pub gift_cards: Vec<GiftCardSummary>,
}

/// List User Gift Cards Handler
///
/// Cards bought by the signed-in caller.
#[endpoint(
    tags("gift-cards"),
    summary = "List My Gift Cards",
    responses(
        (status_code = StatusCode::OK, description = "Caller's gift cards"),
        (status_code = StatusCode::UNAUTHORIZED, description = "No session"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Storage failure"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserGiftCardsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.session_user_or_401()?;

    let cards = state
        .app
        .gift_cards
        .list_user_gift_cards(user.uuid)
        .await
        .or_500("failed to list user gift cards")?;

    Ok(Json(UserGiftCardsResponse {
        gift_cards: cards.into_iter().map(Into::into).collect(),
    }))
}
