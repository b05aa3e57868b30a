//! Admin Gift Cards Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, gift_cards::responses::GiftCardSummary, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminGiftCardsResponse {
    pub gift_cards: Vec<GiftCardSummary>,
}

/// Admin Gift Cards Handler
///
/// Every card, including exhausted and expired ones.
#[endpoint(tags("admin"), summary = "All Gift Cards")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<AdminGiftCardsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cards = state
        .app
        .gift_cards
        .list_gift_cards()
        .await
        .or_500("failed to list gift cards")?;

    Ok(Json(AdminGiftCardsResponse {
        gift_cards: cards.into_iter().map(Into::into).collect(),
    }))
}
