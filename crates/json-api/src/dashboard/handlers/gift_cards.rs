//! Dashboard Gift Cards Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    analytics::DataLayerEvent, extensions::*, gift_cards::responses::GiftCardSummary,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardGiftCardsResponse {
    pub gift_cards: Vec<GiftCardSummary>,
    pub events: Vec<DataLayerEvent>,
}

/// Dashboard Gift Cards Handler
#[endpoint(tags("dashboard"), summary = "My Gift Cards")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DashboardGiftCardsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.session_user_or_401()?;

    let cards = state
        .app
        .gift_cards
        .list_user_gift_cards(user.uuid)
        .await
        .or_500("failed to list user gift cards")?;

    Ok(Json(DashboardGiftCardsResponse {
        gift_cards: cards.into_iter().map(Into::into).collect(),
        events: vec![DataLayerEvent::page_view("gift_cards", req.uri().path())],
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use weshoot_app::domain::gift_cards::MockGiftCardsService;

    use crate::{
        gift_cards::responses::fixtures::make_gift_card,
        sessions::require_session,
        test_helpers::{TEST_USER, TestState, anonymous_service, signed_in_service},
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("dashboard/gift-cards")
            .hoop(require_session)
            .get(handler)
    }

    #[tokio::test]
    async fn lists_caller_gift_cards() -> TestResult {
        let mut gift_cards = MockGiftCardsService::new();

        gift_cards
            .expect_list_user_gift_cards()
            .once()
            .withf(|user| *user == TEST_USER.uuid)
            .return_once(|_| Ok(vec![make_gift_card("WS-REGALO")]));

        let mut res = TestClient::get("http://example.com/dashboard/gift-cards")
            .send(&signed_in_service(
                TestState::new().gift_cards(gift_cards).shared(),
                route(),
            ))
            .await;

        let body: DashboardGiftCardsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.gift_cards.first().map(|card| card.code.as_str()),
            Some("WS-REGALO")
        );

        Ok(())
    }

    #[tokio::test]
    async fn anonymous_caller_is_sent_to_login() {
        let res = TestClient::get("http://example.com/dashboard/gift-cards")
            .send(&anonymous_service(TestState::new().shared(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
    }
}
