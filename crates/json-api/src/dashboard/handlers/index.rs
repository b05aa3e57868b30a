//! Dashboard Index Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    analytics::DataLayerEvent,
    dashboard::{
        errors::into_status_error,
        responses::{BookingResponse, UserResponse},
    },
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    pub user: UserResponse,

    /// Bookings that have not started yet, soonest first.
    pub upcoming_bookings: Vec<BookingResponse>,

    pub bookings_count: usize,
    pub gift_cards_count: usize,
    pub events: Vec<DataLayerEvent>,
}

/// Dashboard Index Handler
///
/// Summary of the caller's account.
#[endpoint(tags("dashboard"), summary = "Dashboard")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.session_user_or_401()?;

    let (bookings, gift_cards) = tokio::join!(
        state.app.bookings.list_user_bookings(user.uuid),
        state.app.gift_cards.list_user_gift_cards(user.uuid),
    );

    let bookings = bookings.map_err(into_status_error)?;
    let gift_cards = gift_cards.or_500("failed to list user gift cards")?;

    let now = Timestamp::now();
    let bookings_count = bookings.len();

    let mut upcoming: Vec<_> = bookings
        .into_iter()
        .filter(|booking| booking.starts_at > now)
        .collect();

    upcoming.sort_by_key(|booking| booking.starts_at);

    Ok(Json(DashboardResponse {
        user: user.into(),
        upcoming_bookings: upcoming.into_iter().map(Into::into).collect(),
        bookings_count,
        gift_cards_count: gift_cards.len(),
        events: vec![DataLayerEvent::page_view("dashboard", req.uri().path())],
    }))
}
