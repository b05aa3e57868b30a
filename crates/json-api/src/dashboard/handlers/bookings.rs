//! Dashboard Bookings Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    analytics::DataLayerEvent,
    dashboard::{errors::into_status_error, responses::BookingResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingsResponse {
    pub bookings: Vec<BookingResponse>,
    pub events: Vec<DataLayerEvent>,
}

/// Dashboard Bookings Handler
///
/// The caller's bookings, latest start first.
#[endpoint(tags("dashboard"), summary = "My Bookings")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<BookingsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.session_user_or_401()?;

    let bookings = state
        .app
        .bookings
        .list_user_bookings(user.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(BookingsResponse {
        bookings: bookings.into_iter().map(Into::into).collect(),
        events: vec![DataLayerEvent::page_view("bookings", req.uri().path())],
    }))
}
