//! Booking Confirmation Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use weshoot_app::domain::bookings::records::BookingUuid;

use crate::{
    analytics::DataLayerEvent,
    dashboard::{errors::into_status_error, responses::BookingResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConfirmationResponse {
    pub booking: BookingResponse,
    pub events: Vec<DataLayerEvent>,
}

/// Booking Confirmation Handler
///
/// Includes a `purchase` event once the booking has a settled payment.
#[endpoint(
    tags("dashboard"),
    summary = "Booking Confirmation",
    responses(
        (status_code = StatusCode::OK, description = "Booking and analytics events"),
        (status_code = StatusCode::NOT_FOUND, description = "Not the caller's booking"),
    ),
)]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ConfirmationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.session_user_or_401()?;
    let booking_uuid = BookingUuid::from_uuid(booking.into_inner());

    let booking = state
        .app
        .bookings
        .get_user_booking(user.uuid, booking_uuid)
        .await
        .map_err(into_status_error)?;

    let mut events = vec![DataLayerEvent::page_view(
        "booking_confirmation",
        req.uri().path(),
    )];

    match state
        .app
        .payments
        .get_booking_payment(user.uuid, booking_uuid)
        .await
    {
        Ok(Some(payment)) => events.push(DataLayerEvent::purchase(&booking, &payment)),
        Ok(None) => {}
        Err(source) => {
            warn!(booking = %booking_uuid, "skipping purchase event, payment lookup failed: {source}");
        }
    }

    Ok(Json(ConfirmationResponse {
        booking: booking.into(),
        events,
    }))
}
