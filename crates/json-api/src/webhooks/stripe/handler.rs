//! Stripe Webhook Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    extensions::*,
    state::State,
    webhooks::stripe::{events::StripeEvent, signature},
};

const SIGNATURE_HEADER: &str = "stripe-signature";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WebhookAck {
    pub received: bool,
}

/// Stripe Webhook Handler
///
/// Verifies the signature over the raw body, then settles the matching payment.
#[endpoint(
    tags("webhooks"),
    summary = "Stripe Webhook",
    responses(
        (status_code = StatusCode::OK, description = "Event received"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad signature or payload"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "No signing secret configured"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<WebhookAck>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(settings) = state.stripe.as_ref() else {
        warn!("stripe webhook called without a signing secret configured");

        return Err(StatusError::service_unavailable().brief("Webhook non configurato"));
    };

    let header = req
        .headers()
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let payload = req
        .payload()
        .await
        .map_err(|_ignored| StatusError::bad_request().brief("Payload non valido"))?
        .clone();

    signature::verify(
        &settings.secret,
        header.as_deref(),
        &payload,
        settings.tolerance_seconds,
        Timestamp::now().as_second(),
    )
    .map_err(|error| {
        warn!("rejected stripe webhook: {error}");

        StatusError::bad_request().brief("Firma non valida")
    })?;

    let event: StripeEvent = serde_json::from_slice(&payload).map_err(|error| {
        warn!("unparseable stripe event: {error}");

        StatusError::bad_request().brief("Payload non valido")
    })?;

    let Some(status) = event.payment_status() else {
        info!(event = %event.id, kind = %event.kind, "ignoring stripe event");

        return Ok(Json(WebhookAck { received: true }));
    };

    let updated = state
        .app
        .payments
        .mark_payment_status(&event.data.object.id, status)
        .await
        .or_500("failed to update payment status")?;

    if !updated {
        info!(
            event = %event.id,
            reference = %event.data.object.id,
            "no updatable payment for stripe event"
        );
    }

    Ok(Json(WebhookAck { received: true }))
}
