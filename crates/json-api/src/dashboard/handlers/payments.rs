//! Dashboard Payments Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    analytics::DataLayerEvent, dashboard::responses::PaymentResponse, extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentsResponse {
    pub payments: Vec<PaymentResponse>,
    pub events: Vec<DataLayerEvent>,
}

/// Dashboard Payments Handler
#[endpoint(tags("dashboard"), summary = "My Payments")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PaymentsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.session_user_or_401()?;

    let payments = state
        .app
        .payments
        .list_user_payments(user.uuid)
        .await
        .or_500("failed to list payments")?;

    Ok(Json(PaymentsResponse {
        payments: payments.into_iter().map(Into::into).collect(),
        events: vec![DataLayerEvent::page_view("payments", req.uri().path())],
    }))
}
