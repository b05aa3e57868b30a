//! Dashboard Reviews Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    analytics::DataLayerEvent, dashboard::responses::ReviewResponse, extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    pub reviews: Vec<ReviewResponse>,
    pub events: Vec<DataLayerEvent>,
}

/// Dashboard Reviews Handler
#[endpoint(tags("dashboard"), summary = "My Reviews")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.session_user_or_401()?;

    let reviews = state
        .app
        .reviews
        .list_user_reviews(user.uuid)
        .await
        .or_500("failed to list reviews")?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
        events: vec![DataLayerEvent::page_view("reviews", req.uri().path())],
    }))
}
