//! Content Page Handlers

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use weshoot_app::content::records::{ContentKind, ContentPage};

use crate::{content::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContentPageResponse {
    /// `tour`, `course` or `destination`
    pub kind: String,

    pub slug: String,
    pub title: String,
    pub summary: Option<String>,

    /// Rich text as delivered by the CMS.
    pub body: Option<String>,

    pub hero_image: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl ContentPageResponse {
    fn new(kind: ContentKind, page: ContentPage) -> Self {
        let (seo_title, seo_description) = page
            .seo
            .map_or((None, None), |seo| (seo.title, seo.description));

        Self {
            kind: kind.to_string(),
            slug: page.slug,
            title: page.title,
            summary: page.summary,
            body: page.body,
            hero_image: page.hero_image,
            seo_title,
            seo_description,
        }
    }
}

async fn fetch_page(
    kind: ContentKind,
    slug: &str,
    depot: &Depot,
) -> Result<Json<ContentPageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = state
        .app
        .content
        .fetch_page(kind, slug)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ContentPageResponse::new(kind, page)))
}

/// Tour Page Handler
#[endpoint(tags("content"), summary = "Tour Page")]
pub(crate) async fn tour(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ContentPageResponse>, StatusError> {
    fetch_page(ContentKind::Tour, &slug.into_inner(), depot).await
}

/// Course Page Handler
#[endpoint(tags("content"), summary = "Course Page")]
pub(crate) async fn course(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ContentPageResponse>, StatusError> {
    fetch_page(ContentKind::Course, &slug.into_inner(), depot).await
}

/// Destination Page Handler
#[endpoint(tags("content"), summary = "Destination Page")]
pub(crate) async fn destination(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ContentPageResponse>, StatusError> {
    fetch_page(ContentKind::Destination, &slug.into_inner(), depot).await
}
