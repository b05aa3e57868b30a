//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{SessionsService, SupabaseAuthClient, SupabaseConfig, SupabaseSessionsService},
    content::{CmsClient, CmsConfig, CmsContentService, ContentService},
    database::{self, Db},
    diagnostics::{DiagnosticsService, PgDiagnosticsService},
    domain::{
        bookings::{BookingsService, PgBookingsService},
        gift_cards::{GiftCardsService, PgGiftCardsService},
        payments::{PaymentsService, PgPaymentsService},
        reviews::{PgReviewsService, ReviewsService},
        roles::{PgRolesService, RolesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub gift_cards: Arc<dyn GiftCardsService>,
    pub sessions: Arc<dyn SessionsService>,
    pub roles: Arc<dyn RolesService>,
    pub bookings: Arc<dyn BookingsService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub payments: Arc<dyn PaymentsService>,
    pub content: Arc<dyn ContentService>,
    pub diagnostics: Arc<dyn DiagnosticsService>,
}

impl AppContext {
    /// Build application context from a database URL and the external
    /// integrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        max_connections: u32,
        supabase: SupabaseConfig,
        cms: CmsConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            gift_cards: Arc::new(PgGiftCardsService::new(db.clone())),
            sessions: Arc::new(SupabaseSessionsService::new(SupabaseAuthClient::new(
                supabase,
            ))),
            roles: Arc::new(PgRolesService::new(db.clone())),
            bookings: Arc::new(PgBookingsService::new(db.clone())),
            reviews: Arc::new(PgReviewsService::new(db.clone())),
            payments: Arc::new(PgPaymentsService::new(db.clone())),
            content: Arc::new(CmsContentService::new(CmsClient::new(cms))),
            diagnostics: Arc::new(PgDiagnosticsService::new(db)),
        })
    }
}
