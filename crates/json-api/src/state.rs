//! State

use std::sync::Arc;

use weshoot_app::context::AppContext;

use crate::webhooks::stripe::StripeWebhookSettings;

/// What `/diagnostics/env` reports about this deployment.
#[derive(Debug, Clone, Default)]
pub(crate) struct EnvironmentReport {
    pub(crate) service_name: String,
    pub(crate) service_version: String,
    pub(crate) environment: String,
    pub(crate) cms_token_configured: bool,
    pub(crate) otel_enabled: bool,
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Cookie that carries the Supabase access token.
    pub(crate) session_cookie: String,

    /// `None` when no signing secret is configured.
    pub(crate) stripe: Option<StripeWebhookSettings>,

    pub(crate) environment: EnvironmentReport,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, session_cookie: impl Into<String>) -> Self {
        Self {
            app,
            session_cookie: session_cookie.into(),
            stripe: None,
            environment: EnvironmentReport::default(),
        }
    }

    #[must_use]
    pub(crate) fn with_stripe(mut self, stripe: Option<StripeWebhookSettings>) -> Self {
        self.stripe = stripe;
        self
    }

    #[must_use]
    pub(crate) fn with_environment(mut self, environment: EnvironmentReport) -> Self {
        self.environment = environment;
        self
    }

    #[must_use]
    pub(crate) fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
