//! WeShoot JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use weshoot_app::{auth::SupabaseConfig, content::CmsConfig, context::AppContext};

use crate::{
    config::ServerConfig,
    observability::{Observability, metrics_handler, request_logging},
    router::app_router,
    state::{EnvironmentReport, State},
    webhooks::stripe::StripeWebhookSettings,
};

mod admin;
mod analytics;
mod config;
mod content;
mod dashboard;
mod diagnostics;
mod extensions;
mod gift_cards;
mod observability;
mod router;
mod sessions;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod webhooks;

/// WeShoot JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "tracing subscriber failed to install, nothing else can report this"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let environment = EnvironmentReport {
        service_name: config.observability.otel_service_name.clone(),
        service_version: config.observability.otel_service_version.clone(),
        environment: config.observability.otel_deployment_environment.clone(),
        cms_token_configured: config.content.cms_api_token.is_some(),
        otel_enabled: config.observability.otel_enabled,
    };

    let stripe = config
        .payments
        .stripe_webhook_secret
        .map(|secret| StripeWebhookSettings {
            secret,
            tolerance_seconds: config.payments.stripe_webhook_tolerance_seconds,
        });

    let supabase = SupabaseConfig {
        url: config.auth.supabase_url,
        anon_key: config.auth.supabase_anon_key,
    };

    let cms = CmsConfig {
        endpoint: config.content.cms_graphql_url,
        token: config.content.cms_api_token,
    };

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.database_max_connections,
        supabase,
        cms,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let state = State::new(app, config.auth.session_cookie_name)
        .with_stripe(stripe)
        .with_environment(environment)
        .shared();

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(app_router());

    let doc = OpenApi::new("WeShoot API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    observability.shutdown();
}
