//! Health and diagnostic handlers

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("diagnostics"), summary = "Health check endpoint")]
pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Deployment facts. Secrets are reported as configured or not, never echoed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EnvironmentResponse {
    pub service_name: String,
    pub service_version: String,
    pub environment: String,
    pub integrations: IntegrationsResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IntegrationsResponse {
    pub cms_token: bool,
    pub stripe_webhook: bool,
    pub otel: bool,
}

#[endpoint(tags("diagnostics"), summary = "Deployment environment")]
pub(crate) async fn environment(
    depot: &mut Depot,
) -> Result<Json<EnvironmentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let report = &state.environment;

    Ok(Json(EnvironmentResponse {
        service_name: report.service_name.clone(),
        service_version: report.service_version.clone(),
        environment: report.environment.clone(),
        integrations: IntegrationsResponse {
            cms_token: report.cms_token_configured,
            stripe_webhook: state.stripe.is_some(),
            otel: report.otel_enabled,
        },
    }))
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DatabaseResponse {
    /// `ok` or `error`
    pub database: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Round-trips a query to Postgres.
///
/// Answers 503 with the driver's error text when the database is unreachable.
#[endpoint(
    tags("diagnostics"),
    summary = "Database connectivity",
    responses(
        (status_code = StatusCode::OK, description = "Database reachable"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Database unreachable"),
    ),
)]
pub(crate) async fn database(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DatabaseResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    match state.app.diagnostics.ping_database().await {
        Ok(()) => Ok(Json(DatabaseResponse {
            database: "ok".to_string(),
            error: None,
        })),
        Err(source) => {
            warn!("database diagnostic failed: {source}");

            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            Ok(Json(DatabaseResponse {
                database: "error".to_string(),
                error: Some(source.to_string()),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use weshoot_app::diagnostics::MockDiagnosticsService;

    use crate::{
        state::EnvironmentReport,
        test_helpers::{TestState, anonymous_service},
    };

    use super::*;

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let router = Router::new().push(Router::with_path("healthcheck").get(healthcheck));

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn environment_reports_flags_not_secrets() -> TestResult {
        let state = TestState::new()
            .build()
            .with_environment(EnvironmentReport {
                service_name: "weshoot-json".to_string(),
                service_version: "1.2.3".to_string(),
                environment: "staging".to_string(),
                cms_token_configured: true,
                otel_enabled: false,
            })
            .shared();

        let mut res = TestClient::get("http://example.com/diagnostics/env")
            .send(&anonymous_service(
                state,
                Router::with_path("diagnostics/env").get(environment),
            ))
            .await;

        let body: EnvironmentResponse = res.take_json().await?;

        assert_eq!(body.environment, "staging");
        assert!(body.integrations.cms_token);
        assert!(!body.integrations.stripe_webhook);

        Ok(())
    }

    fn database_service(diagnostics: MockDiagnosticsService) -> Service {
        anonymous_service(
            TestState::new().diagnostics(diagnostics).shared(),
            Router::with_path("diagnostics/db").get(database),
        )
    }

    #[tokio::test]
    async fn reachable_database_is_ok() -> TestResult {
        let mut diagnostics = MockDiagnosticsService::new();

        diagnostics
            .expect_ping_database()
            .once()
            .return_once(|| Ok(()));

        let mut res = TestClient::get("http://example.com/diagnostics/db")
            .send(&database_service(diagnostics))
            .await;

        let body: DatabaseResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.database, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_database_is_503_with_detail() -> TestResult {
        let mut diagnostics = MockDiagnosticsService::new();

        diagnostics
            .expect_ping_database()
            .once()
            .return_once(|| Err(sqlx::Error::PoolTimedOut));

        let mut res = TestClient::get("http://example.com/diagnostics/db")
            .send(&database_service(diagnostics))
            .await;

        let body: DatabaseResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));
        assert!(
            body.error.is_some_and(|e| !e.is_empty()),
            "error text is reported"
        );

        Ok(())
    }
}
