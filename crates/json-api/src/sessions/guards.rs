//! Page guards: login redirect, dashboard redirect, JSON 401.

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::json;
use tracing::{error, warn};

use weshoot_app::domain::roles::{Access, RequiredAccess};

use crate::{extensions::*, state::State};

pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const DASHBOARD_PATH: &str = "/dashboard";

/// `/login?redirect=<path>` for the current request.
pub(crate) fn login_location(req: &Request) -> String {
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path(), |pq| pq.as_str());

    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();

    format!("{LOGIN_PATH}?redirect={encoded}")
}

/// Anonymous callers are sent to the login page.
#[salvo::handler]
pub(crate) async fn require_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if depot.session_user().is_none() {
        res.render(Redirect::found(login_location(req)));
        ctrl.skip_rest();
    }
}

/// Anonymous callers of JSON endpoints get `401 {"error": ...}`.
#[salvo::handler]
pub(crate) async fn require_session_json(
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if depot.session_user().is_none() {
        res.status_code(StatusCode::UNAUTHORIZED);
        res.render(Json(json!({ "error": "Devi effettuare l'accesso" })));
        ctrl.skip_rest();
    }
}

/// Admits callers whose roles grant `required`.
///
/// Anonymous callers go to the login page. Signed-in callers without the
/// role, or whose roles could not be read, go to the dashboard.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequireAccess {
    required: RequiredAccess,
}

impl RequireAccess {
    pub(crate) const fn new(required: RequiredAccess) -> Self {
        Self { required }
    }
}

#[salvo::handler]
impl RequireAccess {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let Some(user) = depot.session_user().cloned() else {
            res.render(Redirect::found(login_location(req)));
            ctrl.skip_rest();

            return;
        };

        let state = match depot.obtain::<Arc<State>>() {
            Ok(state) => Arc::clone(state),
            Err(_error) => {
                error!("state missing from depot");
                res.render(StatusError::internal_server_error());
                ctrl.skip_rest();

                return;
            }
        };

        let access = match state.app.roles.access_for(user.uuid).await {
            Ok(access) => access,
            Err(source) => {
                warn!(user = %user.uuid, "failed to load roles, treating as no access: {source}");

                Access::None
            }
        };

        if !access.permits(self.required) {
            res.render(Redirect::found(DASHBOARD_PATH));
            ctrl.skip_rest();
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::LOCATION,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use weshoot_app::domain::roles::{MockRolesService, RolesServiceError};

    use crate::test_helpers::{TEST_USER, inject_session, state_with_roles};

    use super::*;

    #[salvo::handler]
    async fn admitted() -> &'static str {
        "admitted"
    }

    fn location(res: &Response) -> Option<&str> {
        res.headers().get(LOCATION).and_then(|v| v.to_str().ok())
    }

    fn guarded(roles: MockRolesService, required: RequiredAccess, signed_in: bool) -> Service {
        let mut router = Router::new().hoop(inject(state_with_roles(roles)));

        if signed_in {
            router = router.hoop(inject_session);
        }

        Service::new(
            router.push(
                Router::with_path("admin/roles")
                    .hoop(RequireAccess::new(required))
                    .get(admitted),
            ),
        )
    }

    fn roles_returning(result: Result<Access, RolesServiceError>) -> MockRolesService {
        let mut roles = MockRolesService::new();

        roles
            .expect_access_for()
            .once()
            .withf(|user| *user == TEST_USER.uuid)
            .return_once(move |_| result);

        roles.expect_list_role_assignments().never();

        roles
    }

    #[tokio::test]
    async fn anonymous_caller_is_sent_to_login() {
        let mut roles = MockRolesService::new();

        roles.expect_access_for().never();

        let res = TestClient::get("http://example.com/admin/roles?tab=all")
            .send(&guarded(roles, RequiredAccess::Admin, false))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(
            location(&res),
            Some("/login?redirect=%2Fadmin%2Froles%3Ftab%3Dall")
        );
    }

    #[tokio::test]
    async fn caller_without_roles_is_sent_to_dashboard() {
        let res = TestClient::get("http://example.com/admin/roles")
            .send(&guarded(
                roles_returning(Ok(Access::None)),
                RequiredAccess::Admin,
                true,
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res), Some(DASHBOARD_PATH));
    }

    #[tokio::test]
    async fn role_query_error_is_sent_to_dashboard() {
        let res = TestClient::get("http://example.com/admin/roles")
            .send(&guarded(
                roles_returning(Err(RolesServiceError::Sql(sqlx::Error::PoolTimedOut))),
                RequiredAccess::Admin,
                true,
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res), Some(DASHBOARD_PATH));
    }

    #[tokio::test]
    async fn admin_is_refused_super_admin_pages() {
        let res = TestClient::get("http://example.com/admin/roles")
            .send(&guarded(
                roles_returning(Ok(Access::Admin)),
                RequiredAccess::SuperAdmin,
                true,
            ))
            .await;

        assert_eq!(location(&res), Some(DASHBOARD_PATH));
    }

    #[tokio::test]
    async fn super_admin_is_admitted_to_admin_pages() -> TestResult {
        let mut res = TestClient::get("http://example.com/admin/roles")
            .send(&guarded(
                roles_returning(Ok(Access::SuperAdmin)),
                RequiredAccess::Admin,
                true,
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "admitted");

        Ok(())
    }

    #[tokio::test]
    async fn json_guard_answers_401() -> TestResult {
        let service = Service::new(
            Router::with_path("gift-cards/user")
                .hoop(require_session_json)
                .get(admitted),
        );

        let mut res = TestClient::get("http://example.com/gift-cards/user")
            .send(&service)
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert!(body["error"].is_string(), "expected an error message");

        Ok(())
    }
}
