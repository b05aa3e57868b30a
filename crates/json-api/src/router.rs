//! App Router

use salvo::Router;

use weshoot_app::domain::roles::RequiredAccess;

use crate::{
    admin, content, dashboard, diagnostics, gift_cards,
    sessions::{self, RequireAccess, require_session, require_session_json},
    webhooks,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(diagnostics::healthcheck))
        .push(
            Router::with_path("diagnostics")
                .push(Router::with_path("env").get(diagnostics::environment))
                .push(Router::with_path("db").get(diagnostics::database)),
        )
        .push(Router::with_path("webhooks/stripe").post(webhooks::stripe::handler))
        .push(
            Router::new()
                .hoop(sessions::middleware::handler)
                .push(gift_cards_router())
                .push(dashboard_router())
                .push(admin_router())
                .push(Router::with_path("tours/{slug}").get(content::handlers::tour))
                .push(Router::with_path("courses/{slug}").get(content::handlers::course))
                .push(
                    Router::with_path("destinations/{slug}").get(content::handlers::destination),
                ),
        )
}

fn gift_cards_router() -> Router {
    Router::with_path("gift-cards")
        .push(Router::with_path("validate").post(gift_cards::validate::handler))
        .push(Router::with_path("apply").post(gift_cards::apply::handler))
        .push(
            Router::with_path("user")
                .hoop(require_session_json)
                .get(gift_cards::user::handler),
        )
}

fn dashboard_router() -> Router {
    Router::with_path("dashboard")
        .hoop(require_session)
        .get(dashboard::index::handler)
        .push(
            Router::with_path("bookings")
                .get(dashboard::bookings::handler)
                .push(
                    Router::with_path("{booking}/confirmation")
                        .get(dashboard::confirmation::handler),
                ),
        )
        .push(Router::with_path("reviews").get(dashboard::reviews::handler))
        .push(Router::with_path("payments").get(dashboard::payments::handler))
        .push(Router::with_path("gift-cards").get(dashboard::gift_cards::handler))
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .push(
            Router::with_path("roles")
                .hoop(RequireAccess::new(RequiredAccess::SuperAdmin))
                .get(admin::roles::handler),
        )
        .push(
            Router::new()
                .hoop(RequireAccess::new(RequiredAccess::Admin))
                .get(admin::index::handler)
                .push(Router::with_path("gift-cards").get(admin::gift_cards::handler)),
        )
}
