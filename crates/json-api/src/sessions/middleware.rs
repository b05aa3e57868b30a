//! Session middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::warn;

use crate::{extensions::*, state::State};

/// Resolve the caller's Supabase session, if any, into the depot.
///
/// Never rejects: guards further down decide what an anonymous caller gets.
/// A provider failure is logged and treated as no session.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    if let Some(token) = access_token(req, &state.session_cookie) {
        match state.app.sessions.resolve_session(&token).await {
            Ok(Some(user)) => depot.insert_session_user(user),
            Ok(None) => {}
            Err(source) => warn!("failed to resolve session, continuing anonymously: {source}"),
        }
    }

    ctrl.call_next(req, depot, res).await;
}

/// Bearer header first, then the session cookie.
fn access_token(req: &Request, cookie_name: &str) -> Option<String> {
    bearer_token(req)
        .map(str::to_owned)
        .or_else(|| {
            req.cookie(cookie_name)
                .map(|cookie| cookie.value().trim().to_owned())
        })
        .filter(|token| !token.is_empty())
}

fn bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
}
