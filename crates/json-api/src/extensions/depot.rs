//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use weshoot_app::domain::users::records::SessionUser;

const SESSION_USER_DEPOT_KEY: &str = "session_user";

/// Helpers for depot extraction and the resolved session.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_session_user(&mut self, user: SessionUser);

    fn session_user(&self) -> Option<&SessionUser>;

    /// The resolved session, for handlers mounted behind a session guard.
    fn session_user_or_401(&self) -> Result<&SessionUser, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session_user(&mut self, user: SessionUser) {
        self.insert(SESSION_USER_DEPOT_KEY, user);
    }

    fn session_user(&self) -> Option<&SessionUser> {
        self.get::<SessionUser>(SESSION_USER_DEPOT_KEY).ok()
    }

    fn session_user_or_401(&self) -> Result<&SessionUser, StatusError> {
        self.session_user()
            .ok_or_else(|| StatusError::unauthorized().brief("Sessione non valida"))
    }
}
