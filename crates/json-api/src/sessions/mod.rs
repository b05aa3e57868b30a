//! Session resolution and page guards.

pub(crate) mod guards;
pub(crate) mod middleware;

pub(crate) use guards::{RequireAccess, require_session, require_session_json};
