//! CMS Content Pages

pub(crate) mod errors;
pub(crate) mod handlers;
