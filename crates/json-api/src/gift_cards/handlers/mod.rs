//! Gift Card Handlers

pub(crate) mod apply;
pub(crate) mod user;
pub(crate) mod validate;
