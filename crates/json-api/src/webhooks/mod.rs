//! Webhooks

pub(crate) mod stripe;
