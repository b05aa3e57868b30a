//! Stripe webhook: signature verification and payment status updates.

mod events;
#[path = "handler.rs"]
mod handlers;
mod signature;

pub(crate) use handlers::handler;

/// Signing secret and replay window for the Stripe endpoint.
#[derive(Clone)]
pub(crate) struct StripeWebhookSettings {
    pub(crate) secret: String,
    pub(crate) tolerance_seconds: u64,
}

impl std::fmt::Debug for StripeWebhookSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeWebhookSettings")
            .field("secret", &"<redacted>")
            .field("tolerance_seconds", &self.tolerance_seconds)
            .finish()
    }
}
