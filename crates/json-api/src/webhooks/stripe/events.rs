//! The slice of a Stripe event this service acts on.

use serde::Deserialize;

use weshoot_app::domain::payments::records::PaymentStatus;

#[derive(Debug, Deserialize)]
pub(super) struct StripeEvent {
    pub(super) id: String,

    #[serde(rename = "type")]
    pub(super) kind: String,

    pub(super) data: StripeEventData,
}

#[derive(Debug, Deserialize)]
pub(super) struct StripeEventData {
    pub(super) object: StripeObject,
}

#[derive(Debug, Deserialize)]
pub(super) struct StripeObject {
    pub(super) id: String,
}

impl StripeEvent {
    /// The payment status this event settles, if it is one we track.
    pub(super) fn payment_status(&self) -> Option<PaymentStatus> {
        match self.kind.as_str() {
            "payment_intent.succeeded" | "checkout.session.completed" => {
                Some(PaymentStatus::Succeeded)
            }
            "payment_intent.payment_failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }
}
