//! Data-layer events embedded in dashboard page data.
//!
//! The browser pushes each event onto `window.dataLayer`. A purchase carries a
//! `dedupe_key`; the browser records it in session storage and skips any
//! event whose key it has already seen.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use weshoot_app::domain::{bookings::records::BookingRecord, payments::records::PaymentRecord};

const DEDUPE_KEY_PREFIX: &str = "weshoot:purchase:";

/// One purchased line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct PurchaseItem {
    pub item_id: String,
    pub item_name: String,
    pub item_category: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub quantity: u32,
}

/// An event for the tag manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "event", rename_all = "snake_case")]
pub(crate) enum DataLayerEvent {
    PageView {
        page_type: String,
        page_path: String,
    },
    Purchase {
        transaction_id: String,

        #[serde(with = "rust_decimal::serde::float")]
        #[salvo(schema(value_type = f64))]
        value: Decimal,

        currency: String,
        items: Vec<PurchaseItem>,
        dedupe_key: String,
    },
}

impl DataLayerEvent {
    pub(crate) fn page_view(page_type: &str, page_path: &str) -> Self {
        Self::PageView {
            page_type: page_type.to_string(),
            page_path: page_path.to_string(),
        }
    }

    /// A purchase for `booking` settled by `payment`.
    pub(crate) fn purchase(booking: &BookingRecord, payment: &PaymentRecord) -> Self {
        let transaction_id = payment.transaction_id();

        Self::Purchase {
            dedupe_key: format!("{DEDUPE_KEY_PREFIX}{transaction_id}"),
            transaction_id,
            value: payment.amount,
            currency: payment.currency.clone(),
            items: vec![PurchaseItem {
                item_id: booking.product_slug.clone(),
                item_name: booking.title.clone(),
                item_category: booking.product_kind.to_string(),
                price: booking.total_amount,
                quantity: 1,
            }],
        }
    }
}
