//! Page data rows shared by the dashboard and admin pages.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use weshoot_app::domain::{
    bookings::records::BookingRecord, payments::records::PaymentRecord,
    reviews::records::ReviewRecord, users::records::SessionUser,
};

/// The signed-in caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub uuid: Uuid,
    pub email: Option<String>,
}

impl From<&SessionUser> for UserResponse {
    fn from(user: &SessionUser) -> Self {
        Self {
            uuid: user.uuid.into(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingResponse {
    pub uuid: Uuid,

    /// `tour` or `course`
    pub product_kind: String,

    pub product_slug: String,
    pub title: String,
    pub starts_at: String,

    /// `pending`, `confirmed` or `cancelled`
    pub status: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_amount: Decimal,

    pub currency: String,
    pub created_at: String,
}

impl From<BookingRecord> for BookingResponse {
    fn from(booking: BookingRecord) -> Self {
        Self {
            uuid: booking.uuid.into(),
            product_kind: booking.product_kind.to_string(),
            product_slug: booking.product_slug,
            title: booking.title,
            starts_at: booking.starts_at.to_string(),
            status: booking.status.to_string(),
            total_amount: booking.total_amount,
            currency: booking.currency,
            created_at: booking.created_at.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub uuid: Uuid,
    pub booking_uuid: Option<Uuid>,

    /// 1 to 5
    pub rating: u8,

    pub body: String,
    pub created_at: String,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(review: ReviewRecord) -> Self {
        Self {
            uuid: review.uuid.into(),
            booking_uuid: review.booking_uuid.map(Into::into),
            rating: review.rating,
            body: review.body,
            created_at: review.created_at.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentResponse {
    pub uuid: Uuid,
    pub booking_uuid: Option<Uuid>,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub amount: Decimal,

    pub currency: String,

    /// `pending`, `succeeded` or `failed`
    pub status: String,

    pub created_at: String,
}

impl From<PaymentRecord> for PaymentResponse {
    fn from(payment: PaymentRecord) -> Self {
        Self {
            uuid: payment.uuid.into(),
            booking_uuid: payment.booking_uuid.map(Into::into),
            amount: payment.amount,
            currency: payment.currency,
            status: payment.status.to_string(),
            created_at: payment.created_at.to_string(),
        }
    }
}
