//! Booking Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Booking UUID
pub type BookingUuid = TypedUuid<BookingRecord>;

/// What was booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Tour,
    Course,
}

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown booking value: {0}")]
pub struct UnknownBookingValue(pub String);

impl ProductKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tour => "tour",
            Self::Course => "course",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = UnknownBookingValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tour" => Ok(Self::Tour),
            "course" => Ok(Self::Course),
            other => Err(UnknownBookingValue(other.to_string())),
        }
    }
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownBookingValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownBookingValue(other.to_string())),
        }
    }
}

/// Booking Record
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub uuid: BookingUuid,
    pub user_uuid: UserUuid,
    pub product_kind: ProductKind,
    pub product_slug: String,
    pub title: String,
    pub starts_at: Timestamp,
    pub status: BookingStatus,
    pub total_amount: Decimal,
    pub currency: String,
    pub created_at: Timestamp,
}
