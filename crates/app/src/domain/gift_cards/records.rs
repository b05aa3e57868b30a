//! Gift Card Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{bookings::records::BookingUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Gift Card UUID
pub type GiftCardUuid = TypedUuid<GiftCardRecord>;

/// Lifecycle status of a gift card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftCardStatus {
    Active,
    Redeemed,
    Expired,
}

impl GiftCardStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Redeemed => "redeemed",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for GiftCardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown gift card status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gift card status: {0}")]
pub struct UnknownGiftCardStatus(pub String);

impl FromStr for GiftCardStatus {
    type Err = UnknownGiftCardStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "redeemed" => Ok(Self::Redeemed),
            "expired" => Ok(Self::Expired),
            other => Err(UnknownGiftCardStatus(other.to_string())),
        }
    }
}

/// Gift Card Record
#[derive(Debug, Clone, PartialEq)]
pub struct GiftCardRecord {
    pub uuid: GiftCardUuid,
    pub code: String,
    pub original_balance: Decimal,
    pub remaining_balance: Decimal,
    pub currency: String,
    pub status: GiftCardStatus,
    pub expires_at: Option<Timestamp>,
    pub purchaser_user_uuid: Option<UserUuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl GiftCardRecord {
    /// The fields safe to hand to an anonymous caller.
    #[must_use]
    pub fn public(&self) -> PublicGiftCard {
        PublicGiftCard {
            code: self.code.clone(),
            remaining_balance: self.remaining_balance,
            expires_at: self.expires_at,
        }
    }
}

/// Public view of a validated gift card.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicGiftCard {
    pub code: String,
    pub remaining_balance: Decimal,
    pub expires_at: Option<Timestamp>,
}

/// Gift Card Application UUID
pub type GiftCardApplicationUuid = TypedUuid<GiftCardApplicationRecord>;

/// Append-only record of a discount taken from a gift card.
#[derive(Debug, Clone, PartialEq)]
pub struct GiftCardApplicationRecord {
    pub uuid: GiftCardApplicationUuid,
    pub gift_card_uuid: GiftCardUuid,
    pub user_uuid: UserUuid,
    pub booking_uuid: Option<BookingUuid>,
    pub discount_amount: Decimal,
    pub remaining_balance: Decimal,
    pub applied_at: Timestamp,
}

/// Outcome of a successful application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiftCardApplied {
    pub discount_amount: Decimal,
    pub remaining_balance: Decimal,
}
