//! Gift Card Data

use rust_decimal::Decimal;

use crate::domain::{
    bookings::records::BookingUuid,
    gift_cards::records::{GiftCardApplicationUuid, GiftCardUuid},
    users::records::UserUuid,
};

/// Request to spend a gift card against an amount due.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyGiftCard {
    pub code: String,
    pub amount_to_pay: Decimal,
    pub user_uuid: UserUuid,
    pub booking_uuid: Option<BookingUuid>,
}

/// New Gift Card Application Data
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewGiftCardApplication {
    pub uuid: GiftCardApplicationUuid,
    pub gift_card_uuid: GiftCardUuid,
    pub user_uuid: UserUuid,
    pub booking_uuid: Option<BookingUuid>,
    pub discount_amount: Decimal,
    pub remaining_balance: Decimal,
}
