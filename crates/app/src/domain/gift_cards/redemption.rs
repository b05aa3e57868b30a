//! Gift card redeemability checks and balance arithmetic.

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::gift_cards::{
    errors::GiftCardRejection,
    records::{GiftCardApplied, GiftCardRecord, GiftCardStatus},
};

/// Monetary amounts are stored with two fractional digits.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to the stored monetary scale.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Check that `card` may be spent at `now`.
///
/// Expiry is reported ahead of other inactivity so an expired card with a
/// stale `active` status still reads as expired.
///
/// # Errors
///
/// Returns the first rejection reason that applies.
pub fn check_redeemable(card: &GiftCardRecord, now: Timestamp) -> Result<(), GiftCardRejection> {
    let past_expiry = card.expires_at.is_some_and(|expires_at| now > expires_at);

    if card.status == GiftCardStatus::Expired || past_expiry {
        return Err(GiftCardRejection::Expired);
    }

    if card.status != GiftCardStatus::Active || card.remaining_balance <= Decimal::ZERO {
        return Err(GiftCardRejection::Invalid);
    }

    Ok(())
}

/// Split `amount_to_pay` against the card balance.
///
/// The amount due is truncated to whole cents, so the discount never exceeds
/// either side and the remaining balance never goes negative.
#[must_use]
pub fn compute_discount(remaining_balance: Decimal, amount_to_pay: Decimal) -> GiftCardApplied {
    let remaining_balance = round_money(remaining_balance);
    let amount_to_pay =
        amount_to_pay.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToZero);
    let discount_amount = remaining_balance.min(amount_to_pay);

    GiftCardApplied {
        discount_amount,
        remaining_balance: remaining_balance - discount_amount,
    }
}
