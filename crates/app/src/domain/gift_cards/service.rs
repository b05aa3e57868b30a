//! Gift cards service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        gift_cards::{
            data::{ApplyGiftCard, NewGiftCardApplication},
            errors::{GiftCardRejection, GiftCardsServiceError},
            records::{GiftCardApplicationUuid, GiftCardApplied, GiftCardRecord, PublicGiftCard},
            redemption::{check_redeemable, compute_discount},
            repository::PgGiftCardsRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgGiftCardsService {
    db: Db,
    repository: PgGiftCardsRepository,
}

impl PgGiftCardsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgGiftCardsRepository::new(),
        }
    }
}

#[async_trait]
impl GiftCardsService for PgGiftCardsService {
    async fn validate_gift_card(
        &self,
        code: &str,
        now: Timestamp,
    ) -> Result<PublicGiftCard, GiftCardsServiceError> {
        if code.trim().is_empty() {
            return Err(GiftCardsServiceError::InsufficientData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let card = self
            .repository
            .find_by_code(&mut tx, code)
            .await?
            .ok_or(GiftCardRejection::NotFound)?;

        tx.commit().await?;

        check_redeemable(&card, now)?;

        Ok(card.public())
    }

    async fn apply_gift_card(
        &self,
        apply: ApplyGiftCard,
        now: Timestamp,
    ) -> Result<GiftCardApplied, GiftCardsServiceError> {
        if apply.code.trim().is_empty() {
            return Err(GiftCardsServiceError::InsufficientData);
        }

        if apply.amount_to_pay <= Decimal::ZERO {
            return Err(GiftCardsServiceError::InvalidAmount);
        }

        let mut tx = self.db.begin_transaction().await?;

        let card = self
            .repository
            .find_by_code(&mut tx, &apply.code)
            .await?
            .ok_or(GiftCardRejection::NotFound)?;

        check_redeemable(&card, now)?;

        let applied = compute_discount(card.remaining_balance, apply.amount_to_pay);

        // Sub-cent amounts round to nothing.
        if applied.discount_amount <= Decimal::ZERO {
            return Err(GiftCardsServiceError::InvalidAmount);
        }

        let Some(debited) = self
            .repository
            .debit(&mut tx, &apply.code, applied.discount_amount, now)
            .await?
        else {
            debug!(gift_card = %card.uuid, "gift card debit guard did not match");

            return Err(GiftCardsServiceError::BalanceChanged);
        };

        let application = self
            .repository
            .create_application(
                &mut tx,
                NewGiftCardApplication {
                    uuid: GiftCardApplicationUuid::now_v7(),
                    gift_card_uuid: debited.uuid,
                    user_uuid: apply.user_uuid,
                    booking_uuid: apply.booking_uuid,
                    discount_amount: applied.discount_amount,
                    remaining_balance: debited.remaining_balance,
                },
            )
            .await?;

        tx.commit().await?;

        info!(
            gift_card = %debited.uuid,
            application = %application.uuid,
            user = %apply.user_uuid,
            discount = %application.discount_amount,
            remaining = %debited.remaining_balance,
            "gift card applied"
        );

        Ok(GiftCardApplied {
            discount_amount: application.discount_amount,
            remaining_balance: debited.remaining_balance,
        })
    }

    async fn list_user_gift_cards(
        &self,
        user: UserUuid,
    ) -> Result<Vec<GiftCardRecord>, GiftCardsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cards = self.repository.list_by_purchaser(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cards)
    }

    async fn list_gift_cards(&self) -> Result<Vec<GiftCardRecord>, GiftCardsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cards = self.repository.list_all(&mut tx).await?;

        tx.commit().await?;

        Ok(cards)
    }
}

#[automock]
#[async_trait]
pub trait GiftCardsService: Send + Sync {
    /// Look up a code and check it can be spent at `now`.
    async fn validate_gift_card(
        &self,
        code: &str,
        now: Timestamp,
    ) -> Result<PublicGiftCard, GiftCardsServiceError>;

    /// Spend a card against an amount due and record the application.
    async fn apply_gift_card(
        &self,
        apply: ApplyGiftCard,
        now: Timestamp,
    ) -> Result<GiftCardApplied, GiftCardsServiceError>;

    /// Cards bought by the given user, newest first.
    async fn list_user_gift_cards(
        &self,
        user: UserUuid,
    ) -> Result<Vec<GiftCardRecord>, GiftCardsServiceError>;

    /// Every card, newest first.
    async fn list_gift_cards(&self) -> Result<Vec<GiftCardRecord>, GiftCardsServiceError>;
}
