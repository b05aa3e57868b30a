//! Gift Cards Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::try_get_parsed,
    domain::{
        gift_cards::{
            data::NewGiftCardApplication,
            records::{GiftCardApplicationRecord, GiftCardRecord, GiftCardStatus},
        },
        users::records::UserUuid,
    },
};

const FIND_GIFT_CARD_BY_CODE_SQL: &str = include_str!("sql/find_gift_card_by_code.sql");
const DEBIT_GIFT_CARD_SQL: &str = include_str!("sql/debit_gift_card.sql");
const CREATE_GIFT_CARD_APPLICATION_SQL: &str =
    include_str!("sql/create_gift_card_application.sql");
const LIST_GIFT_CARDS_BY_PURCHASER_SQL: &str = include_str!("sql/list_gift_cards_by_purchaser.sql");
const LIST_GIFT_CARDS_SQL: &str = include_str!("sql/list_gift_cards.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgGiftCardsRepository;

impl PgGiftCardsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<GiftCardRecord>, sqlx::Error> {
        query_as::<Postgres, GiftCardRecord>(FIND_GIFT_CARD_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Take `discount` off the card only if it is still active, unexpired and
    /// holds at least `discount`. `None` means the guard did not match.
    pub(crate) async fn debit(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
        discount: Decimal,
        now: Timestamp,
    ) -> Result<Option<GiftCardRecord>, sqlx::Error> {
        query_as::<Postgres, GiftCardRecord>(DEBIT_GIFT_CARD_SQL)
            .bind(code)
            .bind(discount)
            .bind(SqlxTimestamp::from(now))
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_application(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        application: NewGiftCardApplication,
    ) -> Result<GiftCardApplicationRecord, sqlx::Error> {
        query_as::<Postgres, GiftCardApplicationRecord>(CREATE_GIFT_CARD_APPLICATION_SQL)
            .bind(application.uuid.into_uuid())
            .bind(application.gift_card_uuid.into_uuid())
            .bind(application.user_uuid.into_uuid())
            .bind(application.booking_uuid.map(|uuid| uuid.into_uuid()))
            .bind(application.discount_amount)
            .bind(application.remaining_balance)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_by_purchaser(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<GiftCardRecord>, sqlx::Error> {
        query_as::<Postgres, GiftCardRecord>(LIST_GIFT_CARDS_BY_PURCHASER_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<GiftCardRecord>, sqlx::Error> {
        query_as::<Postgres, GiftCardRecord>(LIST_GIFT_CARDS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for GiftCardRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            code: row.try_get("code")?,
            original_balance: row.try_get("original_balance")?,
            remaining_balance: row.try_get("remaining_balance")?,
            currency: row.try_get("currency")?,
            status: try_get_parsed::<GiftCardStatus>(row, "status")?,
            expires_at: row
                .try_get::<Option<SqlxTimestamp>, _>("expires_at")?
                .map(SqlxTimestamp::to_jiff),
            purchaser_user_uuid: row
                .try_get::<Option<Uuid>, _>("purchaser_user_uuid")?
                .map(UserUuid::from_uuid),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for GiftCardApplicationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            gift_card_uuid: row.try_get::<Uuid, _>("gift_card_uuid")?.into(),
            user_uuid: row.try_get::<Uuid, _>("user_uuid")?.into(),
            booking_uuid: row
                .try_get::<Option<Uuid>, _>("booking_uuid")?
                .map(Into::into),
            discount_amount: row.try_get("discount_amount")?,
            remaining_balance: row.try_get("remaining_balance")?,
            applied_at: row.try_get::<SqlxTimestamp, _>("applied_at")?.to_jiff(),
        })
    }
}
