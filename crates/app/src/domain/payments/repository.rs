//! Payments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    database::try_get_parsed,
    domain::{
        bookings::records::BookingUuid,
        payments::records::{PaymentRecord, PaymentStatus},
        users::records::UserUuid,
    },
};

const LIST_USER_PAYMENTS_SQL: &str = include_str!("sql/list_user_payments.sql");
const GET_BOOKING_PAYMENT_SQL: &str = include_str!("sql/get_booking_payment.sql");
const MARK_PAYMENT_STATUS_SQL: &str = include_str!("sql/mark_payment_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentsRepository;

impl PgPaymentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_user_payments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<PaymentRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(LIST_USER_PAYMENTS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_booking_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Option<PaymentRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(GET_BOOKING_PAYMENT_SQL)
            .bind(user.into_uuid())
            .bind(booking.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Succeeded payments are final and are left untouched.
    pub(crate) async fn mark_payment_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider_reference: &str,
        status: PaymentStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = query(MARK_PAYMENT_STATUS_SQL)
            .bind(provider_reference)
            .bind(status.as_str())
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}

impl<'r> FromRow<'r, PgRow> for PaymentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            user_uuid: row.try_get::<Uuid, _>("user_uuid")?.into(),
            booking_uuid: row
                .try_get::<Option<Uuid>, _>("booking_uuid")?
                .map(Into::into),
            amount: row.try_get("amount")?,
            currency: row.try_get("currency")?,
            status: try_get_parsed::<PaymentStatus>(row, "status")?,
            provider_reference: row.try_get("provider_reference")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
