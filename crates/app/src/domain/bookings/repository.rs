//! Bookings Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::try_get_parsed,
    domain::{
        bookings::records::{BookingRecord, BookingUuid},
        users::records::UserUuid,
    },
};

const LIST_USER_BOOKINGS_SQL: &str = include_str!("sql/list_user_bookings.sql");
const GET_USER_BOOKING_SQL: &str = include_str!("sql/get_user_booking.sql");
const LIST_RECENT_BOOKINGS_SQL: &str = include_str!("sql/list_recent_bookings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookingsRepository;

impl PgBookingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_user_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_USER_BOOKINGS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_user_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(GET_USER_BOOKING_SQL)
            .bind(booking.into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_recent_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
    ) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_RECENT_BOOKINGS_SQL)
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            user_uuid: row.try_get::<Uuid, _>("user_uuid")?.into(),
            product_kind: try_get_parsed(row, "product_kind")?,
            product_slug: row.try_get("product_slug")?,
            title: row.try_get("title")?,
            starts_at: row.try_get::<SqlxTimestamp, _>("starts_at")?.to_jiff(),
            status: try_get_parsed(row, "status")?,
            total_amount: row.try_get("total_amount")?,
            currency: row.try_get("currency")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
