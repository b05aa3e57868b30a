//! Bookings service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        bookings::{
            errors::BookingsServiceError,
            records::{BookingRecord, BookingUuid},
            repository::PgBookingsRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgBookingsService {
    db: Db,
    repository: PgBookingsRepository,
}

impl PgBookingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBookingsRepository::new(),
        }
    }
}

#[async_trait]
impl BookingsService for PgBookingsService {
    async fn list_user_bookings(
        &self,
        user: UserUuid,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let bookings = self.repository.list_user_bookings(&mut tx, user).await?;

        tx.commit().await?;

        Ok(bookings)
    }

    async fn get_user_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let booking = self
            .repository
            .get_user_booking(&mut tx, user, booking)
            .await?;

        tx.commit().await?;

        Ok(booking)
    }

    async fn list_recent_bookings(
        &self,
        limit: u32,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        let mut tx = self.db.begin_staff_transaction().await?;

        let bookings = self.repository.list_recent_bookings(&mut tx, limit).await?;

        tx.commit().await?;

        Ok(bookings)
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Bookings owned by `user`, latest start first.
    async fn list_user_bookings(
        &self,
        user: UserUuid,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;

    /// A single booking, only if `user` owns it.
    async fn get_user_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Most recently created bookings across all users.
    async fn list_recent_bookings(
        &self,
        limit: u32,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;
}
