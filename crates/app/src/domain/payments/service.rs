//! Payments service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        bookings::records::BookingUuid,
        payments::{
            errors::PaymentsServiceError,
            records::{PaymentRecord, PaymentStatus},
            repository::PgPaymentsRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgPaymentsService {
    db: Db,
    repository: PgPaymentsRepository,
}

impl PgPaymentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPaymentsRepository::new(),
        }
    }
}

#[async_trait]
impl PaymentsService for PgPaymentsService {
    async fn list_user_payments(
        &self,
        user: UserUuid,
    ) -> Result<Vec<PaymentRecord>, PaymentsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let payments = self.repository.list_user_payments(&mut tx, user).await?;

        tx.commit().await?;

        Ok(payments)
    }

    async fn get_booking_payment(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Option<PaymentRecord>, PaymentsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let payment = self
            .repository
            .get_booking_payment(&mut tx, user, booking)
            .await?;

        tx.commit().await?;

        Ok(payment)
    }

    async fn mark_payment_status(
        &self,
        provider_reference: &str,
        status: PaymentStatus,
    ) -> Result<bool, PaymentsServiceError> {
        let mut tx = self.db.begin_staff_transaction().await?;

        let updated = self
            .repository
            .mark_payment_status(&mut tx, provider_reference, status)
            .await?;

        tx.commit().await?;

        info!(provider_reference, %status, updated, "payment status updated");

        Ok(updated > 0)
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Payments made by `user`, newest first.
    async fn list_user_payments(
        &self,
        user: UserUuid,
    ) -> Result<Vec<PaymentRecord>, PaymentsServiceError>;

    /// Latest succeeded payment for one of `user`'s bookings.
    async fn get_booking_payment(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Option<PaymentRecord>, PaymentsServiceError>;

    /// Record the provider's verdict for a payment.
    ///
    /// Returns `false` when no unsettled payment carries `provider_reference`.
    async fn mark_payment_status(
        &self,
        provider_reference: &str,
        status: PaymentStatus,
    ) -> Result<bool, PaymentsServiceError>;
}
