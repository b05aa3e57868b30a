//! Test context for service-level integration tests.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Connection, PgConnection, PgPool, query, query_as};
use uuid::Uuid;

use crate::{
    database::Db,
    diagnostics::PgDiagnosticsService,
    domain::{
        bookings::{PgBookingsService, records::BookingUuid},
        gift_cards::{
            PgGiftCardsService,
            records::{GiftCardApplicationRecord, GiftCardRecord, GiftCardUuid},
        },
        payments::{PgPaymentsService, records::PaymentUuid},
        reviews::PgReviewsService,
        roles::PgRolesService,
        users::records::UserUuid,
    },
};

use super::{
    db::{SUPERUSER, SUPERUSER_PASSWORD, TestDb},
    fixtures::{BookingFixture, GiftCardFixture, PaymentFixture},
};

/// Login role without superuser rights, so RLS policies apply to services.
const APP_ROLE: &str = "weshoot_app_test";
const APP_ROLE_PASSWORD: &str = "weshoot_app_test_pass";

pub(crate) struct TestContext {
    pub db: TestDb,
    /// The signed-in user most tests act as.
    pub user_uuid: UserUuid,
    pub gift_cards: PgGiftCardsService,
    pub roles: PgRolesService,
    pub bookings: PgBookingsService,
    pub reviews: PgReviewsService,
    pub payments: PgPaymentsService,
    pub diagnostics: PgDiagnosticsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(Self::app_pool(&test_db).await);

        Self {
            user_uuid: UserUuid::now_v7(),
            gift_cards: PgGiftCardsService::new(db.clone()),
            roles: PgRolesService::new(db.clone()),
            bookings: PgBookingsService::new(db.clone()),
            reviews: PgReviewsService::new(db.clone()),
            payments: PgPaymentsService::new(db.clone()),
            diagnostics: PgDiagnosticsService::new(db),
            db: test_db,
        }
    }

    pub async fn insert_gift_card(&self, card: GiftCardFixture) -> GiftCardUuid {
        let uuid = GiftCardUuid::now_v7();

        query(
            "INSERT INTO gift_cards \
               (uuid, code, original_balance, remaining_balance, status, expires_at, purchaser_user_uuid) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(uuid.into_uuid())
        .bind(&card.code)
        .bind(card.original_balance)
        .bind(card.remaining_balance)
        .bind(card.status.as_str())
        .bind(card.expires_at.map(SqlxTimestamp::from))
        .bind(card.purchaser_user_uuid.map(UserUuid::into_uuid))
        .execute(self.db.pool())
        .await
        .expect("Failed to insert gift card fixture");

        uuid
    }

    pub async fn gift_card(&self, uuid: GiftCardUuid) -> GiftCardRecord {
        query_as::<_, GiftCardRecord>("SELECT * FROM gift_cards WHERE uuid = $1")
            .bind(uuid.into_uuid())
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to load gift card")
    }

    pub async fn gift_card_applications(
        &self,
        uuid: GiftCardUuid,
    ) -> Vec<GiftCardApplicationRecord> {
        query_as::<_, GiftCardApplicationRecord>(
            "SELECT * FROM gift_card_applications WHERE gift_card_uuid = $1 ORDER BY applied_at",
        )
        .bind(uuid.into_uuid())
        .fetch_all(self.db.pool())
        .await
        .expect("Failed to load gift card applications")
    }

    pub async fn grant_role(&self, user: UserUuid, role: &str) {
        query("INSERT INTO user_roles (uuid, user_uuid, role) VALUES ($1, $2, $3)")
            .bind(Uuid::now_v7())
            .bind(user.into_uuid())
            .bind(role)
            .execute(self.db.pool())
            .await
            .expect("Failed to insert role fixture");
    }

    pub async fn insert_booking(&self, booking: BookingFixture) -> BookingUuid {
        let uuid = BookingUuid::now_v7();

        query(
            "INSERT INTO bookings \
               (uuid, user_uuid, product_kind, product_slug, title, starts_at, status, total_amount) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(uuid.into_uuid())
        .bind(booking.user_uuid.into_uuid())
        .bind(booking.product_kind.as_str())
        .bind(&booking.product_slug)
        .bind(&booking.title)
        .bind(SqlxTimestamp::from(booking.starts_at))
        .bind(booking.status.as_str())
        .bind(booking.total_amount)
        .execute(self.db.pool())
        .await
        .expect("Failed to insert booking fixture");

        uuid
    }

    pub async fn insert_review(&self, user: UserUuid, rating: i16, body: &str) {
        query("INSERT INTO reviews (uuid, user_uuid, rating, body) VALUES ($1, $2, $3, $4)")
            .bind(Uuid::now_v7())
            .bind(user.into_uuid())
            .bind(rating)
            .bind(body)
            .execute(self.db.pool())
            .await
            .expect("Failed to insert review fixture");
    }

    pub async fn insert_payment(&self, payment: PaymentFixture) -> PaymentUuid {
        let uuid = PaymentUuid::now_v7();

        query(
            "INSERT INTO payments \
               (uuid, user_uuid, booking_uuid, amount, status, provider_reference) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(uuid.into_uuid())
        .bind(payment.user_uuid.into_uuid())
        .bind(payment.booking_uuid.map(BookingUuid::into_uuid))
        .bind(payment.amount)
        .bind(payment.status.as_str())
        .bind(payment.provider_reference)
        .execute(self.db.pool())
        .await
        .expect("Failed to insert payment fixture");

        uuid
    }

    /// Create the app role (once per server) and return a pool connected as it.
    ///
    /// Superusers bypass RLS even with `FORCE ROW LEVEL SECURITY`.
    async fn app_pool(test_db: &TestDb) -> PgPool {
        let su_url = &test_db.superuser_url;
        let server_url = su_url.rsplit_once('/').map_or(su_url.as_str(), |x| x.0);

        let mut server_conn = PgConnection::connect(&format!("{server_url}/postgres"))
            .await
            .expect("Failed to connect for role setup");

        // Parallel tests race on CREATE ROLE; duplicate_object (42710) and
        // unique_violation (23505) both mean the role exists.
        let created = query(&format!(
            "CREATE ROLE {APP_ROLE} WITH LOGIN PASSWORD '{APP_ROLE_PASSWORD}' \
               NOSUPERUSER NOCREATEDB NOCREATEROLE"
        ))
        .execute(&mut server_conn)
        .await;

        match created {
            Ok(_) => {}
            Err(sqlx::Error::Database(ref e))
                if matches!(e.code().as_deref(), Some("42710" | "23505")) => {}
            Err(error) => panic!("Failed to create app role: {error}"),
        }

        query(&format!(
            "GRANT CONNECT ON DATABASE \"{}\" TO {APP_ROLE}",
            test_db.name
        ))
        .execute(&mut server_conn)
        .await
        .expect("Failed to grant CONNECT");

        server_conn
            .close()
            .await
            .expect("Failed to close server connection");

        for stmt in [
            format!("GRANT USAGE ON SCHEMA public TO {APP_ROLE}"),
            format!("GRANT SELECT, INSERT, UPDATE ON ALL TABLES IN SCHEMA public TO {APP_ROLE}"),
        ] {
            query(&stmt)
                .execute(test_db.pool())
                .await
                .expect("Failed to grant table privileges");
        }

        let app_url = su_url.replacen(
            &format!("{SUPERUSER}:{SUPERUSER_PASSWORD}"),
            &format!("{APP_ROLE}:{APP_ROLE_PASSWORD}"),
            1,
        );

        PgPool::connect(&app_url)
            .await
            .expect("Failed to create app pool")
    }
}
