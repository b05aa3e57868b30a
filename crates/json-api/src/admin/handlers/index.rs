//! Admin Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    dashboard::{errors::into_status_error, responses::BookingResponse},
    extensions::*,
    state::State,
};

const RECENT_BOOKINGS_LIMIT: u32 = 50;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminResponse {
    /// Newest bookings across all customers.
    pub recent_bookings: Vec<BookingResponse>,
}

/// Admin Index Handler
#[endpoint(tags("admin"), summary = "Admin Overview")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AdminResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let bookings = state
        .app
        .bookings
        .list_recent_bookings(RECENT_BOOKINGS_LIMIT)
        .await
        .map_err(into_status_error)?;

    Ok(Json(AdminResponse {
        recent_bookings: bookings.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use weshoot_app::domain::{
        bookings::MockBookingsService,
        roles::{Access, MockRolesService, RequiredAccess},
        users::records::UserUuid,
    };

    use crate::{
        dashboard::responses::fixtures::make_booking,
        sessions::RequireAccess,
        test_helpers::{TestState, signed_in_service},
    };

    use super::*;

    fn roles_granting(access: Access) -> MockRolesService {
        let mut roles = MockRolesService::new();

        roles
            .expect_access_for()
            .once()
            .return_once(move |_| Ok(access));

        roles
    }

    fn make_service(roles: MockRolesService, bookings: MockBookingsService) -> Service {
        signed_in_service(
            TestState::new().roles(roles).bookings(bookings).shared(),
            Router::with_path("admin")
                .hoop(RequireAccess::new(RequiredAccess::Admin))
                .get(handler),
        )
    }

    #[tokio::test]
    async fn admin_sees_recent_bookings_of_everyone() -> TestResult {
        let mut bookings = MockBookingsService::new();

        bookings
            .expect_list_recent_bookings()
            .once()
            .withf(|limit| *limit == RECENT_BOOKINGS_LIMIT)
            .return_once(|_| {
                Ok(vec![
                    make_booking(UserUuid::now_v7(), Timestamp::UNIX_EPOCH),
                    make_booking(UserUuid::now_v7(), Timestamp::UNIX_EPOCH),
                ])
            });

        let mut res = TestClient::get("http://example.com/admin")
            .send(&make_service(roles_granting(Access::Admin), bookings))
            .await;

        let body: AdminResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.recent_bookings.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn customer_never_reaches_the_query() {
        let mut bookings = MockBookingsService::new();

        bookings.expect_list_recent_bookings().never();

        let res = TestClient::get("http://example.com/admin")
            .send(&make_service(roles_granting(Access::None), bookings))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
    }
}
