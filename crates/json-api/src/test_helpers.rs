//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use weshoot_app::{
    auth::MockSessionsService,
    content::MockContentService,
    context::AppContext,
    diagnostics::MockDiagnosticsService,
    domain::{
        bookings::MockBookingsService,
        gift_cards::MockGiftCardsService,
        payments::MockPaymentsService,
        reviews::MockReviewsService,
        roles::MockRolesService,
        users::records::{SessionUser, UserUuid},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER: SessionUser = SessionUser {
    uuid: UserUuid::from_uuid(Uuid::nil()),
    email: None,
};

pub(crate) const TEST_SESSION_COOKIE: &str = "sb-access-token";

/// Pretend the session middleware resolved [`TEST_USER`].
#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_session_user(TEST_USER.clone());
    ctrl.call_next(req, depot, res).await;
}

fn strict_gift_cards_mock() -> MockGiftCardsService {
    let mut gift_cards = MockGiftCardsService::new();

    gift_cards.expect_validate_gift_card().never();
    gift_cards.expect_apply_gift_card().never();
    gift_cards.expect_list_user_gift_cards().never();
    gift_cards.expect_list_gift_cards().never();

    gift_cards
}

fn strict_sessions_mock() -> MockSessionsService {
    let mut sessions = MockSessionsService::new();

    sessions.expect_resolve_session().never();

    sessions
}

fn strict_roles_mock() -> MockRolesService {
    let mut roles = MockRolesService::new();

    roles.expect_access_for().never();
    roles.expect_list_role_assignments().never();

    roles
}

fn strict_bookings_mock() -> MockBookingsService {
    let mut bookings = MockBookingsService::new();

    bookings.expect_list_user_bookings().never();
    bookings.expect_get_user_booking().never();
    bookings.expect_list_recent_bookings().never();

    bookings
}

fn strict_reviews_mock() -> MockReviewsService {
    let mut reviews = MockReviewsService::new();

    reviews.expect_list_user_reviews().never();

    reviews
}

fn strict_payments_mock() -> MockPaymentsService {
    let mut payments = MockPaymentsService::new();

    payments.expect_list_user_payments().never();
    payments.expect_get_booking_payment().never();
    payments.expect_mark_payment_status().never();

    payments
}

fn strict_content_mock() -> MockContentService {
    let mut content = MockContentService::new();

    content.expect_fetch_page().never();

    content
}

fn strict_diagnostics_mock() -> MockDiagnosticsService {
    let mut diagnostics = MockDiagnosticsService::new();

    diagnostics.expect_ping_database().never();

    diagnostics
}

/// Builds a [`State`] whose services are strict mocks unless replaced.
pub(crate) struct TestState {
    gift_cards: MockGiftCardsService,
    sessions: MockSessionsService,
    roles: MockRolesService,
    bookings: MockBookingsService,
    reviews: MockReviewsService,
    payments: MockPaymentsService,
    content: MockContentService,
    diagnostics: MockDiagnosticsService,
}

impl TestState {
    pub(crate) fn new() -> Self {
        Self {
            gift_cards: strict_gift_cards_mock(),
            sessions: strict_sessions_mock(),
            roles: strict_roles_mock(),
            bookings: strict_bookings_mock(),
            reviews: strict_reviews_mock(),
            payments: strict_payments_mock(),
            content: strict_content_mock(),
            diagnostics: strict_diagnostics_mock(),
        }
    }

    pub(crate) fn gift_cards(mut self, gift_cards: MockGiftCardsService) -> Self {
        self.gift_cards = gift_cards;
        self
    }

    pub(crate) fn roles(mut self, roles: MockRolesService) -> Self {
        self.roles = roles;
        self
    }

    pub(crate) fn sessions(mut self, sessions: MockSessionsService) -> Self {
        self.sessions = sessions;
        self
    }

    pub(crate) fn bookings(mut self, bookings: MockBookingsService) -> Self {
        self.bookings = bookings;
        self
    }

    pub(crate) fn reviews(mut self, reviews: MockReviewsService) -> Self {
        self.reviews = reviews;
        self
    }

    pub(crate) fn payments(mut self, payments: MockPaymentsService) -> Self {
        self.payments = payments;
        self
    }

    pub(crate) fn content(mut self, content: MockContentService) -> Self {
        self.content = content;
        self
    }

    pub(crate) fn diagnostics(mut self, diagnostics: MockDiagnosticsService) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub(crate) fn build(self) -> State {
        State::new(
            AppContext {
                gift_cards: Arc::new(self.gift_cards),
                sessions: Arc::new(self.sessions),
                roles: Arc::new(self.roles),
                bookings: Arc::new(self.bookings),
                reviews: Arc::new(self.reviews),
                payments: Arc::new(self.payments),
                content: Arc::new(self.content),
                diagnostics: Arc::new(self.diagnostics),
            },
            TEST_SESSION_COOKIE,
        )
    }

    pub(crate) fn shared(self) -> Arc<State> {
        self.build().shared()
    }
}

pub(crate) fn state_with_sessions(sessions: MockSessionsService) -> Arc<State> {
    TestState::new().sessions(sessions).shared()
}

pub(crate) fn state_with_roles(roles: MockRolesService) -> Arc<State> {
    TestState::new().roles(roles).shared()
}

/// Mount `route` with the given state and no session.
pub(crate) fn anonymous_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// Mount `route` with the given state as [`TEST_USER`].
pub(crate) fn signed_in_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_session)
            .push(route),
    )
}
