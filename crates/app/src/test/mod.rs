//! Shared infrastructure for service integration tests.

mod context;
mod db;

pub(crate) use context::TestContext;
pub(crate) use fixtures::{BookingFixture, GiftCardFixture, PaymentFixture};
