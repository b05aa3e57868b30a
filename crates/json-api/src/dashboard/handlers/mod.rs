//! Dashboard Handlers

pub(crate) mod bookings;
pub(crate) mod confirmation;
pub(crate) mod gift_cards;
pub(crate) mod index;
pub(crate) mod payments;
pub(crate) mod reviews;
