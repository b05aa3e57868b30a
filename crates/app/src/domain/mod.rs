//! WeShoot Domain Concerns

pub mod bookings;
pub mod gift_cards;
pub mod payments;
pub mod reviews;
pub mod roles;
pub mod users;
