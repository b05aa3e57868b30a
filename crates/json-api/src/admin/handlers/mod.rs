//! Admin Handlers

pub(crate) mod gift_cards;
pub(crate) mod index;
pub(crate) mod roles;
