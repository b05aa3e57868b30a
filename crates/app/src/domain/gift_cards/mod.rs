//! Gift Cards

pub mod data;
pub mod errors;
pub mod records;
pub mod redemption;
mod repository;
pub mod service;

pub use errors::{GiftCardRejection, GiftCardsServiceError};
pub use service::*;
