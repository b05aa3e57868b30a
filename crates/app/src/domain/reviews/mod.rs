//! Reviews

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::ReviewsServiceError;
pub use service::*;
