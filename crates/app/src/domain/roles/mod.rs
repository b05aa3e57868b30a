//! Roles

pub mod access;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use access::{Access, RequiredAccess, Role};
pub use errors::RolesServiceError;
pub use service::*;
