//! Domain services and persistence for the WeShoot backend.

pub mod auth;
pub mod content;
pub mod context;
pub mod database;
pub mod diagnostics;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
