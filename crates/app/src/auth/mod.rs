//! Authentication

mod errors;
mod service;
pub mod supabase;

pub use errors::*;
pub use service::*;
pub use supabase::{SupabaseAuthClient, SupabaseConfig, SupabaseError};
