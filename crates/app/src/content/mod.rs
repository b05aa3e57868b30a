//! Marketing content from the headless CMS.

pub mod cms;
mod errors;
pub mod records;
mod service;

pub use cms::{CmsClient, CmsConfig};
pub use errors::*;
pub use service::*;
