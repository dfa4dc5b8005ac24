//! # UserHub Service
//!
//! Business logic service layer for UserHub. Translates external requests
//! into repository calls, applies the field-update contract, and owns the
//! profile-image and synthetic-user features.

pub mod blob;
pub mod dto;
pub mod r#impl;
pub mod names;
pub mod user_service;

pub use blob::*;
pub use dto::*;
pub use r#impl::UserServiceComponent;
pub use user_service::*;
