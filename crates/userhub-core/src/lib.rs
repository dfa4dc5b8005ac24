//! # UserHub Core
//!
//! Core types, traits, and error definitions for UserHub.
//! This crate provides the foundational abstractions used across all layers
//! of the service.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku items used by every layer for dependency injection
pub use shaku::{module, HasComponent, Interface};
