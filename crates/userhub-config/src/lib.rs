//! # UserHub Config
//!
//! Layered configuration loading for UserHub: TOML files plus
//! `USERHUB_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
