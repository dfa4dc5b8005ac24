//! Application state for Axum handlers.

use shaku::{HasComponent, Module};
use std::sync::Arc;
use userhub_service::UserService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Creates the application state by resolving services from a Shaku
    /// module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn UserService>,
    {
        Self {
            user_service: module.resolve(),
        }
    }
}
