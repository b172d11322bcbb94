//! Application state for the experience mod audit engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::StateRegistry;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded state rating registry.
#[derive(Clone)]
pub struct AppState {
    /// The loaded per-state rating values.
    registry: Arc<StateRegistry>,
}

impl AppState {
    /// Creates a new application state with the given rating registry.
    pub fn new(registry: StateRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the rating registry.
    pub fn registry(&self) -> &StateRegistry {
        &self.registry
    }
}
