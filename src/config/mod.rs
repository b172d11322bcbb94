//! Per-state rating configuration for the experience mod audit engine.
//!
//! Rating values live in one YAML file per jurisdiction under
//! `config/states/` and are loaded into a [`StateRegistry`]. The registry
//! is injected into the engine rather than read from a global, so rating
//! table vintages can be swapped without code changes.
//!
//! # Example
//!
//! ```no_run
//! use emod_engine::config::StateRegistry;
//!
//! let registry = StateRegistry::load("./config/states").unwrap();
//! let georgia = registry.get("GA").unwrap();
//! println!("Split point: {}", georgia.split_point);
//! ```

mod registry;
mod types;

pub use registry::StateRegistry;
pub use types::{Bureau, KP_FLOOR, StateRating};
