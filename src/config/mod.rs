// src/config/mod.rs

//! Cost-limit configuration.
//!
//! - `model.rs`: the typed `CostConfig` / `CostLimit` and settings views.
//! - `loader.rs`: read a JSON file from disk.
//! - `validate.rs`: check the parsed document field by field.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_config, load_config_with, load_from_path};
pub use model::{CostConfig, CostLimit, NotificationSettings, TrackingSettings};
