//! Core module - configuration, errors and application bootstrap
//!
//! # Resources
//!
//! - [`WindowConfig`] - Window/canvas settings and the log filter
//! - [`BoardConfig`] - Board size, cell size, piece geometry and colours
//! - [`SceneConfig`] - Camera projection, light and clear colour
//!
//! The [`CorePlugin`] inserts these (respecting values the caller already
//! inserted) and validates the board configuration.

pub mod error;
pub mod plugin;
pub mod resources;
pub mod window_config;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use window_config::WindowConfig;
