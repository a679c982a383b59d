//! Core plugin for XFCheckers
//!
//! Provides fundamental application setup:
//! - Window, board and scene configuration resources
//! - Board configuration validation with fallback to defaults
//! - Type registration for reflection
//!
//! # Plugin Order
//!
//! Add after [`bevy::DefaultPlugins`] (so logging is initialized) and before
//! the rendering and game plugins, which read the configuration at startup.
//!
//! A [`BoardConfig`] may be inserted before or after this plugin is added.
//! Validation runs in `PreStartup`, ahead of the `Startup` systems that build
//! the board and pieces from it.

use bevy::prelude::*;

use super::{BoardConfig, SceneConfig, WindowConfig};

/// Core plugin for XFCheckers application
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Values inserted by the caller before this plugin win over defaults
        app.init_resource::<WindowConfig>()
            .init_resource::<BoardConfig>()
            .init_resource::<SceneConfig>()
            .add_systems(PreStartup, validate_board_config);

        app.register_type::<WindowConfig>()
            .register_type::<BoardConfig>()
            .register_type::<SceneConfig>();
    }
}

/// Replaces an invalid board configuration with the default one
pub(crate) fn validate_board_config(mut board: ResMut<BoardConfig>) {
    if let Err(err) = board.validate() {
        error!("[CORE] {}. Falling back to the default board.", err);
        *board = BoardConfig::default();
    }

    info!(
        "[CORE] Board {}x{} with {} home rows per side",
        board.size, board.size, board.home_rows
    );
}
