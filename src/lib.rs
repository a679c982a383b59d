//! XFCheckers - a 3D checkerboard where pieces can be picked up and dropped
//! onto any cell with the mouse.
//!
//! There is no rules engine: no turns, captures or move validation. The board
//! and pieces are spawned once at startup and the [`game::resources::Selection`]
//! controller is the only state that changes afterwards.

pub mod core;
pub mod game;
pub mod input;
pub mod rendering;

use bevy::prelude::*;

/// Every plugin of the application, in dependency order
///
/// Expects [`bevy::DefaultPlugins`] (or an equivalent headless set) to be
/// added first.
pub struct CheckersPlugin;

impl Plugin for CheckersPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            rendering::SceneSetupPlugin,
            rendering::BoardPlugin,
            rendering::PiecePlugin,
            game::GamePlugin,
        ));
    }
}
