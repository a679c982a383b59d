//! Input handling - pointer tracking
//!
//! The pointer-move side of input lives here; the pointer-down side
//! (ray casting and selection) lives in `game::systems`.

pub mod pointer;

pub use pointer::*;

use crate::game::system_sets::GameSystems;
use bevy::prelude::*;

/// Registers [`PointerPosition`] and the pointer-move handler
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerPosition>()
            .register_type::<PointerPosition>()
            .add_systems(Update, track_pointer_system.in_set(GameSystems::Input));
    }
}
