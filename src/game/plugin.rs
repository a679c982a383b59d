//! Game plugin - selection controller wiring
//!
//! Registers the [`Selection`] resource, the [`PointerPick`] message and the
//! two system sets. Depends on [`crate::core::CorePlugin`] for
//! [`BoardConfig`](crate::core::BoardConfig) and, at runtime, on Bevy's input,
//! window and asset plugins.

use super::components::Highlighted;
use super::events::PointerPick;
use super::resources::{Selection, SelectionState};
use super::system_sets::GameSystems;
use super::systems::{apply_pointer_picks, cast_pointer_ray};
use crate::input::{track_pointer_system, PointerPlugin};
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .add_message::<PointerPick>()
            .register_type::<Selection>()
            .register_type::<SelectionState>()
            .register_type::<Highlighted>();

        app.add_plugins(PointerPlugin);

        app.configure_sets(
            Update,
            (GameSystems::Input, GameSystems::Execution).chain(),
        )
        .add_systems(
            Update,
            (
                cast_pointer_ray
                    .in_set(GameSystems::Input)
                    .after(track_pointer_system),
                apply_pointer_picks.in_set(GameSystems::Execution),
            ),
        );
    }
}
