//! Pointer-down handling: turns a mouse press into a [`PointerPick`]
//!
//! The ray goes from the board camera through the last tracked pointer
//! position. It is tested against the pieces first; the squares are only
//! tested when no piece was hit and a piece is being held.

use crate::game::events::PointerPick;
use crate::game::resources::Selection;
use crate::input::pointer::PointerPosition;
use crate::rendering::pieces::Piece;
use crate::rendering::scene::BoardCamera;
use crate::rendering::utils::BoardSquare;
use bevy::ecs::message::MessageWriter;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;

/// Nearest entity along `ray` that passes `filter`
fn nearest_hit(
    ray_cast: &mut MeshRayCast,
    ray: Ray3d,
    filter: &impl Fn(Entity) -> bool,
) -> Option<Entity> {
    let settings = MeshRayCastSettings::default().with_filter(filter);
    ray_cast
        .cast_ray(ray, &settings)
        .first()
        .map(|(entity, _)| *entity)
}

/// Entity set a pointer-down ray is tested against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickLayer {
    Pieces,
    Squares,
}

/// Decides which layers a press is tested against
///
/// Pieces are always cast first. Squares are only cast when no piece was hit
/// and a piece is being held.
pub fn resolve_pick(
    holding: bool,
    mut cast: impl FnMut(PickLayer) -> Option<Entity>,
) -> PointerPick {
    let piece = cast(PickLayer::Pieces);
    let square = if piece.is_none() && holding {
        cast(PickLayer::Squares)
    } else {
        None
    };
    PointerPick { piece, square }
}

pub fn cast_pointer_ray(
    mouse: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerPosition>,
    selection: Res<Selection>,
    cameras: Query<(&Camera, &GlobalTransform), With<BoardCamera>>,
    pieces: Query<(), With<Piece>>,
    squares: Query<(), With<BoardSquare>>,
    mut ray_cast: MeshRayCast,
    mut picks: MessageWriter<PointerPick>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok((camera, camera_transform)) = cameras.single() else {
        debug!("[INPUT] No board camera, ignoring press");
        return;
    };
    let Some(viewport_size) = camera.logical_viewport_size() else {
        debug!("[INPUT] Camera has no viewport yet, ignoring press");
        return;
    };
    let Some(viewport_position) = pointer.viewport_position(viewport_size) else {
        debug!("[INPUT] Press before any pointer movement, ignoring");
        return;
    };
    let ray = match camera.viewport_to_world(camera_transform, viewport_position) {
        Ok(ray) => ray,
        Err(err) => {
            debug!("[INPUT] Could not build pointer ray: {:?}", err);
            return;
        }
    };

    let pick = resolve_pick(selection.is_holding(), |layer| match layer {
        PickLayer::Pieces => nearest_hit(&mut ray_cast, ray, &|entity| pieces.contains(entity)),
        PickLayer::Squares => nearest_hit(&mut ray_cast, ray, &|entity| squares.contains(entity)),
    });

    debug!(
        "[INPUT] Pointer down hit piece {:?}, square {:?}",
        pick.piece, pick.square
    );
    picks.write(pick);
}
