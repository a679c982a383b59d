//! Applies selection outcomes to the scene
//!
//! Pick-up lights the piece's emissive channel and tags it [`Highlighted`].
//! Drop snaps the held piece onto the rounded x/z of the target, refreshes
//! its [`GridCoord`](crate::game::types::GridCoord) and clears the highlight.
//! When the target is a piece, the held piece takes that piece's height; when
//! it is a square, the held piece keeps its own.

use crate::core::BoardConfig;
use crate::game::components::Highlighted;
use crate::game::events::PointerPick;
use crate::game::resources::{DropTarget, Selection, SelectionOutcome};
use crate::game::types::{snap_to_grid, GridCoord};
use crate::rendering::pieces::Piece;
use crate::rendering::utils::BoardSquare;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

type PieceQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Transform,
        &'static mut Piece,
        &'static MeshMaterial3d<StandardMaterial>,
    ),
>;

fn set_emissive(
    materials: &mut Assets<StandardMaterial>,
    handle: &MeshMaterial3d<StandardMaterial>,
    emissive: LinearRgba,
) {
    if let Some(material) = materials.get_mut(&handle.0) {
        material.emissive = emissive;
    } else {
        warn!("[SELECTION] Piece material {:?} not loaded", handle.0);
    }
}

/// World position the held piece is snapped toward, with the height it lands at
fn drop_anchor(
    held: Entity,
    target: DropTarget,
    pieces: &PieceQuery,
    squares: &Query<&Transform, (With<BoardSquare>, Without<Piece>)>,
) -> Option<(Vec3, f32)> {
    match target {
        DropTarget::Piece(entity) => pieces
            .get(entity)
            .ok()
            .map(|(transform, _, _)| (transform.translation, transform.translation.y)),
        DropTarget::Square(entity) => {
            let square = squares.get(entity).ok()?;
            let (held_transform, _, _) = pieces.get(held).ok()?;
            Some((square.translation, held_transform.translation.y))
        }
    }
}

pub fn apply_pointer_picks(
    mut commands: Commands,
    mut picks: MessageReader<PointerPick>,
    mut selection: ResMut<Selection>,
    config: Res<BoardConfig>,
    mut pieces: PieceQuery,
    squares: Query<&Transform, (With<BoardSquare>, Without<Piece>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for pick in picks.read() {
        match selection.pointer_down(*pick) {
            SelectionOutcome::Unchanged => {}
            SelectionOutcome::PickedUp(entity) => {
                let Ok((_, piece, material)) = pieces.get(entity) else {
                    warn!("[SELECTION] Picked entity {:?} is not a piece", entity);
                    selection.clear();
                    continue;
                };
                set_emissive(&mut materials, material, config.highlight_color.to_linear());
                commands.entity(entity).insert(Highlighted);
                debug!(
                    "[SELECTION] Holding {} piece at {}",
                    piece.color, piece.coord
                );
            }
            SelectionOutcome::Dropped { piece, target } => {
                let anchor = drop_anchor(piece, target, &pieces, &squares);

                let Ok((mut transform, mut held, material)) = pieces.get_mut(piece) else {
                    warn!("[SELECTION] Held entity {:?} is gone", piece);
                    continue;
                };
                set_emissive(&mut materials, material, LinearRgba::BLACK);
                commands.entity(piece).remove::<Highlighted>();

                let Some((target_position, elevation)) = anchor else {
                    warn!(
                        "[SELECTION] Drop target {:?} has no transform, piece stays at {}",
                        target.entity(),
                        held.coord
                    );
                    continue;
                };

                let destination = snap_to_grid(target_position, elevation, &config);
                match GridCoord::from_world(destination, &config) {
                    Ok(coord) => {
                        info!(
                            "[SELECTION] Moved {} piece {} -> {}",
                            held.color, held.coord, coord
                        );
                        transform.translation = destination;
                        held.coord = coord;
                    }
                    Err(err) => {
                        warn!("[SELECTION] {}; piece stays at {}", err, held.coord);
                    }
                }
            }
        }
    }
}
