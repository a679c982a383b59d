//! Checker piece spawning
//!
//! Pieces start on the dark cells of the first and last `home_rows` rows:
//! black on the low-`z` side, white on the high-`z` side. The layout is a pure
//! function ([`starting_pieces`]) so it can be tested without an `App`.
//!
//! Every piece gets its own material instance. The selection highlight
//! writes the material's emissive channel, and a shared material would light
//! up every piece of the same colour at once.

use crate::core::BoardConfig;
use crate::game::types::GridCoord;
use crate::rendering::utils::piece_material;
use bevy::prelude::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn as_str(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical data attached to a piece entity
///
/// `coord` tracks the cell the piece was last dropped on. Two pieces may share
/// a coordinate; nothing checks occupancy.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Piece {
    pub color: PieceColor,
    pub coord: GridCoord,
}

/// Starting piece set for the configured board
pub fn starting_pieces(config: &BoardConfig) -> Vec<Piece> {
    let white_from = config.size.saturating_sub(config.home_rows);

    GridCoord::all(config)
        .filter(|coord| coord.is_dark())
        .filter_map(|coord| {
            let color = if coord.z < config.home_rows {
                PieceColor::Black
            } else if coord.z >= white_from {
                PieceColor::White
            } else {
                return None;
            };
            Some(Piece { color, coord })
        })
        .collect()
}

pub fn create_pieces(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<BoardConfig>,
) {
    let mesh = meshes.add(Cylinder::new(config.piece_radius, config.piece_height));

    let pieces = starting_pieces(&config);
    for piece in &pieces {
        let base_color = match piece.color {
            PieceColor::White => config.white_piece_color,
            PieceColor::Black => config.black_piece_color,
        };

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(piece_material(base_color))),
            Transform::from_translation(
                piece
                    .coord
                    .world_position(&config, config.piece_elevation),
            ),
            Name::new(format!("Piece {} {}", piece.color, piece.coord)),
            *piece,
        ));
    }

    info!("[PIECES] Spawned {} pieces", pieces.len());
}

pub struct PiecePlugin;

impl Plugin for PiecePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Piece>()
            .register_type::<PieceColor>()
            .add_systems(Startup, create_pieces);
    }
}
