//! Board creation and rendering
//!
//! Builds the full grid of flat squares once at startup. Squares share one
//! mesh and one material per colour. Positions come from
//! [`GridCoord::world_position`], so the board is centred on the origin.

use crate::core::BoardConfig;
use crate::game::types::GridCoord;
use crate::rendering::utils::{square_material, BoardSquare, SquareColor};
use bevy::prelude::*;

/// Every cell of the board, row-major over `x` then `z`
pub fn board_layout(config: &BoardConfig) -> Vec<BoardSquare> {
    GridCoord::all(config).map(BoardSquare::at).collect()
}

pub(crate) fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<BoardConfig>,
) {
    let mesh = meshes.add(
        Plane3d::default()
            .mesh()
            .size(config.square_size, config.square_size),
    );
    let white_material =
        materials.add(square_material(SquareColor::White.render_color(&config)));
    let black_material =
        materials.add(square_material(SquareColor::Black.render_color(&config)));

    let squares: Vec<_> = board_layout(&config)
        .into_iter()
        .map(|square| {
            let material = if square.is_white() {
                white_material.clone()
            } else {
                black_material.clone()
            };
            (
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(square.coord.world_position(&config, 0.0)),
                Name::new(format!("Square {}", square.coord)),
                square,
            )
        })
        .collect();

    let count = squares.len();
    commands.spawn_batch(squares);
    info!("[BOARD] Spawned {} squares", count);
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BoardSquare>()
            .add_systems(Startup, create_board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_one_square_per_cell() {
        let config = BoardConfig::default();
        let layout = board_layout(&config);
        assert_eq!(layout.len(), 64);

        for x in 0..8 {
            for z in 0..8 {
                let matches = layout
                    .iter()
                    .filter(|square| square.coord == GridCoord { x, z })
                    .count();
                assert_eq!(matches, 1, "cell ({x}, {z}) should appear once");
            }
        }
    }

    #[test]
    fn test_layout_colors_follow_parity() {
        //! White iff (x + z) is even
        let config = BoardConfig::default();
        for square in board_layout(&config) {
            let even = (square.coord.x + square.coord.z) % 2 == 0;
            assert_eq!(square.is_white(), even, "square {}", square.coord);
        }
    }

    #[test]
    fn test_layout_world_positions_are_centred() {
        let config = BoardConfig::default();
        for square in board_layout(&config) {
            let position = square.coord.world_position(&config, 0.0);
            assert_eq!(position.x, f32::from(square.coord.x) - 4.0);
            assert_eq!(position.z, f32::from(square.coord.z) - 4.0);
            assert_eq!(position.y, 0.0);
        }
    }

    #[test]
    fn test_layout_scales_with_size() {
        let config = BoardConfig {
            size: 4,
            home_rows: 1,
            ..default()
        };
        assert_eq!(board_layout(&config).len(), 16);
    }
}
