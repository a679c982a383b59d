//! Grid coordinates and world-space snapping
//!
//! The board is laid out on the XZ plane. Grid index `i` maps to world
//! coordinate `(i - size / 2) * square_size`, so an 8x8 board with unit cells
//! spans -4..=3 on both axes.

use crate::core::{BoardConfig, CoreError, CoreResult};
use bevy::prelude::*;
use std::fmt;

/// Integer cell address on the board, both axes in `0..size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub struct GridCoord {
    pub x: u8,
    pub z: u8,
}

impl GridCoord {
    /// Builds a coordinate, rejecting cells outside the configured board
    pub fn new(x: u8, z: u8, config: &BoardConfig) -> CoreResult<Self> {
        if x >= config.size || z >= config.size {
            return Err(CoreError::OffBoard {
                x: i32::from(x),
                z: i32::from(z),
                size: config.size,
            });
        }
        Ok(Self { x, z })
    }

    /// Every cell of the configured board, row-major over `x` then `z`
    pub fn all(config: &BoardConfig) -> impl Iterator<Item = Self> + '_ {
        (0..config.size).flat_map(move |x| {
            (0..config.size).filter_map(move |z| Self::new(x, z, config).ok())
        })
    }

    /// Dark cells are the ones with an odd `x + z`; pieces only start there
    pub fn is_dark(self) -> bool {
        !(u16::from(self.x) + u16::from(self.z)).is_multiple_of(2)
    }

    /// Centre of the cell at the given height
    pub fn world_position(self, config: &BoardConfig, elevation: f32) -> Vec3 {
        let half = config.half_extent();
        Vec3::new(
            (i32::from(self.x) - half) as f32 * config.square_size,
            elevation,
            (i32::from(self.z) - half) as f32 * config.square_size,
        )
    }

    /// Cell under a world position: x and z are rounded to the nearest cell
    /// and shifted back by `size / 2`
    pub fn from_world(position: Vec3, config: &BoardConfig) -> CoreResult<Self> {
        let half = config.half_extent();
        let x = round_to_cell(position.x, config.square_size) + half;
        let z = round_to_cell(position.z, config.square_size) + half;
        let size = i32::from(config.size);

        if (0..size).contains(&x) && (0..size).contains(&z) {
            Ok(Self {
                x: x as u8,
                z: z as u8,
            })
        } else {
            Err(CoreError::OffBoard {
                x,
                z,
                size: config.size,
            })
        }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

fn round_to_cell(value: f32, square_size: f32) -> i32 {
    (value / square_size).round() as i32
}

/// Rounds x and z of `target` onto the cell grid and places the result at
/// `elevation`
pub fn snap_to_grid(target: Vec3, elevation: f32, config: &BoardConfig) -> Vec3 {
    let square = config.square_size;
    Vec3::new(
        round_to_cell(target.x, square) as f32 * square,
        elevation,
        round_to_cell(target.z, square) as f32 * square,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_world_positions() {
        let config = BoardConfig::default();

        let origin = GridCoord { x: 0, z: 0 }.world_position(&config, 0.0);
        assert_eq!(origin, Vec3::new(-4.0, 0.0, -4.0));

        let far = GridCoord { x: 7, z: 7 }.world_position(&config, 0.1);
        assert_eq!(far, Vec3::new(3.0, 0.1, 3.0));
    }

    #[test]
    fn test_from_world_inverts_world_position() {
        let config = BoardConfig::default();
        for x in 0..8 {
            for z in 0..8 {
                let coord = GridCoord { x, z };
                let world = coord.world_position(&config, 0.1);
                assert_eq!(GridCoord::from_world(world, &config), Ok(coord));
            }
        }
    }

    #[test]
    fn test_from_world_rounds_to_nearest_cell() {
        let config = BoardConfig::default();
        let coord = GridCoord::from_world(Vec3::new(-0.6, 3.0, 1.4), &config);
        assert_eq!(coord, Ok(GridCoord { x: 3, z: 5 }));
    }

    #[test]
    fn test_from_world_off_board() {
        let config = BoardConfig::default();
        let err = GridCoord::from_world(Vec3::new(4.0, 0.0, 0.0), &config).unwrap_err();
        assert_eq!(
            err,
            CoreError::OffBoard {
                x: 8,
                z: 4,
                size: 8
            }
        );
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let config = BoardConfig::default();
        assert!(GridCoord::new(7, 7, &config).is_ok());
        assert!(GridCoord::new(8, 0, &config).is_err());
        assert!(GridCoord::new(0, 8, &config).is_err());
    }

    #[test]
    fn test_all_covers_board_in_order() {
        let config = BoardConfig {
            size: 4,
            ..default()
        };
        let cells: Vec<_> = GridCoord::all(&config).collect();

        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], GridCoord { x: 0, z: 0 });
        assert_eq!(cells[1], GridCoord { x: 0, z: 1 });
        assert_eq!(cells[15], GridCoord { x: 3, z: 3 });
    }

    #[test]
    fn test_is_dark_follows_parity() {
        assert!(!GridCoord { x: 0, z: 0 }.is_dark());
        assert!(GridCoord { x: 1, z: 0 }.is_dark());
        assert!(GridCoord { x: 1, z: 2 }.is_dark());
        assert!(!GridCoord { x: 3, z: 5 }.is_dark());
    }

    #[test]
    fn test_snap_keeps_requested_elevation() {
        let config = BoardConfig::default();
        let snapped = snap_to_grid(Vec3::new(2.2, 0.0, -0.7), 0.1, &config);
        assert_eq!(snapped, Vec3::new(2.0, 0.1, -1.0));
    }

    #[test]
    fn test_snap_with_scaled_cells() {
        let config = BoardConfig {
            square_size: 2.0,
            ..default()
        };
        let snapped = snap_to_grid(Vec3::new(2.9, 5.0, -3.2), 0.5, &config);
        assert_eq!(snapped, Vec3::new(2.0, 0.5, -4.0));
        assert_eq!(
            GridCoord::from_world(snapped, &config),
            Ok(GridCoord { x: 5, z: 2 })
        );
    }
}
