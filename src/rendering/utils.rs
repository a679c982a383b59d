//! Board rendering utilities - square component and material builders
//!
//! - **BoardSquare**: Component identifying a board cell and its colour
//! - **SquareColor**: Checkerboard colour, white iff `x + z` is even
//! - Material builders shared by the board and piece builders

use crate::core::BoardConfig;
use crate::game::types::GridCoord;
use bevy::prelude::*;

/// Checkerboard colour of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect, Default)]
pub enum SquareColor {
    #[default]
    White,
    Black,
}

impl SquareColor {
    pub fn for_coord(coord: GridCoord) -> Self {
        if coord.is_dark() {
            SquareColor::Black
        } else {
            SquareColor::White
        }
    }

    pub fn render_color(self, config: &BoardConfig) -> Color {
        match self {
            SquareColor::White => config.light_square_color,
            SquareColor::Black => config.dark_square_color,
        }
    }
}

/// Fixed board cell; never moves or changes after creation
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct BoardSquare {
    pub coord: GridCoord,
    pub color: SquareColor,
}

impl BoardSquare {
    pub fn at(coord: GridCoord) -> Self {
        Self {
            coord,
            color: SquareColor::for_coord(coord),
        }
    }

    pub fn is_white(&self) -> bool {
        self.color == SquareColor::White
    }
}

/// Flat, unlit material visible from both sides, used for board squares
pub fn square_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

/// Lit material for a single piece; emissive starts neutral
pub fn piece_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        emissive: LinearRgba::BLACK,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_color_parity() {
        assert_eq!(
            SquareColor::for_coord(GridCoord { x: 0, z: 0 }),
            SquareColor::White
        );
        assert_eq!(
            SquareColor::for_coord(GridCoord { x: 0, z: 1 }),
            SquareColor::Black
        );
        assert_eq!(
            SquareColor::for_coord(GridCoord { x: 7, z: 7 }),
            SquareColor::White
        );
    }

    #[test]
    fn test_adjacent_squares_alternate() {
        for x in 0..7u8 {
            for z in 0..8u8 {
                let a = BoardSquare::at(GridCoord { x, z });
                let b = BoardSquare::at(GridCoord { x: x + 1, z });
                assert_ne!(a.is_white(), b.is_white());
            }
        }
    }

    #[test]
    fn test_square_material_is_unlit_and_double_sided() {
        let material = square_material(Color::WHITE);
        assert!(material.unlit);
        assert!(material.double_sided);
        assert!(material.cull_mode.is_none());
    }
}
