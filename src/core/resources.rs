//! Core configuration resources
//!
//! [`BoardConfig`] describes the board and the piece set, [`SceneConfig`] the
//! camera and lighting. Both are plain resources with defaults; they are
//! inserted by [`crate::core::CorePlugin`] unless the caller provided its own.

use super::error::{CoreError, CoreResult};
use bevy::prelude::*;

/// Largest board edge accepted by [`BoardConfig::validate`]
pub const MAX_BOARD_SIZE: u8 = 16;

/// Board geometry, piece placement and colours
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct BoardConfig {
    /// Cells per board edge
    pub size: u8,
    /// World-space edge length of one cell
    pub square_size: f32,
    /// Rows filled with pieces at each end of the board
    pub home_rows: u8,
    /// Piece cylinder radius
    pub piece_radius: f32,
    /// Piece cylinder height
    pub piece_height: f32,
    /// Y of a piece's centre when resting on the board
    pub piece_elevation: f32,
    /// Emissive overlay applied to the held piece
    pub highlight_color: Color,
    pub light_square_color: Color,
    pub dark_square_color: Color,
    pub white_piece_color: Color,
    pub black_piece_color: Color,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 8,
            square_size: 1.0,
            home_rows: 3,
            piece_radius: 0.4,
            piece_height: 0.2,
            piece_elevation: 0.1,
            highlight_color: Color::srgb(1.0, 0.0, 0.0),
            light_square_color: Color::WHITE,
            dark_square_color: Color::BLACK,
            white_piece_color: Color::WHITE,
            black_piece_color: Color::BLACK,
        }
    }
}

impl BoardConfig {
    /// Offset that centres grid indices on the origin (`size / 2`)
    pub fn half_extent(&self) -> i32 {
        i32::from(self.size) / 2
    }

    /// Checks the invariants the board and piece builders rely on
    pub fn validate(&self) -> CoreResult<()> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(invalid(format!(
                "size {} must be between 1 and {}",
                self.size, MAX_BOARD_SIZE
            )));
        }
        if !self.size.is_multiple_of(2) {
            return Err(invalid(format!("size {} must be even", self.size)));
        }
        if u16::from(self.home_rows) * 2 > u16::from(self.size) {
            return Err(invalid(format!(
                "{} home rows per side do not fit on a board of size {}",
                self.home_rows, self.size
            )));
        }

        for (name, value) in [
            ("square_size", self.square_size),
            ("piece_radius", self.piece_radius),
            ("piece_height", self.piece_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !self.piece_elevation.is_finite() {
            return Err(invalid("piece_elevation must be finite".to_string()));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> CoreError {
    CoreError::InvalidBoard { reason }
}

/// Camera, light and background settings
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct SceneConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub light_position: Vec3,
    pub light_color: Color,
    /// Point light intensity in lumens
    pub light_intensity: f32,
    pub light_range: f32,
    pub clear_color: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Vec3::new(0.0, 10.0, 10.0),
            camera_target: Vec3::ZERO,
            light_position: Vec3::new(10.0, 10.0, 10.0),
            light_color: Color::WHITE,
            light_intensity: 2_000_000.0,
            light_range: 100.0,
            clear_color: Color::BLACK,
        }
    }
}
