//! Piece-related components

use bevy::prelude::*;

/// Marks the piece currently lifted by the selection controller
///
/// Present on at most one entity. Added together with the emissive highlight
/// and removed when the piece is dropped.
#[derive(Component, Clone, Copy, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct Highlighted;
