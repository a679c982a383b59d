//! Pointer tracking
//!
//! Keeps the last cursor position as a normalized device coordinate: x grows
//! to the right, y grows upward, both span [-1, 1] across the window. The
//! pointer-down ray is built from this value, not from the live cursor, so a
//! press always uses the position of the most recent move.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::CursorMoved;

/// Resource tracking the pointer in normalized device coordinates
///
/// `ndc` is `None` until the first `CursorMoved` arrives.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PointerPosition {
    pub ndc: Option<Vec2>,
}

impl PointerPosition {
    /// Window-space cursor position to NDC; `None` for a degenerate window
    pub fn normalize(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            cursor.x / window_size.x * 2.0 - 1.0,
            -(cursor.y / window_size.y) * 2.0 + 1.0,
        ))
    }

    /// NDC back to logical viewport pixels (origin top-left)
    pub fn viewport_position(&self, viewport_size: Vec2) -> Option<Vec2> {
        self.ndc.map(|ndc| {
            Vec2::new(
                (ndc.x + 1.0) * 0.5 * viewport_size.x,
                (1.0 - ndc.y) * 0.5 * viewport_size.y,
            )
        })
    }
}

/// Pointer-move handler: refreshes [`PointerPosition`] from `CursorMoved`
pub fn track_pointer_system(
    mut cursor_moves: MessageReader<CursorMoved>,
    windows: Query<&Window>,
    mut pointer: ResMut<PointerPosition>,
) {
    for moved in cursor_moves.read() {
        let Ok(window) = windows.get(moved.window) else {
            continue;
        };
        pointer.ndc = PointerPosition::normalize(moved.position, window.size());
        trace!(
            "[POINTER] Cursor ({:.1}, {:.1}) -> ndc {:?}",
            moved.position.x,
            moved.position.y,
            pointer.ndc
        );
    }
}
