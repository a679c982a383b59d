//! Rendering module - 3D checkerboard scene with Bevy
//!
//! - `board` - Board square generation
//! - `pieces` - Piece layout and spawning
//! - `scene` - Camera, light and clear colour
//! - `utils` - Square component and material builders
//!
//! Uses `Mesh3d`, `MeshMaterial3d<StandardMaterial>` and `Transform`. Squares
//! share materials per colour; each piece owns its material so the selection
//! highlight stays local to one piece.

pub mod board;
pub mod pieces;
pub mod scene;
pub mod utils;

pub use board::*;
pub use pieces::*;
pub use scene::*;
pub use utils::*;
