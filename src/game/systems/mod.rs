//! Game systems
//!
//! - `input` - pointer-down ray casting into [`PointerPick`](crate::game::events::PointerPick) messages
//! - `movement` - selection state transitions applied to pieces

pub mod input;
pub mod movement;

pub use input::*;
pub use movement::*;
