//! System organization using SystemSets
//!
//! Each frame runs:
//! 1. **Input** - pointer tracking and pointer-down ray casts
//! 2. **Execution** - selection transitions and piece placement
//!
//! `Execution` reads the [`PointerPick`](crate::game::events::PointerPick)
//! messages `Input` wrote in the same frame.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Pointer move and pointer down
    Input,
    /// Selection state machine and transform updates
    Execution,
}
