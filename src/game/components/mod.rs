//! Game components module
//!
//! Components are pure data structures with no logic.

pub mod piece;

pub use piece::*;
