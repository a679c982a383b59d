//! Game resources
//!
//! - [`Selection`] - Idle/Holding state of the selection controller

pub mod selection;

pub use selection::*;
