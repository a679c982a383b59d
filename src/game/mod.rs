//! Game module - piece selection and placement
//!
//! The only runtime state in the application is the [`resources::Selection`]
//! controller. Pointer-down presses become
//! [`events::PointerPick`] messages in `GameSystems::Input`; they are fed
//! through the controller and applied to piece transforms in
//! `GameSystems::Execution`.
//!
//! - `components` - `Highlighted` marker
//! - `events` - `PointerPick`
//! - `resources` - `Selection` state machine
//! - `systems` - ray casting and placement
//! - `types` - `GridCoord` and grid snapping

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use plugin::GamePlugin;
