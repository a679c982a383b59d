//! Window configuration resource
//!
//! Centralizes window settings for the application. On wasm32 the window is
//! bound to the `<canvas>` matched by [`WindowConfig::canvas`].

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// CSS selector of the canvas to render into (web only)
    pub canvas: String,
    /// Resize the canvas to its parent element (web only)
    pub fit_canvas_to_parent: bool,
    /// Filter handed to Bevy's `LogPlugin`
    pub log_filter: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "XFCheckers".to_string(),
            width: 1366,
            height: 768,
            resizable: true,
            canvas: "#bevy".to_string(),
            fit_canvas_to_parent: true,
            log_filter: "wgpu=error,naga=warn,bevy_render=warn,xfcheckers=debug".to_string(),
        }
    }
}

impl WindowConfig {
    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            canvas: Some(self.canvas.clone()),
            fit_canvas_to_parent: self.fit_canvas_to_parent,
            ..default()
        }
    }
}
