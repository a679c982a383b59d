//! Camera, light and background
//!
//! Bevy's render loop draws the world every frame; the only thing this crate
//! contributes is the static scene the loop renders: one perspective camera
//! looking at the board centre and one point light.

use crate::core::SceneConfig;
use bevy::prelude::*;

/// Marker for the camera the pointer ray is cast from
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct BoardCamera;

pub fn perspective_from_config(scene: &SceneConfig) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: scene.fov_degrees.to_radians(),
        near: scene.near,
        far: scene.far,
        ..default()
    }
}

pub fn setup_scene(mut commands: Commands, scene: Res<SceneConfig>) {
    commands.insert_resource(ClearColor(scene.clear_color));

    commands.spawn((
        PointLight {
            color: scene.light_color,
            intensity: scene.light_intensity,
            range: scene.light_range,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(scene.light_position),
        Name::new("Point Light"),
    ));

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective_from_config(&scene)),
        Transform::from_translation(scene.camera_position)
            .looking_at(scene.camera_target, Vec3::Y),
        BoardCamera,
        Name::new("Board Camera"),
    ));

    info!(
        "[SCENE] Camera at {:?} looking at {:?}, fov {} deg",
        scene.camera_position, scene.camera_target, scene.fov_degrees
    );
}

pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_uses_radians() {
        let projection = perspective_from_config(&SceneConfig::default());
        assert!((projection.fov - 75f32.to_radians()).abs() < f32::EPSILON);
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 1000.0);
    }
}
