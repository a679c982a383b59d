use bevy::log::LogPlugin;
use bevy::prelude::*;
use xfcheckers::core::WindowConfig;
use xfcheckers::CheckersPlugin;

fn main() {
    let window_config = WindowConfig::default();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window_config.to_window()),
                    ..default()
                })
                .set(LogPlugin {
                    filter: window_config.log_filter.clone(),
                    ..default()
                }),
        )
        .insert_resource(window_config)
        .add_plugins(CheckersPlugin)
        .run();
}
