use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use snake_arcade::game::{DARK_BG_COLOR, GamePlugin, WINDOW_HEIGHT, WINDOW_WIDTH};
use snake_arcade::rendering::RenderingPlugin;
use snake_arcade::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                    title: "Neon Snake".to_string(),
                    resizable: false,
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(DARK_BG_COLOR))
        .add_plugins((GamePlugin, RenderingPlugin, UiPlugin))
        .run();
}
