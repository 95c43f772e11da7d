mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod enemies;
mod grid;
mod movement;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Grid Climber".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        grid::GridPlugin,
        movement::MovementPlugin,
        enemies::EnemiesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
