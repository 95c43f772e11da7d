//! Core domain: game state, run configuration, and camera.

mod resources;
mod state;
mod systems;

pub use resources::RunConfig;
pub use state::GameState;

pub(crate) use systems::configure_run;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), configure_run);
    }
}
