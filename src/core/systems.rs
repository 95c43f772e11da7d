//! Core domain: run setup systems.

use bevy::prelude::*;

use crate::content::LoadedContent;
use crate::core::RunConfig;

/// Apply the configured seed, if any, before gameplay systems use it.
pub(crate) fn configure_run(content: Res<LoadedContent>, mut run_config: ResMut<RunConfig>) {
    if let Some(seed) = content.defaults.seed {
        run_config.seed = seed;
    }

    info!("Starting run with seed: {}", run_config.seed);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
