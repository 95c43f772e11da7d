//! Content domain: RON data loading for gameplay defaults and levels.

mod data;
mod loader;


pub use data::{GameplayDefaults, LevelDef};
pub use loader::load_all_content;

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

const CONTENT_DIR: &str = "assets/data";

/// Content loaded at startup, or the built-in fallback when loading failed.
#[derive(Resource, Debug, Clone, Default)]
pub struct LoadedContent {
    pub defaults: GameplayDefaults,
    pub level: LevelDef,
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoadedContent>()
            .add_systems(Startup, load_content);
    }
}

fn load_content(
    mut content: ResMut<LoadedContent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    match load_all_content(Path::new(CONTENT_DIR)) {
        Ok((defaults, level)) => {
            info!(
                "Loaded content: level '{}' ({} rows), player_speed={}",
                level.name,
                level.rows.len(),
                defaults.player_speed
            );
            *content = LoadedContent { defaults, level };
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!("Using built-in gameplay defaults and fallback level");
            *content = LoadedContent::default();
        }
    }

    game_state.set(GameState::Playing);
}
