//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::GameplayDefaults;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub player_speed: f32,
    pub player_size: Vec2,
    pub enemy_size: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_defaults(&GameplayDefaults::default())
    }
}

impl MovementTuning {
    pub fn from_defaults(defaults: &GameplayDefaults) -> Self {
        Self {
            player_speed: defaults.player_speed,
            player_size: Vec2::new(defaults.player_size.0, defaults.player_size.1),
            enemy_size: Vec2::new(defaults.enemy_size.0, defaults.enemy_size.1),
        }
    }
}

/// Requested player direction for this frame in grid space. Zero when idle.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub direction: Vec2,
}
