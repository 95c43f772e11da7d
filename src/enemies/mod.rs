//! Enemies domain: chasing the player across the level grid.

mod ai;
mod resources;
mod systems;


pub use ai::chase_candidates;
pub use resources::{EnemyRng, PlayerSighting};

use bevy::prelude::*;

use crate::core::{GameState, configure_run};
use crate::enemies::systems::{seed_enemy_rng, steer_enemies, track_player_sightings};
use crate::movement::MovementSet;

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerSighting>()
            .init_resource::<EnemyRng>()
            .add_systems(
                OnEnter(GameState::Playing),
                seed_enemy_rng.after(configure_run),
            )
            .add_systems(
                Update,
                (track_player_sightings, steer_enemies)
                    .chain()
                    .in_set(MovementSet::Resolve),
            );
    }
}
