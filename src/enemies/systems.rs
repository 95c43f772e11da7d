//! Enemies domain: sighting tracking and per-frame steering.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::RunConfig;
use crate::enemies::{EnemyRng, PlayerSighting, chase_candidates};
use crate::grid::LevelGrid;
use crate::movement::{
    Cardinal, Enemy, GridPosition, MovementState, Mover, PlayerMovedEvent, log_outcome,
    resolve_move,
};

pub(crate) fn seed_enemy_rng(run_config: Res<RunConfig>, mut rng: ResMut<EnemyRng>) {
    rng.0 = ChaCha8Rng::seed_from_u64(run_config.seed);
    debug!("Seeded enemy rng with {}", run_config.seed);
}

pub(crate) fn track_player_sightings(
    mut events: MessageReader<PlayerMovedEvent>,
    mut sighting: ResMut<PlayerSighting>,
) {
    if let Some(event) = events.read().last() {
        sighting.last_center = Some(event.center);
    }
}

pub(crate) fn steer_enemies(
    time: Res<Time>,
    grid: Option<Res<LevelGrid>>,
    sighting: Res<PlayerSighting>,
    mut rng: ResMut<EnemyRng>,
    mut query: Query<(Entity, &Mover, &mut MovementState, &mut GridPosition), With<Enemy>>,
) {
    let Some(grid) = grid else {
        return;
    };

    let dt = time.delta_secs();

    for (entity, mover, mut state, mut position) in &mut query {
        let fallback = Cardinal::ALL[rng.0.random_range(0..Cardinal::ALL.len())];
        let candidates = chase_candidates(
            mover.center(position.0),
            sighting.last_center,
            state.previous_move_direction,
            fallback,
        );

        for cardinal in candidates {
            let outcome = resolve_move(
                &grid,
                mover,
                &mut state,
                &mut position,
                cardinal.to_vec2(),
                dt,
            );
            log_outcome(entity, &grid, &outcome);

            if outcome.moved {
                break;
            }
        }
    }
}
