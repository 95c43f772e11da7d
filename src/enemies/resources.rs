//! Enemies domain: shared chase state.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Where the player was last reported, from `PlayerMovedEvent`.
#[derive(Resource, Debug, Default)]
pub struct PlayerSighting {
    pub last_center: Option<Vec2>,
}

/// Deterministic source for enemy tie-breaks, reseeded from `RunConfig` each run.
#[derive(Resource, Debug)]
pub struct EnemyRng(pub ChaCha8Rng);

impl Default for EnemyRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(0))
    }
}
