//! Movement domain: grid-bound movers, legality rules, and the movement resolver.

mod bootstrap;
mod components;
mod events;
mod resolver;
mod resources;
mod rules;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Enemy, GridPosition, MovementState, Mover, Player};
pub use events::PlayerMovedEvent;
pub use resolver::{Cardinal, MoveOutcome, resolve_move};
pub use resources::{MovementInput, MovementTuning};

pub(crate) use systems::log_outcome;

use bevy::prelude::*;

use crate::core::GameState;
use crate::grid::build_level_grid;
use crate::movement::bootstrap::{configure_tuning, spawn_movers};
use crate::movement::systems::{move_player, read_input, sync_mover_transforms};

/// Ordering of the per-frame movement work.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Sample input.
    Input,
    /// Resolve moves for every mover.
    Resolve,
    /// Mirror grid positions into transforms.
    Sync,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<PlayerMovedEvent>()
            .configure_sets(
                Update,
                (MovementSet::Input, MovementSet::Resolve, MovementSet::Sync)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                OnEnter(GameState::Playing),
                (configure_tuning, spawn_movers)
                    .chain()
                    .after(build_level_grid),
            )
            .add_systems(Update, read_input.in_set(MovementSet::Input))
            .add_systems(Update, move_player.in_set(MovementSet::Resolve))
            .add_systems(Update, sync_mover_transforms.in_set(MovementSet::Sync));
    }
}
