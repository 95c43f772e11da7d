//! Movement domain: resolving player movement each frame.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::grid::LevelGrid;
use crate::movement::{
    GridPosition, MoveOutcome, MovementInput, MovementState, Mover, Player, PlayerMovedEvent,
    resolve_move,
};

pub(crate) fn move_player(
    time: Res<Time>,
    grid: Option<Res<LevelGrid>>,
    input: Res<MovementInput>,
    mut moved_events: MessageWriter<PlayerMovedEvent>,
    mut query: Query<(Entity, &Mover, &mut MovementState, &mut GridPosition), With<Player>>,
) {
    let Some(grid) = grid else {
        return;
    };

    // Idle frames must not snap or report anything
    if input.direction == Vec2::ZERO {
        return;
    }

    let dt = time.delta_secs();

    for (entity, mover, mut state, mut position) in &mut query {
        let outcome = resolve_move(
            &grid,
            mover,
            &mut state,
            &mut position,
            input.direction,
            dt,
        );
        log_outcome(entity, &grid, &outcome);

        if let Some(event) = outcome.player_moved {
            moved_events.write(event);
        }
    }
}

/// Debug-log cell transitions and platform snaps.
pub(crate) fn log_outcome(entity: Entity, grid: &LevelGrid, outcome: &MoveOutcome) {
    if let Some(cell) = outcome.entered_cell.and_then(|id| grid.cell(id)) {
        debug!(
            "{:?} entered cell ({}, {}) kind={:?}",
            entity, cell.column, cell.row, cell.kind
        );
    }
    if outcome.snapped {
        debug!("{:?} snapped to platform", entity);
    }
}
