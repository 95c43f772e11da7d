//! Movement domain: per-tick movement resolution against the level grid.

use bevy::prelude::*;

use crate::grid::{CellId, LevelGrid};
use crate::movement::rules::{can_move_down, can_move_left, can_move_right, can_move_up};
use crate::movement::{GridPosition, MovementState, Mover, PlayerMovedEvent};

/// Tolerance used to match a direction vector against a cardinal direction.
pub const DIRECTION_EPSILON: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    Up,
    Down,
    Left,
    Right,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [
        Cardinal::Up,
        Cardinal::Down,
        Cardinal::Left,
        Cardinal::Right,
    ];

    /// Match `direction` against the four cardinals. Diagonal, zero-length
    /// and otherwise ambiguous vectors match none.
    pub fn classify(direction: Vec2) -> Option<Self> {
        Self::ALL.into_iter().find(|cardinal| {
            let target = cardinal.to_vec2();
            (direction.x - target.x).abs() < DIRECTION_EPSILON
                && (direction.y - target.y).abs() < DIRECTION_EPSILON
        })
    }

    /// Unit vector in grid space (y grows downward).
    pub fn to_vec2(self) -> Vec2 {
        match self {
            Cardinal::Up => Vec2::NEG_Y,
            Cardinal::Down => Vec2::Y,
            Cardinal::Left => Vec2::NEG_X,
            Cardinal::Right => Vec2::X,
        }
    }
}

/// What a single [`resolve_move`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveOutcome {
    /// True when the position delta was applied.
    pub moved: bool,
    /// Set when this call resolved a different cell than the previous one.
    pub entered_cell: Option<CellId>,
    /// True when this call settled the mover onto a platform.
    pub snapped: bool,
    /// Notification to publish. Only players produce one, and only on a move.
    pub player_moved: Option<PlayerMovedEvent>,
}

/// Attempt to move `position` one tick in `direction`.
///
/// Outside the grid the move always succeeds. Inside, a mover that just
/// entered a platform cell is first settled onto it (its center placed on the
/// cell's vertical center, the same height the climb rules stop at), then the
/// directional rule for the occupied cell decides. Rules see the center from
/// before the snap; the delta is applied to the snapped position.
pub fn resolve_move(
    grid: &LevelGrid,
    mover: &Mover,
    state: &mut MovementState,
    position: &mut GridPosition,
    direction: Vec2,
    elapsed_secs: f32,
) -> MoveOutcome {
    let center = mover.center(position.0);
    let mut outcome = MoveOutcome::default();

    let Some(cell) = grid.cell_at(center) else {
        apply_delta(mover, position, direction, elapsed_secs);
        outcome.moved = true;
        outcome.player_moved = report(mover, center);
        return outcome;
    };

    if state.previous_cell != Some(cell.id) {
        state.previous_cell = Some(cell.id);
        state.has_snapped_to_platform = false;
        outcome.entered_cell = Some(cell.id);
    }

    if cell.kind.is_platform() && !state.has_snapped_to_platform {
        state.has_snapped_to_platform = true;
        position.0.y = cell.middle.y - mover.height() / 2.0;
        outcome.snapped = true;
    }

    let side = grid.cell_side_length();
    let can_move = match Cardinal::classify(direction) {
        Some(Cardinal::Up) => can_move_up(cell, center, side, mover.can_move_over_empty_cells),
        Some(Cardinal::Down) => can_move_down(cell, center, side),
        Some(Cardinal::Left) => can_move_left(cell, grid.left_of(cell), center),
        Some(Cardinal::Right) => can_move_right(cell, grid.right_of(cell), center),
        None => false,
    };

    if can_move {
        apply_delta(mover, position, direction, elapsed_secs);
        state.previous_move_direction = direction;
        outcome.moved = true;
        outcome.player_moved = report(mover, center);
    }

    outcome
}

fn apply_delta(mover: &Mover, position: &mut GridPosition, direction: Vec2, elapsed_secs: f32) {
    position.0 += elapsed_secs * mover.speed * direction;
}

fn report(mover: &Mover, center: Vec2) -> Option<PlayerMovedEvent> {
    mover.is_player.then_some(PlayerMovedEvent { center })
}
