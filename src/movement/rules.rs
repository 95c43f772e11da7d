//! Movement domain: directional legality rules.
//!
//! Each rule is a pure function of the occupied cell and the mover's center.
//! Grid space has y growing downward, so "above the cell center" means a
//! smaller y than `cell.middle.y`.

use bevy::prelude::*;

use crate::grid::{Cell, CellKind};

/// Climbing up.
///
/// Go-down cells only let the mover climb back until its center reaches the
/// cell center. Long ladders require the mover to stay over the ladder.
pub fn can_move_up(
    cell: &Cell,
    center: Vec2,
    cell_side_length: f32,
    can_move_over_empty_cells: bool,
) -> bool {
    match cell.kind {
        CellKind::ShortGoDown | CellKind::LongGoDown => center.y > cell.middle.y,
        CellKind::ShortGoUp | CellKind::ShortGoUpAndDown | CellKind::Ladder => true,
        CellKind::LongGoUp | CellKind::LongGoUpAndDown => {
            is_over_ladder(cell, center, cell_side_length)
        }
        CellKind::ShortEmpty | CellKind::LongEmpty => can_move_over_empty_cells,
        CellKind::ShortFloor | CellKind::LongFloor | CellKind::Plate => false,
    }
}

/// Climbing down. Unlike [`can_move_up`], empty cells never allow it.
pub fn can_move_down(cell: &Cell, center: Vec2, cell_side_length: f32) -> bool {
    match cell.kind {
        CellKind::ShortGoUp | CellKind::LongGoUp => center.y < cell.middle.y,
        CellKind::ShortGoDown | CellKind::ShortGoUpAndDown | CellKind::Ladder => true,
        CellKind::LongGoDown | CellKind::LongGoUpAndDown => {
            is_over_ladder(cell, center, cell_side_length)
        }
        CellKind::ShortFloor
        | CellKind::LongFloor
        | CellKind::ShortEmpty
        | CellKind::LongEmpty
        | CellKind::Plate => false,
    }
}

/// Walking left. `left` is the cell's left neighbor, absent at the grid edge.
pub fn can_move_left(cell: &Cell, left: Option<&Cell>, center: Vec2) -> bool {
    can_move_sideways(cell, left, center.x < cell.middle.x)
}

/// Walking right. `right` is the cell's right neighbor, absent at the grid edge.
pub fn can_move_right(cell: &Cell, right: Option<&Cell>, center: Vec2) -> bool {
    can_move_sideways(cell, right, center.x > cell.middle.x)
}

// Only walkable cells allow sideways movement. Toward a missing, empty or
// plate neighbor the mover stops once it is past the cell center.
fn can_move_sideways(cell: &Cell, neighbor: Option<&Cell>, past_center: bool) -> bool {
    if !cell.kind.is_walkable() {
        return false;
    }

    let neighbor_blocks = neighbor.is_none_or(|n| n.kind.blocks_sideways());
    !(neighbor_blocks && past_center)
}

fn is_over_ladder(cell: &Cell, center: Vec2, cell_side_length: f32) -> bool {
    let half = cell_side_length / 2.0;
    center.x >= cell.middle.x - half && center.x <= cell.middle.x + half
}
