//! Movement domain: components for grid-bound movers.

use bevy::prelude::*;

use crate::grid::CellId;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug)]
pub struct Enemy;

/// Top-left corner of a mover in grid space (y grows downward).
/// This is the authoritative location; `Transform` is synced from it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPosition(pub Vec2);

/// Movement parameters of an entity that walks and climbs on the level grid.
#[derive(Component, Debug, Clone)]
pub struct Mover {
    /// Grid units per second.
    pub speed: f32,
    /// Only the player reports its moves with `PlayerMovedEvent`.
    pub is_player: bool,
    /// Allows climbing up through empty cells.
    pub can_move_over_empty_cells: bool,
    width: f32,
    height: f32,
}

impl Mover {
    /// `visual_size` is read once here; movers without one are treated as points.
    pub fn new(
        speed: f32,
        is_player: bool,
        can_move_over_empty_cells: bool,
        visual_size: Option<Vec2>,
    ) -> Self {
        let size = visual_size.unwrap_or(Vec2::ZERO);
        Self {
            speed,
            is_player,
            can_move_over_empty_cells,
            width: size.x,
            height: size.y,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center of the mover when its top-left corner is at `position`.
    pub fn center(&self, position: Vec2) -> Vec2 {
        position + self.size() / 2.0
    }
}

/// Per-mover cell tracking used by the movement resolver.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct MovementState {
    /// Cell resolved on the last call that found one.
    pub previous_cell: Option<CellId>,
    /// Set once the mover was settled onto `previous_cell`; cleared on cell change.
    pub has_snapped_to_platform: bool,
    /// Last direction that produced a successful move.
    pub previous_move_direction: Vec2,
}
