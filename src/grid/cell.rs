//! Grid domain: cell kinds and the cells that make up a level.

use bevy::prelude::*;

/// Index of a cell inside its [`LevelGrid`](super::LevelGrid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub usize);

/// Tile classification used by the movement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    ShortFloor,
    LongFloor,
    ShortGoUp,
    LongGoUp,
    ShortGoDown,
    LongGoDown,
    ShortGoUpAndDown,
    LongGoUpAndDown,
    /// Bidirectional climb that ignores horizontal centering.
    Ladder,
    ShortEmpty,
    LongEmpty,
    /// Not walkable. Only matters as a neighbor that blocks sideways movement.
    Plate,
}

impl CellKind {
    /// Parse a level layout glyph.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        let kind = match glyph {
            'f' => CellKind::ShortFloor,
            'F' => CellKind::LongFloor,
            'u' => CellKind::ShortGoUp,
            'U' => CellKind::LongGoUp,
            'd' => CellKind::ShortGoDown,
            'D' => CellKind::LongGoDown,
            'b' => CellKind::ShortGoUpAndDown,
            'B' => CellKind::LongGoUpAndDown,
            'H' => CellKind::Ladder,
            '.' => CellKind::ShortEmpty,
            '_' => CellKind::LongEmpty,
            'P' => CellKind::Plate,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, CellKind::ShortEmpty | CellKind::LongEmpty)
    }

    /// Movers landing in these cells are settled onto the cell's vertical center.
    pub fn is_platform(self) -> bool {
        matches!(
            self,
            CellKind::ShortFloor | CellKind::LongFloor | CellKind::ShortGoDown | CellKind::LongGoDown
        )
    }

    /// Kinds an entity can walk sideways on.
    pub fn is_walkable(self) -> bool {
        matches!(
            self,
            CellKind::ShortFloor
                | CellKind::LongFloor
                | CellKind::ShortGoUp
                | CellKind::LongGoUp
                | CellKind::ShortGoDown
                | CellKind::LongGoDown
                | CellKind::ShortGoUpAndDown
                | CellKind::LongGoUpAndDown
        )
    }

    /// A neighbor of this kind stops sideways movement at the cell center.
    pub fn blocks_sideways(self) -> bool {
        self.is_empty() || self == CellKind::Plate
    }

    /// Tile color used by the level renderer and the debug overlay.
    pub fn color(self) -> Color {
        match self {
            CellKind::ShortFloor | CellKind::LongFloor => Color::srgb(0.4, 0.5, 0.4),
            CellKind::ShortGoUp | CellKind::LongGoUp => Color::srgb(0.3, 0.5, 0.8),
            CellKind::ShortGoDown | CellKind::LongGoDown => Color::srgb(0.8, 0.5, 0.3),
            CellKind::ShortGoUpAndDown | CellKind::LongGoUpAndDown => Color::srgb(0.6, 0.4, 0.8),
            CellKind::Ladder => Color::srgb(0.7, 0.6, 0.3),
            CellKind::ShortEmpty | CellKind::LongEmpty => Color::srgba(0.2, 0.2, 0.25, 0.3),
            CellKind::Plate => Color::srgb(0.85, 0.85, 0.9),
        }
    }
}

/// One tile of the level grid. Cells are owned by the grid and only read by movers.
#[derive(Debug, Clone)]
pub struct Cell {
    pub id: CellId,
    pub kind: CellKind,
    pub column: usize,
    pub row: usize,
    /// Tile center in grid space (y grows downward).
    pub middle: Vec2,
    pub left: Option<CellId>,
    pub right: Option<CellId>,
}
