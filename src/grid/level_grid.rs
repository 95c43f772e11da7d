//! Grid domain: the active level grid and its construction from level data.

use bevy::prelude::*;

use crate::content::LevelDef;
use crate::grid::{Cell, CellId, CellKind};

/// Error type for level layouts that cannot become a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridBuildError {
    EmptyLayout,
    NonPositiveSideLength(f32),
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownGlyph {
        row: usize,
        column: usize,
        glyph: char,
    },
    SpawnOutsideGrid {
        column: usize,
        row: usize,
    },
}

impl std::fmt::Display for GridBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridBuildError::EmptyLayout => write!(f, "level layout has no cells"),
            GridBuildError::NonPositiveSideLength(side) => {
                write!(f, "cell side length must be positive, got {}", side)
            }
            GridBuildError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells but the first row has {}",
                row, found, expected
            ),
            GridBuildError::UnknownGlyph { row, column, glyph } => {
                write!(f, "unknown tile '{}' at column {}, row {}", glyph, column, row)
            }
            GridBuildError::SpawnOutsideGrid { column, row } => {
                write!(f, "spawn cell ({}, {}) lies outside the grid", column, row)
            }
        }
    }
}

impl std::error::Error for GridBuildError {}

/// The level grid. Cells are stored row-major; each row is a left/right chain
/// whose ends have no neighbor. Grid space has its origin at the top-left
/// corner of the level and y grows downward.
#[derive(Resource, Debug, Clone)]
pub struct LevelGrid {
    columns: usize,
    rows: usize,
    cell_side_length: f32,
    cells: Vec<Cell>,
}

impl LevelGrid {
    pub fn from_level(level: &LevelDef) -> Result<Self, GridBuildError> {
        let grid = Self::from_rows(&level.rows, level.cell_side_length)?;

        let spawns = std::iter::once(level.player_spawn).chain(level.enemies.iter().map(|e| e.cell));
        for (column, row) in spawns {
            if grid.cell_id(column, row).is_none() {
                return Err(GridBuildError::SpawnOutsideGrid { column, row });
            }
        }

        Ok(grid)
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S], cell_side_length: f32) -> Result<Self, GridBuildError> {
        if cell_side_length.is_nan() || cell_side_length <= 0.0 {
            return Err(GridBuildError::NonPositiveSideLength(cell_side_length));
        }

        let columns = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if columns == 0 {
            return Err(GridBuildError::EmptyLayout);
        }

        let mut cells = Vec::with_capacity(columns * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != columns {
                return Err(GridBuildError::RaggedRow {
                    row,
                    expected: columns,
                    found,
                });
            }

            for (column, glyph) in line.chars().enumerate() {
                let kind = CellKind::from_glyph(glyph)
                    .ok_or(GridBuildError::UnknownGlyph { row, column, glyph })?;
                let id = CellId(row * columns + column);

                cells.push(Cell {
                    id,
                    kind,
                    column,
                    row,
                    middle: Vec2::new(
                        (column as f32 + 0.5) * cell_side_length,
                        (row as f32 + 0.5) * cell_side_length,
                    ),
                    left: (column > 0).then_some(CellId(id.0 - 1)),
                    right: (column + 1 < columns).then_some(CellId(id.0 + 1)),
                });
            }
        }

        Ok(Self {
            columns,
            rows: rows.len(),
            cell_side_length,
            cells,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_side_length(&self) -> f32 {
        self.cell_side_length
    }

    /// Level extent in grid space.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.columns as f32, self.rows as f32) * self.cell_side_length
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    pub fn cell_id(&self, column: usize, row: usize) -> Option<CellId> {
        (column < self.columns && row < self.rows).then_some(CellId(row * self.columns + column))
    }

    /// The cell containing `point`, or `None` when the point lies outside the level.
    pub fn cell_at(&self, point: Vec2) -> Option<&Cell> {
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }

        let column = (point.x / self.cell_side_length) as usize;
        let row = (point.y / self.cell_side_length) as usize;
        self.cell_id(column, row).and_then(|id| self.cell(id))
    }

    pub fn left_of(&self, cell: &Cell) -> Option<&Cell> {
        cell.left.and_then(|id| self.cell(id))
    }

    pub fn right_of(&self, cell: &Cell) -> Option<&Cell> {
        cell.right.and_then(|id| self.cell(id))
    }

    /// Convert a grid-space point to a world translation with the level centered on the origin.
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        let half = self.size() / 2.0;
        Vec2::new(point.x - half.x, half.y - point.y)
    }
}
