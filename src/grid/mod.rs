//! Grid domain: level grid, cells, and tile rendering.

mod cell;
mod level_grid;
mod spawn;


pub use cell::{Cell, CellId, CellKind};
pub use level_grid::LevelGrid;

use bevy::prelude::*;

use crate::content::{LevelDef, LoadedContent};
use crate::core::GameState;
use crate::grid::spawn::spawn_level_tiles;

pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            (build_level_grid, spawn_level_tiles).chain(),
        );
    }
}

/// Build the grid from the loaded level, falling back to the built-in level
/// when the layout is invalid.
pub(crate) fn build_level_grid(mut commands: Commands, mut content: ResMut<LoadedContent>) {
    let grid = match LevelGrid::from_level(&content.level) {
        Ok(grid) => grid,
        Err(e) => {
            error!("Level '{}' is invalid: {}", content.level.name, e);
            warn!("Using fallback level");
            content.level = LevelDef::default();
            match LevelGrid::from_level(&content.level) {
                Ok(grid) => grid,
                Err(e) => {
                    error!("Fallback level is invalid: {}", e);
                    return;
                }
            }
        }
    };

    info!(
        "Built level grid '{}': {}x{} cells of {}px",
        content.level.name,
        grid.columns(),
        grid.rows(),
        grid.cell_side_length()
    );
    commands.insert_resource(grid);
}
