//! Movement domain: player and enemy bootstrap from level data.

use bevy::prelude::*;

use crate::content::LoadedContent;
use crate::grid::LevelGrid;
use crate::movement::{Enemy, GridPosition, MovementState, MovementTuning, Mover, Player};

const MOVER_Z: f32 = 1.0;

/// Rebuild movement tuning from the loaded gameplay defaults.
pub(crate) fn configure_tuning(content: Res<LoadedContent>, mut tuning: ResMut<MovementTuning>) {
    *tuning = MovementTuning::from_defaults(&content.defaults);
}

/// Spawn the player and the level's enemies in their spawn cells.
/// Runs on entering `GameState::Playing`, after the grid is built.
pub(crate) fn spawn_movers(
    mut commands: Commands,
    content: Res<LoadedContent>,
    tuning: Res<MovementTuning>,
    grid: Option<Res<LevelGrid>>,
    existing_player: Query<Entity, With<Player>>,
) {
    let Some(grid) = grid else {
        warn!("No level grid, skipping mover spawn");
        return;
    };

    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let level = &content.level;

    let sprite = Sprite::from_color(Color::srgb(0.95, 0.9, 0.8), tuning.player_size);
    let mover = Mover::new(tuning.player_speed, true, false, sprite.custom_size);
    if let Some(position) = spawn_position(&grid, level.player_spawn, &mover) {
        info!(
            "Spawning player at cell {:?}, speed={}",
            level.player_spawn, mover.speed
        );
        commands.spawn((
            Player,
            mover,
            MovementState::default(),
            position,
            sprite,
            Transform::from_xyz(0.0, 0.0, MOVER_Z),
        ));
    }

    for spawn in &level.enemies {
        let sprite = Sprite::from_color(Color::srgb(0.85, 0.3, 0.3), tuning.enemy_size);
        let mover = Mover::new(
            spawn.speed,
            false,
            spawn.can_move_over_empty_cells,
            sprite.custom_size,
        );
        let Some(position) = spawn_position(&grid, spawn.cell, &mover) else {
            continue;
        };

        commands.spawn((
            Enemy,
            mover,
            MovementState::default(),
            position,
            sprite,
            Transform::from_xyz(0.0, 0.0, MOVER_Z),
        ));
    }

    info!("Spawned {} enemies", level.enemies.len());
}

/// Top-left position that centers `mover` on the given cell.
pub(crate) fn spawn_position(
    grid: &LevelGrid,
    (column, row): (usize, usize),
    mover: &Mover,
) -> Option<GridPosition> {
    let cell = grid.cell_id(column, row).and_then(|id| grid.cell(id))?;
    Some(GridPosition(cell.middle - mover.size() / 2.0))
}
