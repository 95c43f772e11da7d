//! Grid domain: tile sprites for the active level.

use bevy::prelude::*;

use crate::grid::{CellKind, LevelGrid};

/// Marker for sprites that draw level tiles
#[derive(Component, Debug)]
pub struct LevelTile;

const TILE_Z: f32 = -1.0;

pub(crate) fn spawn_level_tiles(mut commands: Commands, grid: Option<Res<LevelGrid>>) {
    let Some(grid) = grid else {
        return;
    };

    let side = grid.cell_side_length();
    let plank = side * 0.2;
    let rail = side * 0.45;
    let mut spawned = 0;

    for cell in grid.cells() {
        let kind = cell.kind;
        if kind.is_empty() {
            continue;
        }

        // Planks line the bottom of the cell, under movers centered on it
        if kind.is_walkable() {
            let center = cell.middle + Vec2::new(0.0, (side - plank) / 2.0);
            spawn_tile(&mut commands, &grid, center, Vec2::new(side, plank), kind);
            spawned += 1;
        }

        // Ladder portion: above the center for go-up, below for go-down
        let ladder = match kind {
            CellKind::ShortGoUp | CellKind::LongGoUp => Some((-side / 4.0, side / 2.0)),
            CellKind::ShortGoDown | CellKind::LongGoDown => Some((side / 4.0, side / 2.0)),
            CellKind::ShortGoUpAndDown | CellKind::LongGoUpAndDown | CellKind::Ladder => {
                Some((0.0, side))
            }
            _ => None,
        };
        if let Some((offset, height)) = ladder {
            let center = cell.middle + Vec2::new(0.0, offset);
            spawn_tile(&mut commands, &grid, center, Vec2::new(rail, height), kind);
            spawned += 1;
        }

        if kind == CellKind::Plate {
            spawn_tile(&mut commands, &grid, cell.middle, Vec2::splat(side * 0.8), kind);
            spawned += 1;
        }
    }

    info!("Spawned {} level tiles", spawned);
}

fn spawn_tile(commands: &mut Commands, grid: &LevelGrid, center: Vec2, size: Vec2, kind: CellKind) {
    let world = grid.to_world(center);
    commands.spawn((
        LevelTile,
        Sprite::from_color(kind.color(), size),
        Transform::from_xyz(world.x, world.y, TILE_Z),
    ));
}
