//! Debug overlay for inspecting the level grid (dev-tools builds only).
//!
//! F3 toggles outlines of every cell, colored by kind, with each mover's
//! current cell highlighted.

use bevy::prelude::*;

use crate::core::GameState;
use crate::grid::LevelGrid;
use crate::movement::MovementState;

const TOGGLE_KEY: KeyCode = KeyCode::F3;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugOverlay {
    pub visible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlay>().add_systems(
            Update,
            (
                toggle_overlay,
                draw_grid_overlay.run_if(overlay_visible),
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

fn overlay_visible(overlay: Res<DebugOverlay>) -> bool {
    overlay.visible
}

fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<DebugOverlay>) {
    if keyboard.just_pressed(TOGGLE_KEY) {
        overlay.visible = !overlay.visible;
        info!("Debug overlay: {}", if overlay.visible { "ON" } else { "OFF" });
    }
}

fn draw_grid_overlay(
    mut gizmos: Gizmos,
    grid: Option<Res<LevelGrid>>,
    movers: Query<&MovementState>,
) {
    let Some(grid) = grid else {
        return;
    };

    let side = grid.cell_side_length();
    for cell in grid.cells() {
        let center = grid.to_world(cell.middle);
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            Vec2::splat(side),
            cell.kind.color(),
        );
    }

    for state in &movers {
        if let Some(cell) = state.previous_cell.and_then(|id| grid.cell(id)) {
            let center = grid.to_world(cell.middle);
            gizmos.rect_2d(
                Isometry2d::from_translation(center),
                Vec2::splat(side * 0.9),
                Color::WHITE,
            );
        }
    }
}
