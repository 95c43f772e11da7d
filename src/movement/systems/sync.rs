//! Movement domain: mirror grid positions into world transforms.

use bevy::prelude::*;

use crate::grid::LevelGrid;
use crate::movement::{GridPosition, Mover};

pub(crate) fn sync_mover_transforms(
    grid: Option<Res<LevelGrid>>,
    mut query: Query<(&GridPosition, &Mover, &mut Transform), Changed<GridPosition>>,
) {
    let Some(grid) = grid else {
        return;
    };

    for (position, mover, mut transform) in &mut query {
        let world = grid.to_world(mover.center(position.0));
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}
