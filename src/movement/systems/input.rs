//! Movement domain: input sampling for grid movement.

use bevy::prelude::*;

use crate::movement::{Cardinal, MovementInput};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let pressed = |keys: [KeyCode; 2]| keys.iter().any(|key| keyboard.pressed(*key));

    // One cardinal at a time; climbing wins over walking
    let cardinal = if pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        Some(Cardinal::Up)
    } else if pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        Some(Cardinal::Down)
    } else if pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        Some(Cardinal::Left)
    } else if pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        Some(Cardinal::Right)
    } else {
        None
    };

    input.direction = cardinal.map_or(Vec2::ZERO, Cardinal::to_vec2);
}
