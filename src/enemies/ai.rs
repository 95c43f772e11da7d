//! Enemies domain: direction choice for chasing enemies.

use bevy::prelude::*;

use crate::movement::Cardinal;

/// Distance along an axis under which an enemy no longer steers along it.
pub const ARRIVE_DISTANCE: f32 = 1.0;

/// Directions to try this tick, best first.
///
/// Toward the sighting along the dominant axis, then along the other axis,
/// then the previous successful direction, then `fallback`. Duplicates are
/// dropped so each direction is tried once.
pub fn chase_candidates(
    from: Vec2,
    target: Option<Vec2>,
    previous: Vec2,
    fallback: Cardinal,
) -> Vec<Cardinal> {
    let mut candidates = Vec::with_capacity(4);
    let mut push = |cardinal: Cardinal| {
        if !candidates.contains(&cardinal) {
            candidates.push(cardinal);
        }
    };

    if let Some(target) = target {
        let delta = target - from;
        let horizontal = (delta.x.abs() > ARRIVE_DISTANCE).then(|| {
            if delta.x < 0.0 {
                Cardinal::Left
            } else {
                Cardinal::Right
            }
        });
        let vertical = (delta.y.abs() > ARRIVE_DISTANCE).then(|| {
            if delta.y < 0.0 {
                Cardinal::Up
            } else {
                Cardinal::Down
            }
        });

        let (first, second) = if delta.y.abs() > delta.x.abs() {
            (vertical, horizontal)
        } else {
            (horizontal, vertical)
        };
        first.into_iter().chain(second).for_each(&mut push);
    }

    if let Some(previous) = Cardinal::classify(previous) {
        push(previous);
    }
    push(fallback);

    candidates
}
