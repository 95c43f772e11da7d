//! Movement domain: events emitted by movers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Event fired whenever the player moves. Carries the player's center as it
/// was before the move was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerMovedEvent {
    pub center: Vec2,
}

impl Message for PlayerMovedEvent {}
