//! Movement domain: system modules for grid movement updates.

pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod sync;

pub(crate) use input::read_input;
pub(crate) use movement::{log_outcome, move_player};
pub(crate) use sync::sync_mover_transforms;
