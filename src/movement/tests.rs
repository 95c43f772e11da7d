//! Movement domain: tests for legality rules and the movement resolver.

use bevy::prelude::Vec2;

use super::rules::{can_move_down, can_move_left, can_move_right, can_move_up};
use super::{Cardinal, GridPosition, MovementState, Mover, PlayerMovedEvent, resolve_move};
use crate::grid::{Cell, CellId, CellKind, LevelGrid};

const SIDE: f32 = 20.0;
const DT: f32 = 0.1;
const SPEED: f32 = 50.0;

fn cell(kind: CellKind, middle: Vec2) -> Cell {
    Cell {
        id: CellId(0),
        kind,
        column: 0,
        row: 0,
        middle,
        left: None,
        right: None,
    }
}

fn player() -> Mover {
    Mover::new(SPEED, true, false, Some(Vec2::new(10.0, 10.0)))
}

fn enemy() -> Mover {
    Mover::new(SPEED, false, false, Some(Vec2::new(10.0, 10.0)))
}

/// Cells are 20px, so cell (c, r) has its middle at (20c + 10, 20r + 10).
fn test_grid() -> LevelGrid {
    LevelGrid::from_rows(&["FdFP", "..H.", "FFuF"], SIDE).unwrap()
}

// -----------------------------------------------------------------------------
// Cardinal classification
// -----------------------------------------------------------------------------

#[test]
fn test_classify_cardinals() {
    assert_eq!(Cardinal::classify(Vec2::new(0.0, -1.0)), Some(Cardinal::Up));
    assert_eq!(Cardinal::classify(Vec2::new(0.0, 1.0)), Some(Cardinal::Down));
    assert_eq!(Cardinal::classify(Vec2::new(-1.0, 0.0)), Some(Cardinal::Left));
    assert_eq!(Cardinal::classify(Vec2::new(1.0, 0.0)), Some(Cardinal::Right));
}

#[test]
fn test_classify_tolerates_small_drift() {
    assert_eq!(Cardinal::classify(Vec2::new(0.4, -0.6)), Some(Cardinal::Up));
    assert_eq!(Cardinal::classify(Vec2::new(1.3, 0.2)), Some(Cardinal::Right));
}

#[test]
fn test_classify_rejects_ambiguous() {
    assert_eq!(Cardinal::classify(Vec2::ZERO), None);
    assert_eq!(Cardinal::classify(Vec2::new(1.0, 1.0)), None);
    assert_eq!(Cardinal::classify(Vec2::new(0.5, -1.0)), None);
    assert_eq!(Cardinal::classify(Vec2::new(0.0, -2.0)), None);
}

#[test]
fn test_cardinal_vectors_are_y_down() {
    assert_eq!(Cardinal::Up.to_vec2(), Vec2::new(0.0, -1.0));
    assert_eq!(Cardinal::Down.to_vec2(), Vec2::new(0.0, 1.0));
    for cardinal in Cardinal::ALL {
        assert_eq!(Cardinal::classify(cardinal.to_vec2()), Some(cardinal));
    }
}

// -----------------------------------------------------------------------------
// can_move_up
// -----------------------------------------------------------------------------

#[test]
fn test_up_on_go_down_below_center() {
    let go_down = cell(CellKind::ShortGoDown, Vec2::new(100.0, 40.0));
    assert!(can_move_up(&go_down, Vec2::new(100.0, 50.0), SIDE, false));
}

#[test]
fn test_up_on_go_down_at_or_above_center() {
    for kind in [CellKind::ShortGoDown, CellKind::LongGoDown] {
        let go_down = cell(kind, Vec2::new(100.0, 40.0));
        assert!(!can_move_up(&go_down, Vec2::new(100.0, 40.0), SIDE, false));
        assert!(!can_move_up(&go_down, Vec2::new(100.0, 30.0), SIDE, true));
    }
}

#[test]
fn test_up_always_allowed_on_short_climbs_and_ladders() {
    for kind in [
        CellKind::ShortGoUp,
        CellKind::ShortGoUpAndDown,
        CellKind::Ladder,
    ] {
        let climb = cell(kind, Vec2::new(100.0, 40.0));
        assert!(can_move_up(&climb, Vec2::new(500.0, -500.0), SIDE, false));
    }
}

#[test]
fn test_up_on_long_climbs_requires_centering() {
    for kind in [CellKind::LongGoUp, CellKind::LongGoUpAndDown] {
        let climb = cell(kind, Vec2::new(100.0, 40.0));
        assert!(can_move_up(&climb, Vec2::new(100.0, 40.0), SIDE, false));
        assert!(can_move_up(&climb, Vec2::new(90.0, 40.0), SIDE, false));
        assert!(can_move_up(&climb, Vec2::new(110.0, 40.0), SIDE, false));
        assert!(!can_move_up(&climb, Vec2::new(89.9, 40.0), SIDE, false));
        assert!(!can_move_up(&climb, Vec2::new(110.1, 40.0), SIDE, false));
    }
}

#[test]
fn test_up_through_empty_follows_flag() {
    for kind in [CellKind::ShortEmpty, CellKind::LongEmpty] {
        let empty = cell(kind, Vec2::new(100.0, 40.0));
        assert!(can_move_up(&empty, Vec2::new(100.0, 40.0), SIDE, true));
        assert!(!can_move_up(&empty, Vec2::new(100.0, 40.0), SIDE, false));
    }
}

#[test]
fn test_up_blocked_on_floors_and_plates() {
    for kind in [CellKind::ShortFloor, CellKind::LongFloor, CellKind::Plate] {
        let blocked = cell(kind, Vec2::new(100.0, 40.0));
        assert!(!can_move_up(&blocked, Vec2::new(100.0, 50.0), SIDE, true));
    }
}

// -----------------------------------------------------------------------------
// can_move_down
// -----------------------------------------------------------------------------

#[test]
fn test_down_on_go_up_only_above_center() {
    for kind in [CellKind::ShortGoUp, CellKind::LongGoUp] {
        let go_up = cell(kind, Vec2::new(100.0, 40.0));
        assert!(can_move_down(&go_up, Vec2::new(100.0, 30.0), SIDE));
        assert!(!can_move_down(&go_up, Vec2::new(100.0, 40.0), SIDE));
        assert!(!can_move_down(&go_up, Vec2::new(100.0, 50.0), SIDE));
    }
}

#[test]
fn test_down_always_allowed_on_short_descents_and_ladders() {
    for kind in [
        CellKind::ShortGoDown,
        CellKind::ShortGoUpAndDown,
        CellKind::Ladder,
    ] {
        let climb = cell(kind, Vec2::new(100.0, 40.0));
        assert!(can_move_down(&climb, Vec2::new(-300.0, 900.0), SIDE));
    }
}

#[test]
fn test_down_on_long_descents_requires_centering() {
    for kind in [CellKind::LongGoDown, CellKind::LongGoUpAndDown] {
        let climb = cell(kind, Vec2::new(100.0, 40.0));
        assert!(can_move_down(&climb, Vec2::new(105.0, 40.0), SIDE));
        assert!(!can_move_down(&climb, Vec2::new(120.0, 40.0), SIDE));
    }
}

#[test]
fn test_down_never_allowed_through_empty() {
    for kind in [
        CellKind::ShortEmpty,
        CellKind::LongEmpty,
        CellKind::ShortFloor,
        CellKind::LongFloor,
        CellKind::Plate,
    ] {
        let blocked = cell(kind, Vec2::new(100.0, 40.0));
        assert!(!can_move_down(&blocked, Vec2::new(100.0, 30.0), SIDE));
    }
}

// -----------------------------------------------------------------------------
// can_move_left / can_move_right
// -----------------------------------------------------------------------------

#[test]
fn test_left_blocked_at_edge_before_center() {
    let floor = cell(CellKind::LongFloor, Vec2::new(200.0, 0.0));
    assert!(!can_move_left(&floor, None, Vec2::new(190.0, 0.0)));
}

#[test]
fn test_left_allowed_with_solid_neighbor() {
    let floor = cell(CellKind::LongFloor, Vec2::new(200.0, 0.0));
    let neighbor = cell(CellKind::LongFloor, Vec2::new(180.0, 0.0));
    assert!(can_move_left(&floor, Some(&neighbor), Vec2::new(190.0, 0.0)));
}

#[test]
fn test_left_allowed_at_edge_until_center() {
    let floor = cell(CellKind::ShortFloor, Vec2::new(200.0, 0.0));
    assert!(can_move_left(&floor, None, Vec2::new(210.0, 0.0)));
    assert!(can_move_left(&floor, None, Vec2::new(200.0, 0.0)));
}

#[test]
fn test_left_blocked_by_empty_and_plate_neighbors() {
    let floor = cell(CellKind::ShortGoUp, Vec2::new(200.0, 0.0));
    for kind in [CellKind::ShortEmpty, CellKind::LongEmpty, CellKind::Plate] {
        let neighbor = cell(kind, Vec2::new(180.0, 0.0));
        assert!(!can_move_left(&floor, Some(&neighbor), Vec2::new(199.0, 0.0)));
        assert!(can_move_left(&floor, Some(&neighbor), Vec2::new(201.0, 0.0)));
    }
}

#[test]
fn test_left_allowed_toward_ladder_neighbor() {
    let floor = cell(CellKind::LongGoUpAndDown, Vec2::new(200.0, 0.0));
    let neighbor = cell(CellKind::Ladder, Vec2::new(180.0, 0.0));
    assert!(can_move_left(&floor, Some(&neighbor), Vec2::new(150.0, 0.0)));
}

#[test]
fn test_sideways_only_on_walkable_cells() {
    let solid = cell(CellKind::LongFloor, Vec2::new(180.0, 0.0));
    for kind in [
        CellKind::Ladder,
        CellKind::ShortEmpty,
        CellKind::LongEmpty,
        CellKind::Plate,
    ] {
        let current = cell(kind, Vec2::new(200.0, 0.0));
        assert!(!can_move_left(&current, Some(&solid), Vec2::new(210.0, 0.0)));
        assert!(!can_move_right(&current, Some(&solid), Vec2::new(190.0, 0.0)));
    }
}

#[test]
fn test_right_mirrors_left() {
    let floor = cell(CellKind::ShortFloor, Vec2::new(200.0, 0.0));
    let solid = cell(CellKind::ShortFloor, Vec2::new(220.0, 0.0));
    let plate = cell(CellKind::Plate, Vec2::new(220.0, 0.0));

    assert!(!can_move_right(&floor, None, Vec2::new(210.0, 0.0)));
    assert!(can_move_right(&floor, None, Vec2::new(190.0, 0.0)));
    assert!(can_move_right(&floor, Some(&solid), Vec2::new(210.0, 0.0)));
    assert!(!can_move_right(&floor, Some(&plate), Vec2::new(210.0, 0.0)));
}

// -----------------------------------------------------------------------------
// resolve_move: open space
// -----------------------------------------------------------------------------

#[test]
fn test_off_grid_always_moves() {
    let grid = test_grid();
    let mover = player();
    let mut state = MovementState::default();
    let mut position = GridPosition(Vec2::new(-100.0, -100.0));

    // Diagonal input is not a cardinal, but open space does not care
    let outcome = resolve_move(&grid, &mover, &mut state, &mut position, Vec2::new(1.0, 1.0), DT);

    assert!(outcome.moved);
    assert_eq!(position.0, Vec2::new(-95.0, -95.0));
    assert_eq!(
        outcome.player_moved,
        Some(PlayerMovedEvent {
            center: Vec2::new(-95.0, -95.0)
        })
    );
    assert_eq!(state, MovementState::default());
}

#[test]
fn test_off_grid_enemy_moves_silently() {
    let grid = test_grid();
    let mut state = MovementState::default();
    let mut position = GridPosition(Vec2::new(200.0, 10.0));

    let outcome = resolve_move(&grid, &enemy(), &mut state, &mut position, Vec2::Y, DT);

    assert!(outcome.moved);
    assert_eq!(position.0, Vec2::new(200.0, 15.0));
    assert!(outcome.player_moved.is_none());
}

// -----------------------------------------------------------------------------
// resolve_move: platform snapping
// -----------------------------------------------------------------------------

#[test]
fn test_first_resolution_snaps_feet_to_platform() {
    let grid = test_grid();
    let mover = player();
    let mut state = MovementState::default();
    // Center (10, 5) lies in floor cell (0, 0) whose middle is (10, 10)
    let mut position = GridPosition(Vec2::new(5.0, 0.0));

    let outcome = resolve_move(&grid, &mover, &mut state, &mut position, Vec2::X, DT);

    assert!(outcome.snapped);
    assert_eq!(outcome.entered_cell, Some(CellId(0)));
    assert!(state.has_snapped_to_platform);
    // Resting on the platform puts the center on y = 10, then the move goes right
    assert_eq!(position.0, Vec2::new(10.0, 5.0));
    assert_eq!(mover.center(position.0).y, 10.0);
}

#[test]
fn test_second_resolution_in_same_cell_does_not_snap() {
    let grid = test_grid();
    let mover = player();
    let mut state = MovementState::default();
    let mut position = GridPosition(Vec2::new(5.0, 0.0));

    resolve_move(&grid, &mover, &mut state, &mut position, Vec2::X, DT);
    position.0.y = 3.0;
    let outcome = resolve_move(&grid, &mover, &mut state, &mut position, Vec2::X, DT);

    assert!(!outcome.snapped);
    assert!(outcome.entered_cell.is_none());
    assert_eq!(position.0, Vec2::new(15.0, 3.0));
}

#[test]
fn test_entering_non_platform_cell_resets_snap_flag() {
    let grid = test_grid();
    let mover = player();
    let mut state = MovementState {
        previous_cell: Some(CellId(0)),
        has_snapped_to_platform: true,
        ..Default::default()
    };
    // Center (50, 30) lies in ladder cell (2, 1)
    let mut position = GridPosition(Vec2::new(45.0, 25.0));

    let outcome = resolve_move(&grid, &mover, &mut state, &mut position, Vec2::NEG_Y, DT);

    let ladder = grid.cell_id(2, 1).unwrap();
    assert_eq!(outcome.entered_cell, Some(ladder));
    assert_eq!(state.previous_cell, Some(ladder));
    assert!(!state.has_snapped_to_platform);
    assert!(!outcome.snapped);
    assert!(outcome.moved);
    assert_eq!(position.0, Vec2::new(45.0, 20.0));
}

#[test]
fn test_rules_see_center_before_snap() {
    let grid = test_grid();
    let mover = player();
    let mut state = MovementState::default();
    // Center (30, 13) is below the middle of go-down cell (1, 0)
    let mut position = GridPosition(Vec2::new(25.0, 8.0));

    let outcome = resolve_move(&grid, &mover, &mut state, &mut position, Vec2::NEG_Y, DT);

    // Snap lifts the center to y = 10, then the climb applies from there
    assert!(outcome.snapped);
    assert!(outcome.moved);
    assert_eq!(position.0, Vec2::new(25.0, 0.0));
}

// -----------------------------------------------------------------------------
// resolve_move: legality
// -----------------------------------------------------------------------------

#[test]
fn test_blocked_move_keeps_position_and_direction() {
    let grid = test_grid();
    let mover = player();
    let mut state = MovementState {
        previous_cell: Some(CellId(0)),
        has_snapped_to_platform: true,
        previous_move_direction: Vec2::X,
    };
    let mut position = GridPosition(Vec2::new(5.0, 5.0));

    // Floors cannot be climbed
    let outcome = resolve_move(&grid, &mover, &mut state, &mut position, Vec2::NEG_Y, DT);

    assert!(!outcome.moved);
    assert!(outcome.player_moved.is_none());
    assert_eq!(position.0, Vec2::new(5.0, 5.0));
    assert_eq!(state.previous_move_direction, Vec2::X);
}

#[test]
fn test_successful_move_records_direction_and_pre_move_center() {
    let grid = test_grid();
    let mover = player();
    let mut state = MovementState::default();
    let mut position = GridPosition(Vec2::new(5.0, 5.0));

    let outcome = resolve_move(&grid, &mover, &mut state, &mut position, Vec2::X, DT);

    assert!(outcome.moved);
    assert_eq!(state.previous_move_direction, Vec2::X);
    assert_eq!(
        outcome.player_moved,
        Some(PlayerMovedEvent {
            center: Vec2::new(10.0, 10.0)
        })
    );
}

#[test]
fn test_enemy_moves_without_event() {
    let grid = test_grid();
    let mut state = MovementState::default();
    let mut position = GridPosition(Vec2::new(5.0, 5.0));

    let outcome = resolve_move(&grid, &enemy(), &mut state, &mut position, Vec2::X, DT);

    assert!(outcome.moved);
    assert!(outcome.player_moved.is_none());
}

#[test]
fn test_right_stops_at_center_before_plate() {
    let grid = test_grid();
    let mover = player();
    let mut state = MovementState::default();
    // Cell (2, 0) is floor with a plate to its right; center x = 51 is past its middle
    let mut position = GridPosition(Vec2::new(46.0, 5.0));

    let outcome = resolve_move(&grid, &mover, &mut state, &mut position, Vec2::X, DT);

    assert!(!outcome.moved);
    assert_eq!(position.0.x, 46.0);
}

#[test]
fn test_non_cardinal_direction_never_moves_or_reports() {
    let grid = test_grid();
    let mover = player();
    let mut state = MovementState::default();
    let mut position = GridPosition(Vec2::new(5.0, 5.0));

    // Settle on the platform first so the snap cannot change anything
    resolve_move(&grid, &mover, &mut state, &mut position, Vec2::X, DT);
    let settled = position;

    for direction in [Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(-0.7, 0.7)] {
        let outcome = resolve_move(&grid, &mover, &mut state, &mut position, direction, DT);
        assert!(!outcome.moved);
        assert!(outcome.player_moved.is_none());
        assert_eq!(position, settled);
    }
}

// -----------------------------------------------------------------------------
// Mover
// -----------------------------------------------------------------------------

#[test]
fn test_mover_without_visual_size_is_a_point() {
    let mover = Mover::new(10.0, false, false, None);
    assert_eq!(mover.size(), Vec2::ZERO);
    assert_eq!(mover.center(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
}

#[test]
fn test_mover_center_offsets_half_size() {
    let mover = Mover::new(10.0, true, false, Some(Vec2::new(20.0, 30.0)));
    assert_eq!(mover.center(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 15.0));
}
