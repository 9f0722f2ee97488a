use perimeter_board::board::layout;
use perimeter_board::config::MIN_BOARD_SIZE;
use perimeter_board::turn::step;
use perimeter_board::{BoardSize, Direction, ScriptedDice, Turn, TurnState};
use proptest::prelude::*;
use std::collections::HashSet;

fn board_size() -> impl Strategy<Value = BoardSize> {
    (MIN_BOARD_SIZE..=64usize).prop_map(|n| BoardSize::new(n).unwrap())
}

/// A board, a valid position on its ring and a step count of up to three laps.
fn ring_position_and_steps() -> impl Strategy<Value = (BoardSize, usize, usize)> {
    board_size().prop_flat_map(|size| {
        let total = size.total_tiles();
        (Just(size), 1..=total, 1..=3 * total)
    })
}

proptest! {
    #[test]
    fn layout_covers_every_index_once(size in board_size()) {
        let tiles = layout(size);
        let n = size.get();
        prop_assert_eq!(tiles.len(), 4 * n - 4);
        let indices: HashSet<usize> = tiles.iter().map(|t| t.index).collect();
        prop_assert_eq!(indices, (1..=4 * n - 4).collect::<HashSet<_>>());
        let cells: HashSet<(usize, usize)> = tiles.iter().map(|t| (t.row, t.column)).collect();
        prop_assert_eq!(cells.len(), tiles.len());
    }

    #[test]
    fn layout_stays_on_perimeter(size in board_size()) {
        let n = size.get();
        for tile in layout(size) {
            prop_assert!((1..=n).contains(&tile.row) && (1..=n).contains(&tile.column));
            prop_assert!(tile.row == 1 || tile.row == n || tile.column == 1 || tile.column == n);
        }
    }

    #[test]
    fn layout_has_four_corners_at_fixed_indices(size in board_size()) {
        let n = size.get();
        let corners: Vec<usize> = layout(size)
            .iter()
            .filter(|t| t.is_corner)
            .map(|t| t.index)
            .collect();
        prop_assert_eq!(corners, vec![1, n, 2 * n - 1, 3 * n - 2]);
    }

    #[test]
    fn layout_is_deterministic(size in board_size()) {
        prop_assert_eq!(layout(size), layout(size));
    }

    #[test]
    fn forward_then_backward_returns((size, position, steps) in ring_position_and_steps()) {
        let there = step(position, steps, Direction::Forward, size);
        prop_assert!((1..=size.total_tiles()).contains(&there));
        prop_assert_eq!(step(there, steps, Direction::Backward, size), position);
    }

    #[test]
    fn step_matches_modular_formulas((size, position, steps) in ring_position_and_steps()) {
        let (p, d, t) = (position as i64, steps as i64, size.total_tiles() as i64);
        let forward = ((p + d - 1) % t) + 1;
        let backward = (p - d - 1).rem_euclid(t) + 1;
        prop_assert_eq!(step(position, steps, Direction::Forward, size) as i64, forward);
        prop_assert_eq!(step(position, steps, Direction::Backward, size) as i64, backward);
    }

    #[test]
    fn step_always_lands_on_the_ring(
        size in board_size(),
        position in any::<usize>(),
        steps in any::<usize>(),
        forward in any::<bool>(),
    ) {
        let direction = if forward { Direction::Forward } else { Direction::Backward };
        let to = step(position, steps, direction, size);
        prop_assert!((1..=size.total_tiles()).contains(&to));
    }

    #[test]
    fn one_roll_moves_once(size in board_size(), face in 1u8..=6, forward in any::<bool>()) {
        let direction = if forward { Direction::Forward } else { Direction::Backward };
        let mut turn = Turn::new(size);
        let mut dice = ScriptedDice::new(&[face]).unwrap();
        turn.begin_roll();
        turn.resolve_roll(&mut dice);
        let event = turn.choose(direction).unwrap();
        prop_assert_eq!(turn.choose(direction), None);
        prop_assert_eq!(turn.current_position(), event.to);
        prop_assert_eq!(turn.turn_state(), TurnState::Idle);
        prop_assert_eq!(turn.dice_value(), None);
    }
}

#[test]
fn documented_scenarios() {
    let default = BoardSize::new(10).unwrap();
    assert_eq!(step(1, 6, Direction::Forward, default), 7);
    assert_eq!(step(7, 6, Direction::Backward, default), 1);
    assert_eq!(step(34, 5, Direction::Forward, default), 3);
    assert_eq!(step(2, 5, Direction::Backward, default), 33);

    assert_eq!(default.total_tiles(), 36);
    let corners: Vec<usize> = layout(default)
        .iter()
        .filter(|t| t.is_corner)
        .map(|t| t.index)
        .collect();
    assert_eq!(corners, vec![1, 10, 19, 28]);
}
