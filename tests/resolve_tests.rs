//! Resolve tests - clearing, compaction, refill and the match callback

use std::cell::RefCell;
use std::rc::Rc;

use match3_board::core::{seeded_rng, Board, BoardConfig, Phase, PieceTypeConfig, ReleaseOutcome};
use match3_board::types::{Coord, Direction, PieceId, RenderEvent};

type Calls = Rc<RefCell<Vec<(String, usize)>>>;

fn observed_board(config: BoardConfig, seed: u64) -> (Board<Vec<RenderEvent>>, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let seen = calls.clone();
    let board = Board::with_rng(config, Vec::new(), seeded_rng(seed))
        .unwrap()
        .with_observer(move |name: &str, count: usize| {
            seen.borrow_mut().push((name.to_string(), count));
        });
    (board, calls)
}

fn mono_config(width: i32, height: i32) -> BoardConfig {
    BoardConfig::new(width, height, vec![PieceTypeConfig::new("A", 100.0)])
}

fn column_ids(board: &Board<Vec<RenderEvent>>, x: i32) -> Vec<PieceId> {
    (0..board.height())
        .map(|y| board.piece_at(Coord::new(x, y)).unwrap().id)
        .collect()
}

#[test]
fn test_vertical_clear_refills_only_that_column() {
    let (mut board, calls) = observed_board(mono_config(3, 3), 4);
    let col0 = column_ids(&board, 0);
    let col1 = column_ids(&board, 1);
    let col2 = column_ids(&board, 2);
    board.sink_mut().clear();

    board.press_cell(0, 0);
    board.press_cell(0, 1);
    board.press_cell(0, 2);
    let outcome = board.release_pointer();

    match outcome {
        ReleaseOutcome::Resolved(result) => {
            assert_eq!(result.name, "A");
            assert_eq!(result.count, 3);
        }
        other => panic!("expected resolve, got {:?}", other),
    }
    assert_eq!(*calls.borrow(), vec![("A".to_string(), 3)]);

    let fresh = column_ids(&board, 0);
    assert!(fresh.iter().all(|id| !col0.contains(id)));
    assert_eq!(column_ids(&board, 1), col1);
    assert_eq!(column_ids(&board, 2), col2);
    assert!(board.grid().is_full());
    assert!(board.chain().is_empty());
    assert_eq!(board.phase(), Phase::Idle);

    let events = board.sink();
    let cleared = events
        .iter()
        .filter(|e| matches!(e, RenderEvent::PieceCleared { .. }))
        .count();
    let moved = events
        .iter()
        .filter(|e| matches!(e, RenderEvent::PieceMoved { .. }))
        .count();
    let spawned: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            RenderEvent::PieceSpawned { cell, fall_from, .. } => Some((*cell, *fall_from)),
            _ => None,
        })
        .collect();
    assert_eq!(cleared, 3);
    assert_eq!(moved, 0);
    assert_eq!(
        spawned,
        vec![
            (Coord::new(0, 0), Some(200.0)),
            (Coord::new(0, 1), Some(200.0)),
            (Coord::new(0, 2), Some(200.0)),
        ]
    );
}

#[test]
fn test_bottom_row_clear_drops_columns() {
    let (mut board, _) = observed_board(mono_config(3, 3), 9);
    let before: Vec<Vec<PieceId>> = (0..3).map(|x| column_ids(&board, x)).collect();
    board.sink_mut().clear();

    board.press_cell(0, 0);
    board.press_cell(1, 0);
    board.press_cell(2, 0);
    board.release_pointer();

    for x in 0..3 {
        let after = column_ids(&board, x);
        // Survivors fell one row; a new piece sits on top.
        assert_eq!(after[0], before[x as usize][1]);
        assert_eq!(after[1], before[x as usize][2]);
        assert!(!before[x as usize].contains(&after[2]));
    }

    let moves: Vec<_> = board
        .sink()
        .iter()
        .filter_map(|e| match e {
            RenderEvent::PieceMoved {
                column,
                from_y,
                to_y,
                ..
            } => Some((*column, *from_y, *to_y)),
            _ => None,
        })
        .collect();
    assert_eq!(
        moves,
        vec![(0, 1, 0), (0, 2, 1), (1, 1, 0), (1, 2, 1), (2, 1, 0), (2, 2, 1)]
    );
}

#[test]
fn test_events_are_ordered_clear_move_spawn() {
    let (mut board, _) = observed_board(mono_config(2, 3), 1);
    board.press_cell(0, 0);
    board.press_cell(1, 0);
    board.press_cell(1, 1);
    board.sink_mut().clear();
    board.release_pointer();

    let phases: Vec<u8> = board
        .sink()
        .iter()
        .map(|e| match e {
            RenderEvent::ExternalsUnmarked => 0,
            RenderEvent::PieceCleared { .. } => 1,
            RenderEvent::PieceMoved { .. } => 2,
            RenderEvent::PieceSpawned { .. } => 3,
            other => panic!("unexpected event during resolve: {:?}", other),
        })
        .collect();
    let mut sorted = phases.clone();
    sorted.sort();
    assert_eq!(phases, sorted);
    assert_eq!(phases.iter().filter(|&&p| p == 1).count(), 3);
    assert_eq!(phases.iter().filter(|&&p| p == 3).count(), 3);
}

#[test]
fn test_short_chain_restores_board() {
    let (mut board, calls) = observed_board(mono_config(4, 4), 3);
    let before = board.snapshot();

    board.press_cell(0, 0);
    board.press_cell(1, 1);
    board.sink_mut().clear();
    let outcome = board.release_pointer();

    assert_eq!(outcome, ReleaseOutcome::Cancelled { count: 2 });
    assert!(calls.borrow().is_empty());
    assert_eq!(board.snapshot(), before);
    assert!(board.grid().pieces().all(|(_, p)| !p.selected && !p.external));

    let deselected: Vec<_> = board
        .sink()
        .iter()
        .filter_map(|e| match e {
            RenderEvent::PieceDeselected { cell, direction } => {
                assert_eq!(*direction, Direction::Reset);
                Some(*cell)
            }
            _ => None,
        })
        .collect();
    assert_eq!(deselected, vec![Coord::new(0, 0), Coord::new(1, 1)]);
}

#[test]
fn test_touch_limit_of_one_clears_single_piece() {
    let mut config = mono_config(2, 2);
    config.minimum_touch_limit = 1;
    let (mut board, calls) = observed_board(config, 6);

    board.press_cell(1, 0);
    assert!(matches!(board.release_pointer(), ReleaseOutcome::Resolved(_)));
    assert_eq!(*calls.borrow(), vec![("A".to_string(), 1)]);
    assert!(board.grid().is_full());
}

#[test]
fn test_long_chain_count_matches_callback() {
    let (mut board, calls) = observed_board(mono_config(4, 4), 12);
    let path = [(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (2, 1), (1, 1), (0, 1)];
    for (x, y) in path {
        assert!(board.press_cell(x, y).is_accepted());
    }
    board.release_pointer();
    assert_eq!(*calls.borrow(), vec![("A".to_string(), 8)]);
    assert!(board.grid().is_full());
    assert!(board.grid().is_settled());
}

#[test]
fn test_callback_can_be_replaced() {
    let (mut board, first) = observed_board(mono_config(3, 3), 2);
    let second: Calls = Rc::new(RefCell::new(Vec::new()));
    let seen = second.clone();
    board.register_observer(move |name: &str, count: usize| {
        seen.borrow_mut().push((name.to_string(), count));
    });

    board.press_cell(2, 0);
    board.press_cell(2, 1);
    board.press_cell(2, 2);
    board.release_pointer();

    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 1);
}

#[test]
fn test_resolve_without_observer() {
    let config = mono_config(3, 3);
    let mut board = Board::with_rng(config, Vec::new(), seeded_rng(0)).unwrap();
    board.press_cell(0, 0);
    board.press_cell(1, 1);
    board.press_cell(2, 2);
    assert!(matches!(board.release_pointer(), ReleaseOutcome::Resolved(_)));
}
