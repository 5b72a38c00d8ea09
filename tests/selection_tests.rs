//! Selection tests - chain growth, backtracking and rejection

use match3_board::core::{
    seeded_rng, Board, BoardConfig, Phase, PieceTypeConfig, PressOutcome, ReleaseOutcome,
};
use match3_board::types::{Coord, Direction, RenderEvent};

fn mono_board(width: i32, height: i32) -> Board<Vec<RenderEvent>> {
    let config = BoardConfig::new(width, height, vec![PieceTypeConfig::new("A", 100.0)]);
    Board::with_rng(config, Vec::new(), seeded_rng(11)).unwrap()
}

fn duo_board(seed: u64) -> Board<Vec<RenderEvent>> {
    let config = BoardConfig::new(
        6,
        6,
        vec![
            PieceTypeConfig::new("A", 100.0),
            PieceTypeConfig::new("B", 100.0),
        ],
    );
    Board::with_rng(config, Vec::new(), seeded_rng(seed)).unwrap()
}

/// First pair of neighbouring cells whose types are equal (or differ).
fn find_neighbours(board: &Board<Vec<RenderEvent>>, same: bool) -> Option<(Coord, Coord)> {
    for (a, pa) in board.grid().pieces() {
        for dx in -1..=1 {
            for dy in -1..=1 {
                let b = a.offset(dx, dy);
                if b == a {
                    continue;
                }
                if let Some(pb) = board.piece_at(b) {
                    if (pa.kind == pb.kind) == same {
                        return Some((a, b));
                    }
                }
            }
        }
    }
    None
}

#[test]
fn test_first_press_starts_chain() {
    let mut board = mono_board(3, 3);
    board.sink_mut().clear();

    assert_eq!(board.press_cell(1, 1), PressOutcome::Started);
    assert_eq!(board.chain().cells(), &[Coord::new(1, 1)]);
    assert!(board.is_selected(Coord::new(1, 1)));
    assert_eq!(board.phase(), Phase::Selecting);
    assert_eq!(
        board.sink()[0],
        RenderEvent::PieceSelected {
            cell: Coord::new(1, 1),
            direction: Direction::Initial
        }
    );
}

#[test]
fn test_non_adjacent_press_is_rejected() {
    let mut board = mono_board(3, 3);
    board.press_cell(0, 0);
    board.sink_mut().clear();

    assert_eq!(board.press_cell(2, 2), PressOutcome::Rejected);
    assert_eq!(board.chain().cells(), &[Coord::new(0, 0)]);
    assert!(!board.is_selected(Coord::new(2, 2)));
    assert!(board.sink().is_empty(), "rejection must not emit: {:?}", board.sink());
}

#[test]
fn test_extend_reports_drag_direction() {
    let mut board = mono_board(3, 3);
    board.press_cell(1, 1);
    assert_eq!(board.press_cell(2, 2), PressOutcome::Extended(Direction::UpRight));
    assert_eq!(board.press_cell(2, 1), PressOutcome::Extended(Direction::Down));
    assert_eq!(board.press_cell(1, 0), PressOutcome::Extended(Direction::DownLeft));
    assert_eq!(board.press_cell(0, 0), PressOutcome::Extended(Direction::Left));
    assert_eq!(board.chain().len(), 5);
    assert!(board.chain().is_well_formed(board.grid()));
}

#[test]
fn test_backtrack_drops_last_piece() {
    let mut board = mono_board(3, 3);
    board.press_cell(0, 0);
    board.press_cell(0, 1);
    board.sink_mut().clear();

    let outcome = board.press_cell(0, 0);
    assert_eq!(outcome, PressOutcome::Backtracked);
    assert!(outcome.is_accepted());
    assert_eq!(board.chain().cells(), &[Coord::new(0, 0)]);
    assert!(!board.is_selected(Coord::new(0, 1)));
    assert!(board.is_selected(Coord::new(0, 0)));
    assert_eq!(
        board.sink()[0],
        RenderEvent::PieceDeselected {
            cell: Coord::new(0, 1),
            direction: Direction::Reset,
        }
    );
}

#[test]
fn test_backtrack_then_extend_elsewhere() {
    let mut board = mono_board(3, 3);
    board.press_cell(0, 0);
    board.press_cell(0, 1);
    board.press_cell(0, 2);
    assert_eq!(board.press_cell(0, 1), PressOutcome::Backtracked);
    assert_eq!(board.press_cell(0, 0), PressOutcome::Backtracked);
    // A single-piece chain has no backtrack target.
    assert_eq!(board.chain().len(), 1);
    assert_eq!(board.press_cell(0, 0), PressOutcome::Repeated);
    assert_eq!(board.chain().len(), 1);

    assert_eq!(board.press_cell(1, 0), PressOutcome::Extended(Direction::Right));
    assert_eq!(board.chain().cells(), &[Coord::new(0, 0), Coord::new(1, 0)]);
}

#[test]
fn test_repeated_press_is_noop() {
    let mut board = mono_board(3, 3);
    board.press_cell(0, 0);
    board.press_cell(1, 1);
    board.sink_mut().clear();

    let outcome = board.press_cell(1, 1);
    assert_eq!(outcome, PressOutcome::Repeated);
    assert!(!outcome.is_accepted());
    assert_eq!(board.chain().len(), 2);
    assert!(board.sink().is_empty());
}

#[test]
fn test_press_on_older_chain_piece_is_rejected() {
    let mut board = mono_board(3, 3);
    board.press_cell(0, 0);
    board.press_cell(0, 1);
    board.press_cell(1, 1);

    // (0,0) is in the chain but is not the backtrack target.
    assert_eq!(board.press_cell(0, 0), PressOutcome::Rejected);
    assert_eq!(board.chain().len(), 3);
    assert!(board.is_selected(Coord::new(0, 0)));
}

#[test]
fn test_mismatched_type_is_rejected() {
    let mut board = duo_board(5);
    let (a, b) = find_neighbours(&board, false).expect("two-type board has a mixed pair");

    board.press_cell(a.x, a.y);
    assert_eq!(board.press_cell(b.x, b.y), PressOutcome::Rejected);
    assert_eq!(board.chain().cells(), &[a]);
}

#[test]
fn test_matching_neighbour_is_accepted() {
    let mut board = duo_board(5);
    let (a, b) = find_neighbours(&board, true).expect("two-type board has a matching pair");

    board.press_cell(a.x, a.y);
    assert!(board.press_cell(b.x, b.y).is_accepted());
    assert_eq!(board.chain().cells(), &[a, b]);
}

#[test]
fn test_externals_marked_while_selecting() {
    let mut board = duo_board(8);
    let start = Coord::new(0, 0);
    let kind = board.piece_at(start).unwrap().kind;

    board.press_cell(start.x, start.y);
    for (c, piece) in board.grid().pieces() {
        assert_eq!(board.is_external(c), piece.kind != kind, "cell {:?}", c);
    }
    assert!(board
        .sink()
        .contains(&RenderEvent::ExternalsMarked { piece_type: kind }));

    board.sink_mut().clear();
    board.release_pointer();
    assert!(board.grid().pieces().all(|(_, p)| !p.external));
    assert_eq!(board.sink()[0], RenderEvent::ExternalsUnmarked);
}

#[test]
fn test_externals_remarked_on_every_chain_change() {
    let mut board = mono_board(3, 3);
    board.press_cell(0, 0);
    board.press_cell(0, 1);
    board.press_cell(0, 0);
    let marks = board
        .sink()
        .iter()
        .filter(|e| matches!(e, RenderEvent::ExternalsMarked { .. }))
        .count();
    assert_eq!(marks, 3);
}

#[test]
fn test_externals_disabled() {
    let mut config = BoardConfig::new(
        4,
        4,
        vec![
            PieceTypeConfig::new("A", 100.0),
            PieceTypeConfig::new("B", 100.0),
        ],
    );
    config.toggle_other_tiles = false;
    let mut board = Board::with_rng(config, Vec::new(), seeded_rng(2)).unwrap();

    board.press_cell(0, 0);
    board.release_pointer();
    assert!(!board.sink().iter().any(|e| matches!(
        e,
        RenderEvent::ExternalsMarked { .. } | RenderEvent::ExternalsUnmarked
    )));
    assert!(board.grid().pieces().all(|(_, p)| !p.external));
}

#[test]
fn test_release_without_gesture_is_idle() {
    let mut board = mono_board(2, 2);
    board.sink_mut().clear();
    assert_eq!(board.release_pointer(), ReleaseOutcome::Idle);
    assert!(board.sink().is_empty());
}
