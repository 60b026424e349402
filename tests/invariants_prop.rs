//! Property tests for the board, movement and session invariants.
//!
//! - A clearing pass leaves no full row and a second pass is a no-op.
//! - Surviving rows keep their relative order.
//! - Shifts and rotations are atomic: rejected moves leave no trace.
//! - Score and level depend only on line counts.
//! - Under arbitrary input a playing session never shows a full row, and its
//!   counters never decrease.

use proptest::prelude::*;
use tetris2d::core::{
    clear_full_lines, fall_interval_ms, level_after, score_for_lines, ActivePiece, Board,
    ClearOutcome, GameSession,
};
use tetris2d::types::{
    Block, Cell, InputSnapshot, PieceKind, Rotation, SessionState, BOARD_HEIGHT, BOARD_WIDTH,
    LEVEL_COST, LEVEL_FALL_MS, MAX_LEVEL,
};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

/// Random board with an empty top row; roughly a third of the rows are full.
fn board_strategy() -> impl Strategy<Value = Board> {
    (
        prop::collection::vec(any::<bool>(), W * H),
        prop::collection::vec(prop::bool::weighted(0.3), H),
    )
        .prop_map(|(cells, full_rows)| {
            let mut board = Board::new();
            for y in 1..H {
                for x in 0..W {
                    if full_rows[y] || cells[y * W + x] {
                        board.set(x as i8, y as i8, Block::new(PieceKind::S, y as u32));
                    }
                }
            }
            board
        })
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn rotation_strategy() -> impl Strategy<Value = Rotation> {
    prop::sample::select(Rotation::ALL.to_vec())
}

fn input_strategy() -> impl Strategy<Value = InputSnapshot> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(shift_left, shift_right, rotate_cw, soft_drop)| InputSnapshot {
            shift_left,
            shift_right,
            rotate_cw,
            soft_drop,
            ..InputSnapshot::idle()
        },
    )
}

fn rows(board: &Board) -> Vec<Vec<Cell>> {
    (0..H).map(|y| board.row(y).to_vec()).collect()
}

proptest! {
    #[test]
    fn clearing_leaves_no_full_rows_and_is_idempotent(mut board in board_strategy()) {
        let outcome = clear_full_lines(&mut board);
        prop_assert!(!outcome.is_overflow());
        for y in 0..H {
            prop_assert!(!board.is_row_full(y), "row {} still full", y);
        }

        let after_first = board.clone();
        prop_assert_eq!(clear_full_lines(&mut board).lines(), 0);
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn clearing_preserves_row_order(mut board in board_strategy()) {
        let before = rows(&board);
        let survivors: Vec<Vec<Cell>> = before
            .iter()
            .filter(|row| !row.iter().all(|cell| cell.is_some()))
            .cloned()
            .collect();
        let removed = H - survivors.len();

        let outcome = clear_full_lines(&mut board);
        prop_assert_eq!(outcome.lines() as usize, removed);

        let after = rows(&board);
        for row in &after[..removed] {
            prop_assert!(row.iter().all(|cell| cell.is_none()));
        }
        prop_assert_eq!(&after[removed..], &survivors[..]);
    }

    #[test]
    fn top_row_block_always_overflows(mut board in board_strategy(), x in 0..BOARD_WIDTH as i8) {
        board.set(x, 0, Block::new(PieceKind::J, 0));
        let before = board.clone();
        prop_assert_eq!(clear_full_lines(&mut board), ClearOutcome::Overflow);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn moves_are_atomic(
        board in board_strategy(),
        kind in kind_strategy(),
        rotation in rotation_strategy(),
        x in -2i8..12,
        y in -2i8..22,
        dx in prop::sample::select(vec![-1i8, 1]),
    ) {
        let start = ActivePiece::new(kind, rotation, x, y, 1);

        let mut shifted = start.clone();
        if shifted.try_shift(&board, dx) {
            prop_assert!(shifted.fits(&board));
            prop_assert_eq!(shifted.position(), (x + dx, y));
        } else {
            prop_assert_eq!(&shifted, &start);
        }

        let mut rotated = start.clone();
        if rotated.try_rotate(&board) {
            prop_assert!(rotated.fits(&board));
            prop_assert_eq!(rotated.rotation(), rotation.rotate_cw());
            prop_assert_eq!(rotated.position(), (x, y));
        } else {
            prop_assert_eq!(&rotated, &start);
        }
    }

    #[test]
    fn score_depends_only_on_count(n in 5u32..) {
        prop_assert_eq!(score_for_lines(n), 0);
    }

    #[test]
    fn level_follows_total_lines(lines in 0u32..1_000) {
        let level = level_after(1, lines, LEVEL_COST, MAX_LEVEL);
        prop_assert_eq!(level, (1 + lines / LEVEL_COST).min(MAX_LEVEL));
        prop_assert_eq!(
            fall_interval_ms(&LEVEL_FALL_MS, level),
            LEVEL_FALL_MS[(level - 1) as usize]
        );
    }

    #[test]
    fn session_invariants_under_random_input(
        seed in any::<u32>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
        elapsed in 1u32..200,
    ) {
        let mut session = GameSession::new(seed);
        session.start();

        let (mut score, mut lines) = (0, 0);
        for input in &inputs {
            session.tick(elapsed, input);

            prop_assert!(session.score() >= score);
            prop_assert!(session.lines() >= lines);
            score = session.score();
            lines = session.lines();
            prop_assert_eq!(session.level(), (1 + lines / LEVEL_COST).min(MAX_LEVEL));

            if session.state() == SessionState::Play {
                for y in 0..H {
                    prop_assert!(!session.board().is_row_full(y));
                }
            } else {
                prop_assert_eq!(session.state(), SessionState::End);
                prop_assert!(session.active().is_none());
                break;
            }
        }
    }
}
