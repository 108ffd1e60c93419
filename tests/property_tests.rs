//! Property tests for the capture rule over random boards.

use proptest::prelude::*;

use rust_othello::core::{Board, Cell, Coord, Move, Owner};
use rust_othello::rules::{apply_move, is_legal, legal_placements, MoveOutcome};

fn arb_owner() -> impl Strategy<Value = Owner> {
    prop_oneof![Just(Owner::PlayerA), Just(Owner::PlayerB)]
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        2 => Just(Cell::Empty),
        1 => Just(Cell::Disc(Owner::PlayerA)),
        1 => Just(Cell::Disc(Owner::PlayerB)),
    ]
}

/// Random boards of assorted even sizes with random contents.
fn arb_board() -> impl Strategy<Value = Board> {
    let sides = || prop::sample::select(vec![4usize, 6, 8, 10]);
    (sides(), sides()).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(arb_cell(), rows * cols).prop_map(move |cells| {
            let mut board = Board::new(rows, cols).unwrap();
            for (i, cell) in cells.into_iter().enumerate() {
                board.set(i / cols, i % cols, cell).unwrap();
            }
            board
        })
    })
}

/// Unit step from `from` towards `to`, if they share a row, column or diagonal.
fn ray_direction(from: Coord, to: Coord) -> Option<(isize, isize)> {
    let dr = to.row as isize - from.row as isize;
    let dc = to.col as isize - from.col as isize;
    if (dr, dc) == (0, 0) || (dr != 0 && dc != 0 && dr.abs() != dc.abs()) {
        return None;
    }
    Some((dr.signum(), dc.signum()))
}

fn offset(board: &Board, coord: Coord, (dr, dc): (isize, isize), n: isize) -> Option<Coord> {
    let row = coord.row.checked_add_signed(dr * n)?;
    let col = coord.col.checked_add_signed(dc * n)?;
    board.contains(row, col).then_some(Coord::new(row, col))
}

proptest! {
    /// Only the target and flanked opponent discs change.
    #[test]
    fn applied_moves_change_only_target_and_flanked_cells(
        board in arb_board(),
        mover in arb_owner(),
        row in 0usize..12,
        col in 0usize..12,
    ) {
        let mut after = board.clone();
        let outcome = apply_move(&mut after, mover, Move::place(row, col)).unwrap();
        let target = Coord::new(row, col);

        match outcome {
            MoveOutcome::Rejected(_) => {
                prop_assert_eq!(&after, &board);
            }
            MoveOutcome::Applied(applied) => {
                prop_assert_eq!(applied.placed, Some(target));
                prop_assert_eq!(board.cell(target).unwrap(), Cell::Empty);
                prop_assert_eq!(after.cell(target).unwrap(), Cell::Disc(mover));
                prop_assert!(!applied.flipped.is_empty());

                for (coord, cell) in after.iter() {
                    let was = board.cell(coord).unwrap();
                    if coord != target && !applied.flipped.contains(&coord) {
                        prop_assert_eq!(cell, was);
                    }
                }

                for &flipped in &applied.flipped {
                    prop_assert_eq!(board.cell(flipped).unwrap(), Cell::Disc(mover.opponent()));
                    prop_assert_eq!(after.cell(flipped).unwrap(), Cell::Disc(mover));

                    // The flipped disc sits on a ray from the target, every
                    // cell up to it was the opponent's, and the ray closes on
                    // a mover disc further out.
                    let dir = ray_direction(target, flipped);
                    prop_assert!(dir.is_some());
                    let dir = dir.unwrap();

                    let mut n = 1;
                    let closing = loop {
                        match offset(&board, target, dir, n) {
                            None => break None,
                            Some(c) => match board.cell(c).unwrap() {
                                Cell::Disc(o) if o == mover.opponent() => n += 1,
                                Cell::Disc(_) => break Some(c),
                                Cell::Empty => break None,
                            },
                        }
                    };
                    prop_assert!(closing.is_some());
                }
            }
        }
    }

    /// A direction whose neighbour is empty or the mover's own never flips.
    #[test]
    fn no_capture_through_empty_or_own_neighbour(
        board in arb_board(),
        mover in arb_owner(),
        row in 0usize..10,
        col in 0usize..10,
    ) {
        let mut after = board.clone();
        let outcome = apply_move(&mut after, mover, Move::place(row, col)).unwrap();
        let target = Coord::new(row, col);

        for &flipped in outcome.flipped() {
            let dir = ray_direction(target, flipped).unwrap();
            let neighbour = offset(&board, target, dir, 1).unwrap();
            prop_assert_eq!(board.cell(neighbour).unwrap(), Cell::Disc(mover.opponent()));
        }
    }

    /// Rejected moves leave the board exactly as it was.
    #[test]
    fn rejections_leave_board_unchanged(
        board in arb_board(),
        mover in arb_owner(),
        row in 0usize..30,
        col in 0usize..30,
    ) {
        let mut after = board.clone();
        let outcome = apply_move(&mut after, mover, Move::place(row, col)).unwrap();
        if !outcome.is_applied() {
            prop_assert_eq!(after, board);
        }
    }

    /// Legality agrees with the placement enumeration.
    #[test]
    fn legality_matches_legal_placements(board in arb_board(), mover in arb_owner()) {
        let placements = legal_placements(&board, mover);

        for (coord, _) in board.iter() {
            let mut after = board.clone();
            let outcome = apply_move(&mut after, mover, Move::Place(coord)).unwrap();

            prop_assert_eq!(outcome.is_applied(), placements.contains(&coord));
            prop_assert_eq!(outcome.is_applied(), is_legal(&board, mover, coord));
        }
    }

    /// The same move sequence on equal boards gives equal boards.
    #[test]
    fn move_sequences_are_deterministic(
        board in arb_board(),
        moves in prop::collection::vec((arb_owner(), 0usize..10, 0usize..10), 0..40),
    ) {
        let mut first = board.clone();
        let mut second = board;

        for &(owner, row, col) in &moves {
            let a = apply_move(&mut first, owner, Move::place(row, col)).unwrap();
            let b = apply_move(&mut second, owner, Move::place(row, col)).unwrap();
            prop_assert_eq!(a, b);
        }

        prop_assert_eq!(first, second);
    }

    /// Disc count never drops, and equals the board area exactly when full.
    #[test]
    fn disc_total_is_monotonic(
        moves in prop::collection::vec((0usize..8, 0usize..8), 0..120),
    ) {
        let mut board = Board::with_standard_opening(8, 8).unwrap();
        let mut mover = Owner::PlayerA;
        let total = |b: &Board| b.count_owner(Owner::PlayerA) + b.count_owner(Owner::PlayerB);
        let mut last = total(&board);

        for (row, col) in moves {
            let outcome = apply_move(&mut board, mover, Move::place(row, col)).unwrap();
            let now = total(&board);

            prop_assert!(now >= last);
            prop_assert_eq!(now == 64, board.count_empty() == 0);
            if outcome.is_applied() {
                prop_assert_eq!(now, last + 1);
                mover = mover.opponent();
            }
            last = now;
        }
    }
}
