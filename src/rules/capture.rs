//! Flanking capture: move legality and board mutation.
//!
//! Placing a disc captures every straight, unbroken run of opposing discs
//! that ends in one of the mover's own discs. From the target square each
//! of the eight directions is scanned outward:
//!
//! 1. The first step is off the board, empty, or the mover's own disc:
//!    nothing in this direction.
//! 2. Otherwise keep stepping while the discs belong to the opponent.
//! 3. Off the board or an empty square before a mover disc: nothing.
//! 4. A mover disc: every opponent disc passed on the way is captured.
//!
//! A placement is legal when at least one direction captures. Rays never
//! share cells, so the union of all rays does not depend on scan order.
//! Scanning is read-only and finishes before the first write, so a rejected
//! move never touches the board and an applied one is a single transition.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::direction::Direction;
use crate::core::{Board, BoardError, Cell, Coord, Move, Owner};

/// Cells flipped by one move.
pub type Captures = SmallVec<[Coord; 8]>;

/// Why a move was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The target is not on the board.
    OutOfBounds,
    /// The target already holds a disc.
    CellOccupied,
    /// No direction flanks any opposing disc.
    NoCapture,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::OutOfBounds => write!(f, "square is off the board"),
            Rejection::CellOccupied => write!(f, "square is already taken"),
            Rejection::NoCapture => write!(f, "move does not capture any disc"),
        }
    }
}

/// What an applied move changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applied {
    /// The square the new disc went on; `None` for a pass.
    pub placed: Option<Coord>,
    /// Opposing discs turned over, grouped by direction.
    pub flipped: Captures,
}

/// Result of one move attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Applied(Applied),
    Rejected(Rejection),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Applied(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }

    /// Flipped cells; empty for passes and rejections.
    #[must_use]
    pub fn flipped(&self) -> &[Coord] {
        match self {
            MoveOutcome::Applied(applied) => applied.flipped.as_slice(),
            MoveOutcome::Rejected(_) => &[],
        }
    }
}

/// Scan one ray from `origin` and return the opposing discs it flanks.
fn ray_captures(
    board: &Board,
    mover: Owner,
    origin: Coord,
    dir: Direction,
) -> Result<Captures, BoardError> {
    let mut run = Captures::new();
    let mut cursor = origin;

    while let Some(next) = dir.step(cursor, board) {
        match board.cell(next)? {
            Cell::Empty => return Ok(Captures::new()),
            Cell::Disc(owner) if owner == mover => return Ok(run),
            Cell::Disc(_) => run.push(next),
        }
        cursor = next;
    }

    Ok(Captures::new())
}

/// Every opposing disc that placing `mover` at `coord` would flip.
///
/// Does not look at the target square itself; callers check that it is
/// empty. Fails only if `coord` is off the board.
pub fn captures(board: &Board, mover: Owner, coord: Coord) -> Result<Captures, BoardError> {
    board.cell(coord)?;

    let mut all = Captures::new();
    for dir in Direction::ALL {
        let ray = ray_captures(board, mover, coord, dir)?;
        if !ray.is_empty() {
            trace!(?coord, ?dir, count = ray.len(), "ray captures");
            all.extend(ray);
        }
    }

    Ok(all)
}

/// Check if `mover` may place at `coord`.
#[must_use]
pub fn is_legal(board: &Board, mover: Owner, coord: Coord) -> bool {
    match board.cell(coord) {
        Ok(Cell::Empty) => captures(board, mover, coord).is_ok_and(|c| !c.is_empty()),
        _ => false,
    }
}

/// Every legal placement for `mover`, in row-major order.
#[must_use]
pub fn legal_placements(board: &Board, mover: Owner) -> Vec<Coord> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(coord, _)| coord)
        .filter(|&coord| is_legal(board, mover, coord))
        .collect()
}

/// Check if `mover` has any legal placement. Stops at the first one.
#[must_use]
pub fn has_legal_placement(board: &Board, mover: Owner) -> bool {
    board
        .iter()
        .any(|(coord, cell)| cell.is_empty() && is_legal(board, mover, coord))
}

/// Validate `mv` for `mover` and, if legal, apply it.
///
/// `Skip` is always applied and changes nothing. A placement is rejected
/// when off the board, on an occupied square, or when it captures nothing;
/// rejected moves leave the board untouched. A legal placement sets the
/// target and every captured disc to `mover`.
///
/// `Err` is reserved for faults and does not happen for any `mv` on a
/// well-formed board.
///
/// ```
/// use rust_othello::core::{Board, Cell, Move, Owner};
/// use rust_othello::rules::{apply_move, Rejection};
///
/// let mut board = Board::new(8, 8).unwrap();
/// board.set(3, 3, Cell::Disc(Owner::PlayerA)).unwrap();
/// board.set(3, 4, Cell::Disc(Owner::PlayerB)).unwrap();
///
/// let outcome = apply_move(&mut board, Owner::PlayerA, Move::place(3, 5)).unwrap();
/// assert!(outcome.is_applied());
/// assert_eq!(board.get(3, 4).unwrap(), Cell::Disc(Owner::PlayerA));
///
/// let outcome = apply_move(&mut board, Owner::PlayerB, Move::place(8, 8)).unwrap();
/// assert_eq!(outcome.rejection(), Some(Rejection::OutOfBounds));
/// ```
pub fn apply_move(board: &mut Board, mover: Owner, mv: Move) -> Result<MoveOutcome, BoardError> {
    let coord = match mv {
        Move::Skip => {
            trace!(?mover, "pass");
            return Ok(MoveOutcome::Applied(Applied::default()));
        }
        Move::Place(coord) => coord,
    };

    if !board.contains(coord.row, coord.col) {
        debug!(?mover, %coord, "rejected: out of bounds");
        return Ok(MoveOutcome::Rejected(Rejection::OutOfBounds));
    }

    if !board.cell(coord)?.is_empty() {
        debug!(?mover, %coord, "rejected: cell occupied");
        return Ok(MoveOutcome::Rejected(Rejection::CellOccupied));
    }

    let flipped = captures(board, mover, coord)?;
    if flipped.is_empty() {
        debug!(?mover, %coord, "rejected: no capture");
        return Ok(MoveOutcome::Rejected(Rejection::NoCapture));
    }

    let disc = Cell::Disc(mover);
    board.set(coord.row, coord.col, disc)?;
    for cell in &flipped {
        board.set(cell.row, cell.col, disc)?;
    }

    trace!(?mover, %coord, flipped = flipped.len(), "move applied");
    Ok(MoveOutcome::Applied(Applied {
        placed: Some(coord),
        flipped,
    }))
}
