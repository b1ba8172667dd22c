//! Othello legality and capture.
//!
//! A placement is legal when at least one ray leaving the placed square
//! crosses one or more consecutive opponent discs and then closes on one of
//! the mover's own discs. Every opponent disc on such a ray is flipped.
//!
//! These functions are the only way to mutate a [`Board`]. [`apply_move`] and
//! [`retract_move`] are exact inverses, so a search can walk the game tree on
//! a single board without copying it at every node.

use crate::bitboard::{Bitboard, Direction, DIRECTIONS};
use crate::{Board, Cell, Move, Player, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::Into;

/// Legal moves in row-major order.
pub type MoveList = ArrayVec<[Move; NUM_SPACES]>;

/// The discs flipped by one [`apply_move`]; needed to [`retract_move`] it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Into)]
pub struct Flips(Bitboard);

impl Flips {
    /// Number of discs flipped.
    #[inline]
    pub fn count(self) -> u8 {
        self.0.count_occupied()
    }

    /// The flipped squares in row-major order.
    pub fn squares(self) -> impl Iterator<Item = Move> {
        self.0.squares()
    }
}

/// Discs `player` would capture along `dir` by placing at `mv`.
/// Empty unless the ray crosses at least one opponent disc and closes on one of `player`'s own.
#[inline]
fn ray_captures(board: &Board, mv: Move, player: Player, dir: Direction) -> Bitboard {
    let own = board.discs(player);
    let opponent = board.discs(!player);

    let mut crossed = Bitboard::EMPTY;
    let mut cursor = mv.mask().shift(dir);

    // The cursor empties once it runs off the board.
    while !(cursor & opponent).is_empty() {
        crossed |= cursor;
        cursor = cursor.shift(dir);
    }

    if crossed.is_empty() || (cursor & own).is_empty() {
        Bitboard::EMPTY
    } else {
        crossed
    }
}

/// All discs that placing at `mv` would flip for `player`, across every direction.
/// Does not check that `mv` is empty.
pub fn flips_for(board: &Board, mv: Move, player: Player) -> Flips {
    let flips = DIRECTIONS
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_captures(board, mv, player, dir));
    Flips(flips)
}

/// Returns whether `player` may place a disc at an already-validated square.
#[inline]
pub fn is_legal(board: &Board, mv: Move, player: Player) -> bool {
    board.cell(mv) == Cell::Empty
        && DIRECTIONS
            .iter()
            .any(|&dir| !ray_captures(board, mv, player, dir).is_empty())
}

/// Returns whether `player` may place a disc at `(row, col)`.
/// Off-board coordinates and occupied cells are simply illegal.
pub fn is_legal_move(board: &Board, row: i32, col: i32, player: Player) -> bool {
    match Move::new(row, col) {
        Ok(mv) => is_legal(board, mv, player),
        Err(_) => false,
    }
}

/// Every legal move for `player`, scanning rows top to bottom and each row left to right.
/// Search relies on this order for tie-breaking.
pub fn legal_moves(board: &Board, player: Player) -> MoveList {
    Move::all()
        .filter(|&mv| is_legal(board, mv, player))
        .collect()
}

/// Returns whether `player` has any legal move at all.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Move::all().any(|mv| is_legal(board, mv, player))
}

/// Place a disc for `player` at `mv` and flip every captured opponent disc.
/// `mv` must be legal for `player`; this is only checked in debug builds.
/// All flips are written at once, so no partially-flipped board is ever visible.
pub fn apply_move(board: &mut Board, mv: Move, player: Player) -> Flips {
    debug_assert!(is_legal(board, mv, player), "{} is not legal for {}", mv, player);

    let flips = flips_for(board, mv, player);
    *board.discs_mut(player) |= flips.0 | mv.mask();
    *board.discs_mut(!player) ^= flips.0;
    flips
}

/// Undo an [`apply_move`] of `mv` by `player` that returned `flips`.
/// Must be called on the board exactly as `apply_move` left it.
pub fn retract_move(board: &mut Board, mv: Move, player: Player, flips: Flips) {
    debug_assert_eq!(board.cell(mv), Cell::from(player));

    *board.discs_mut(player) ^= flips.0 | mv.mask();
    *board.discs_mut(!player) |= flips.0;
}
