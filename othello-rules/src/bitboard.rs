//! Packed one-bit-per-square board masks.
//!
//! By convention, the MSB is the upper-left square `(0, 0)` and bits follow
//! row-major order, so square index `i` lives at bit `63 - i`.

use crate::{utils, Move};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// One of the eight unit steps between neighbouring squares.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

/// All eight directions, upper-left first.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, -1),
    Direction::new(1, 0),
    Direction::new(1, 1),
];

// Column masks, used to drop bits that wrap around the left or right edge.
const LEFT_COLUMN: u64 = 0x8080_8080_8080_8080;
const RIGHT_COLUMN: u64 = 0x0101_0101_0101_0101;

/// Starting discs for Black: (3, 4) and (4, 3).
pub const BLACK_START: Bitboard = Bitboard(0x0000_0008_1000_0000);

/// Starting discs for White: (3, 3) and (4, 4).
pub const WHITE_START: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// The four corner squares.
pub const CORNERS: Bitboard = Bitboard(0x8100_0000_0000_0081);

impl Bitboard {
    pub const EMPTY: Self = Self(0);

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if `mv`'s square is set.
    #[inline]
    pub fn contains(self, mv: Move) -> bool {
        !(self & mv.mask()).is_empty()
    }

    /// Move every set bit one step along `dir`.
    /// Bits that would leave the board, including by wrapping around a side edge, are dropped.
    #[inline]
    pub fn shift(self, dir: Direction) -> Self {
        // Positive offsets point toward the lower-right, which is toward the LSB.
        let offset = 8 * i32::from(dir.d_row) + i32::from(dir.d_col);
        let shifted = if offset >= 0 {
            self.0 >> offset
        } else {
            self.0 << -offset
        };

        let keep = match dir.d_col {
            1 => !LEFT_COLUMN,
            -1 => !RIGHT_COLUMN,
            _ => !0,
        };

        Self(shifted & keep)
    }

    /// Iterate the set squares in row-major order.
    #[inline]
    pub fn squares(self) -> Squares {
        Squares(self)
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(f, |mv| if self.contains(mv) { '#' } else { '.' })
    }
}

/// Iterator over the set squares of a [`Bitboard`], upper-left first.
#[derive(Clone, Copy, Debug)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.0.is_empty() {
            return None;
        }

        let index = (self.0).0.leading_zeros() as usize;
        let mv = Move::from_index(index);
        self.0 ^= mv.mask();
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Squares {}
