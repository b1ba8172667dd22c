//! Code for working with [`Move`]s: validated `(row, col)` squares on the board.

use crate::bitboard::{Bitboard, CORNERS};
use crate::utils::COLUMN_LETTERS;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use itertools::iproduct;
use std::fmt::{self, Formatter, Write};

/// A square on the Othello board, addressed by row and column in `[0, 8)`.
///
/// Moves order row-major: by row first, then by column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    row: u8,
    col: u8,
}

/// A coordinate pair fell outside the board.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "square ({}, {}) is off the board", row, col)]
pub struct OutOfRange {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Build a move from row and column coordinates.
    pub fn new(row: i32, col: i32) -> Result<Self, OutOfRange> {
        let on_board = |x: i32| x >= 0 && (x as usize) < EDGE_LENGTH;
        if on_board(row) && on_board(col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(OutOfRange { row, col })
        }
    }

    /// Convert from a row-major square index.
    /// Panics if `index` is not below [`NUM_SPACES`].
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < NUM_SPACES);
        Self {
            row: (index / EDGE_LENGTH) as u8,
            col: (index % EDGE_LENGTH) as u8,
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn index(self) -> usize {
        self.row() * EDGE_LENGTH + self.col()
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// A one-hot bitboard selecting this square.
    #[inline]
    pub fn mask(self) -> Bitboard {
        Bitboard::from(1u64 << (NUM_SPACES - 1 - self.index()))
    }

    pub fn is_corner(self) -> bool {
        CORNERS.contains(self)
    }

    /// Every square on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        iproduct!(0..EDGE_LENGTH as u8, 0..EDGE_LENGTH as u8).map(|(row, col)| Move { row, col })
    }
}

/// Convert this [`Move`] into string notation ("D3" is row 2, column 3).
impl fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let letter = COLUMN_LETTERS.chars().nth(self.col()).ok_or(fmt::Error)?;
        f.write_char(letter)?;
        write!(f, "{}", self.row() + 1)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "invalid move notation")]
pub struct ParseMoveError;

/// Build a [`Move`] from 1-indexed string notation ("A4", case-insensitive).
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = chars.next().ok_or(ParseMoveError)?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.find(letter).ok_or(ParseMoveError)? as i32;
        let row = chars
            .next()
            .ok_or(ParseMoveError)?
            .to_digit(10)
            .ok_or(ParseMoveError)? as i32;

        if chars.next().is_some() {
            return Err(ParseMoveError);
        }

        Self::new(row - 1, col).or(Err(ParseMoveError))
    }
}
