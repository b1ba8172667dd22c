//! Cell occupancy for the 8x8 board.
//!
//! A [`Board`] is a pair of disjoint [`Bitboard`]s, one per colour. Outside
//! this crate it is read-only: only [`crate::rules`] places and flips discs.

use crate::bitboard::{Bitboard, BLACK_START, WHITE_START};
use crate::{utils, Move, OutOfRange, Player, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of one square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// An 8x8 grid of [`Cell`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// The standard starting position: White on (3, 3) and (4, 4), Black on (3, 4) and (4, 3).
    pub const fn initial() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    pub(crate) const fn empty() -> Self {
        Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        }
    }

    /// Look up a cell by raw coordinates.
    pub fn get(&self, row: i32, col: i32) -> Result<Cell, OutOfRange> {
        Move::new(row, col).map(|mv| self.cell(mv))
    }

    /// Look up the cell at an already-validated square.
    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        if self.black.contains(mv) {
            Cell::Black
        } else if self.white.contains(mv) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Overwrite one cell. Callers maintain the game invariants.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        let mask = mv.mask();
        self.black &= !mask;
        self.white &= !mask;
        match cell {
            Cell::Empty => {}
            Cell::Black => self.black |= mask,
            Cell::White => self.white |= mask,
        }
    }

    /// The discs belonging to `player`.
    #[inline]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    #[inline]
    pub(crate) fn discs_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// Number of discs `player` has on the board.
    #[inline]
    pub fn count(&self, player: Player) -> u8 {
        self.discs(player).count_occupied()
    }

    /// A mask of every occupied square.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    #[inline]
    pub fn count_occupied(&self) -> u8 {
        self.occupied().count_occupied()
    }

    /// All 64 cells with their squares, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::all().map(move |mv| (mv, self.cell(mv)))
    }

    /// The same position with the colours exchanged.
    pub fn swap_colors(self) -> Self {
        Self {
            black: self.white,
            white: self.black,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |mv| self.cell(mv).symbol())
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board", _0)]
    BadCharacter(#[error(not(source))] char),
    #[display(fmt = "board has {} squares instead of 64", _0)]
    WrongLength(#[error(not(source))] usize),
}

/// Parse a board from 64 cell characters in row-major order; whitespace is ignored.
/// `X`, `B` or `*` is Black, `O` or `W` is White, and `.` or `-` is empty.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(symbols.len()));
        }

        let mut board = Board::empty();
        for (mv, symbol) in Move::all().zip(symbols) {
            let cell = match symbol.to_ascii_uppercase() {
                'X' | 'B' | '*' => Cell::Black,
                'O' | 'W' => Cell::White,
                '.' | '-' => Cell::Empty,
                other => return Err(ParseBoardError::BadCharacter(other)),
            };
            board.set(mv, cell);
        }

        Ok(board)
    }
}
