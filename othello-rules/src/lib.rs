//! `othello-rules` implements the rules of 8x8 Othello for engines and UIs.
//!
//! The crate is organized in layers:
//!
//!  - [`bitboard`] holds the packed one-bit-per-square representation and the
//!    edge-aware shifts used to walk rays across the board.
//!  - [`Board`] stores cell occupancy and answers read-only queries about it.
//!  - [`rules`] encodes legality and capture: checking, enumerating, applying
//!    and retracting moves. It is the only code allowed to mutate a [`Board`].
//!
//! Coordinates are `(row, col)` pairs with `(0, 0)` in the upper-left corner.

pub mod bitboard;
pub mod rules;
pub mod test_utils;

mod board;
mod location;
mod player;
mod utils;

pub use board::*;
pub use location::*;
pub use player::*;
pub use rules::{
    apply_move, flips_for, has_legal_move, is_legal, is_legal_move, legal_moves, retract_move, Flips,
    MoveList,
};

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
