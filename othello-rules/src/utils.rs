//! Miscellaneous project utilities.

use crate::Move;
use std::fmt::{self, Formatter};

/// Column labels, left to right.
pub const COLUMN_LETTERS: &str = "ABCDEFGH";

/// Render a board-shaped grid with lettered columns and numbered rows.
/// `symbol` is queried once per square, in row-major order.
pub fn format_grid<F>(f: &mut Formatter, mut symbol: F) -> fmt::Result
where
    F: FnMut(Move) -> char,
{
    f.write_str("  ")?;
    for letter in COLUMN_LETTERS.chars() {
        write!(f, " {}", letter)?;
    }

    for mv in Move::all() {
        if mv.col() == 0 {
            write!(f, "\n{} ", mv.row() + 1)?;
        }
        write!(f, " {}", symbol(mv))?;
    }

    Ok(())
}
