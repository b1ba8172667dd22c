//! Static evaluation used at the leaves of the search tree.

use othello_rules::{Board, Player};

/// Weight of a disc on one of the four corners, which can never be recaptured.
pub const CORNER_WEIGHT: i32 = 5;

/// Weight of a disc anywhere else.
pub const DISC_WEIGHT: i32 = 1;

/// Weighted disc total for one colour.
fn material(board: &Board, player: Player) -> i32 {
    board
        .discs(player)
        .squares()
        .map(|mv| if mv.is_corner() { CORNER_WEIGHT } else { DISC_WEIGHT })
        .sum()
}

/// Score `board` with positive values favoring Black and negative values favoring White.
/// Knows nothing about whose turn it is.
pub fn evaluate(board: &Board) -> i32 {
    material(board, Player::Black) - material(board, Player::White)
}

/// Score `board` from `player`'s side: higher is better for `player`.
#[inline]
pub fn evaluate_for(board: &Board, player: Player) -> i32 {
    evaluate(board) * player.sign()
}
