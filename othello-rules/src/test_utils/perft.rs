//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for validating move generation and flipping.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! Passes are not modelled: a side with no legal move ends the line there.
//! The reference counts only diverge from that once passing becomes possible,
//! at depth 9.

use crate::rules::{apply_move, legal_moves, retract_move};
use crate::{Board, Player};

pub fn run_perft(depth: u64) -> u64 {
    let mut board = Board::initial();
    leaves_below(&mut board, Player::Black, depth)
}

fn leaves_below(board: &mut Board, player: Player, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return 1;
    }

    moves
        .iter()
        .map(|&mv| {
            let flips = apply_move(board, mv, player);
            let leaves = leaves_below(board, !player, depth - 1);
            retract_move(board, mv, player, flips);
            leaves
        })
        .sum()
}
