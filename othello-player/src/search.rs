//! Fixed-depth minimax search.
//!
//! The search walks the game tree on one private copy of the board, applying
//! a move on the way down and retracting it on the way back up. At most one
//! move per recursion level is outstanding at any time.

use crate::evaluate::evaluate_for;
use othello_rules::{apply_move, legal_moves, retract_move, Board, Move, Player};
use tracing::{debug, trace_span};

/// Search depth, in plies, used when none is configured.
pub const DEFAULT_DEPTH: u8 = 3;

/// Pick the best move for `player` by searching `depth` plies ahead.
/// Returns `None` when `player` has no legal move.
///
/// `board` is copied; the caller's board is never modified.
pub fn select_best_move(board: &Board, player: Player, depth: u8) -> Option<Move> {
    Searcher::new(*board, player).best_move(depth)
}

/// A plain minimax search for one player.
pub struct Searcher {
    board: Board,
    player: Player,
    nodes: u64,
}

impl Searcher {
    pub fn new(board: Board, player: Player) -> Self {
        Searcher {
            board,
            player,
            nodes: 0,
        }
    }

    /// The working board. Identical to the starting board whenever no search is running.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of minimax nodes visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score each legal root move with `minimax` and keep the first one with the highest score.
    /// A depth of zero is searched as depth one, since a root move must be made to score anything.
    pub fn best_move(&mut self, depth: u8) -> Option<Move> {
        let span = trace_span!("search", player = %self.player, depth);
        let _enter = span.enter();

        let depth = depth.max(1);
        let mut best: Option<(Move, i32)> = None;

        for mv in legal_moves(&self.board, self.player) {
            let flips = apply_move(&mut self.board, mv, self.player);
            let score = self.minimax(depth - 1, false);
            retract_move(&mut self.board, mv, self.player, flips);

            debug!(%mv, score, "scored candidate");

            // Only a strictly better score replaces the incumbent, so ties go to the earliest move.
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }

        match best {
            Some((mv, score)) => debug!(%mv, score, nodes = self.nodes, "selected move"),
            None => debug!("no legal move"),
        }

        best.map(|(mv, _)| mv)
    }

    /// Score the working board from the searching player's side, looking `depth` plies ahead.
    /// `maximizing` is true when the searching player is the one to move.
    ///
    /// A side with no legal move is scored like a depth-exhausted leaf: there is no pass.
    pub fn minimax(&mut self, depth: u8, maximizing: bool) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate_for(&self.board, self.player);
        }

        let mover = if maximizing { self.player } else { !self.player };
        let moves = legal_moves(&self.board, mover);
        if moves.is_empty() {
            return evaluate_for(&self.board, self.player);
        }

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let flips = apply_move(&mut self.board, mv, mover);
            let score = self.minimax(depth - 1, !maximizing);
            retract_move(&mut self.board, mv, mover, flips);

            best_score = if maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn mv(row: i32, col: i32) -> Move {
        Move::new(row, col).unwrap()
    }

    /// Reference minimax that copies the board at every node instead of retracting.
    fn minimax_by_copy(board: Board, player: Player, depth: u8, maximizing: bool) -> i32 {
        if depth == 0 {
            return evaluate_for(&board, player);
        }
        let mover = if maximizing { player } else { !player };
        let moves = legal_moves(&board, mover);
        if moves.is_empty() {
            return evaluate_for(&board, player);
        }

        let scores = moves.iter().map(|&mv| {
            let mut child = board;
            apply_move(&mut child, mv, mover);
            minimax_by_copy(child, player, depth - 1, !maximizing)
        });
        if maximizing {
            scores.max().unwrap()
        } else {
            scores.min().unwrap()
        }
    }

    // Black can take the (7, 7) corner or flip two discs at (0, 5).
    const CORNER_OR_RUN: &str = "
        ..XOO...
        ........
        ........
        ........
        ........
        ........
        ........
        .....XO.";

    #[test]
    fn single_legal_move() {
        let b = board(
            "
            XO......
            ........
            ........
            ........
            ........
            ........
            ........
            ........",
        );
        assert_eq!(legal_moves(&b, Player::Black).as_slice(), &[mv(0, 2)]);
        assert_eq!(select_best_move(&b, Player::Black, 1), Some(mv(0, 2)));
    }

    #[test]
    fn no_legal_move() {
        let b = board(&"X".repeat(64));
        assert_eq!(select_best_move(&b, Player::Black, DEFAULT_DEPTH), None);
        assert_eq!(select_best_move(&b, Player::White, DEFAULT_DEPTH), None);
    }

    #[test]
    fn ties_go_to_first_move() {
        // Every opening move scores the same at depth one.
        assert_eq!(
            select_best_move(&Board::initial(), Player::Black, 1),
            Some(mv(2, 3))
        );
        assert_eq!(
            select_best_move(&Board::initial(), Player::White, 1),
            Some(mv(2, 4))
        );
    }

    #[test]
    fn prefers_corner() {
        let b = board(CORNER_OR_RUN);
        assert_eq!(
            legal_moves(&b, Player::Black).as_slice(),
            &[mv(0, 5), mv(7, 7)]
        );
        assert_eq!(select_best_move(&b, Player::Black, 1), Some(mv(7, 7)));
    }

    #[test]
    fn lookahead_changes_choice() {
        let b = board(
            "
            ........
            ........
            ........
            ...OX...
            ..OOO...
            ....XXX.
            ........
            ........",
        );
        assert_eq!(
            legal_moves(&b, Player::Black).as_slice(),
            &[mv(2, 2), mv(3, 2), mv(5, 2)]
        );

        // (2, 2) and (3, 2) tie one ply deep, but only (3, 2) holds up after White's reply.
        assert_eq!(select_best_move(&b, Player::Black, 1), Some(mv(2, 2)));
        assert_eq!(select_best_move(&b, Player::Black, 3), Some(mv(3, 2)));
    }

    #[test]
    fn searches_for_white() {
        let b = board(CORNER_OR_RUN).swap_colors();
        assert_eq!(select_best_move(&b, Player::White, 1), Some(mv(7, 7)));
    }

    #[test]
    fn depth_zero_searches_one_ply() {
        let b = board(CORNER_OR_RUN);
        assert_eq!(select_best_move(&b, Player::Black, 0), Some(mv(7, 7)));
    }

    #[test]
    fn stuck_opponent_is_a_leaf() {
        // After (0, 2) White has no disc left, so the reply node is scored immediately.
        let b = board(&format!("XO{}", ".".repeat(62)));
        let mut searcher = Searcher::new(b, Player::Black);
        assert_eq!(searcher.best_move(DEFAULT_DEPTH), Some(mv(0, 2)));
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn working_board_is_restored() {
        let start = Board::initial();
        let mut searcher = Searcher::new(start, Player::Black);
        let chosen = searcher.best_move(4);
        assert_eq!(*searcher.board(), start);
        assert!(legal_moves(&start, Player::Black).contains(&chosen.unwrap()));
    }

    #[test]
    fn agrees_with_copying_search() {
        let positions = [
            Board::initial(),
            board(CORNER_OR_RUN),
            board(
                "
                ........
                ........
                ..XXXO..
                ..OXO...
                ..OOXX..
                ...X.O..
                ........
                ........",
            ),
        ];

        for position in positions.iter() {
            for &player in [Player::Black, Player::White].iter() {
                for depth in 0..4 {
                    let mut searcher = Searcher::new(*position, player);
                    assert_eq!(
                        searcher.minimax(depth, true),
                        minimax_by_copy(*position, player, depth, true),
                        "{} to move at depth {}{}",
                        player,
                        depth,
                        position
                    );
                    assert_eq!(searcher.board(), position);
                }
            }
        }
    }
}
