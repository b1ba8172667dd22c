//! Sequencing of a human-versus-computer game.
//!
//! The presentation layer converts clicks into `(row, col)` squares and calls
//! [`TurnController::submit_human_move`]. That call validates and applies the
//! human's move, lets the computer reply, and only returns once the board is
//! ready to be drawn again.

use crate::config::GameConfig;
use crate::search::select_best_move;
use derive_more::{Display, Error};
use othello_rules::{apply_move, is_legal, Board, Move, Player};
use tracing::{debug, instrument};

/// A human move was not legal. Nothing changed; ask for another.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "({}, {}) is not a legal move", row, col)]
pub struct MoveRejected {
    pub row: i32,
    pub col: i32,
}

/// Owns the board for one game and alternates between the human and the computer.
///
/// There is no pass and no game-over detection: a side without a legal move
/// simply does nothing on its turn. Callers that care can check
/// [`othello_rules::has_legal_move`] on [`TurnController::board`].
#[derive(Clone, Debug)]
pub struct TurnController {
    config: GameConfig,
    board: Board,
    current_player: Player,
    last_reply: Option<Move>,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl TurnController {
    /// Start a game from the standard opening position with the human to move.
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(config, Board::initial())
    }

    /// Resume a game from `board` with the human to move.
    pub fn from_position(config: GameConfig, board: Board) -> Self {
        TurnController {
            config,
            board,
            current_player: config.human(),
            last_reply: None,
        }
    }

    /// The board to render. Consistent whenever no call is in progress.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player expected to move next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The computer's reply in the most recent round, if it had one.
    pub fn last_reply(&self) -> Option<Move> {
        self.last_reply
    }

    /// Play the human's move at `(row, col)`, then the computer's reply.
    /// An illegal or off-board square is rejected without touching any state.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, row: i32, col: i32) -> Result<(), MoveRejected> {
        let human = self.config.human();
        let mv = match Move::new(row, col) {
            Ok(mv) if is_legal(&self.board, mv, human) => mv,
            _ => {
                debug!(%human, "rejected");
                return Err(MoveRejected { row, col });
            }
        };

        apply_move(&mut self.board, mv, human);
        debug!(%mv, "human moved");

        self.current_player = self.config.computer;
        self.computer_turn();
        self.current_player = human;

        Ok(())
    }

    /// Let the computer search and play. Does nothing if it has no legal move.
    fn computer_turn(&mut self) {
        let computer = self.config.computer;
        self.last_reply = select_best_move(&self.board, computer, self.config.search_depth);

        match self.last_reply {
            Some(mv) => {
                apply_move(&mut self.board, mv, computer);
                debug!(%mv, %computer, "computer moved");
            }
            None => debug!(%computer, "computer has no legal move"),
        }
    }
}
