//! `othello-player` is a fixed-depth minimax opponent for `othello-rules`,
//! together with the turn sequencing for a human-versus-computer game.

pub mod config;
pub mod controller;
pub mod evaluate;
pub mod search;

pub use config::GameConfig;
pub use controller::{MoveRejected, TurnController};
pub use evaluate::{evaluate, evaluate_for};
pub use search::{select_best_move, Searcher, DEFAULT_DEPTH};
