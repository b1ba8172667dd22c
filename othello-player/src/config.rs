//! Game settings chosen before play starts.

use crate::search::DEFAULT_DEPTH;
use othello_rules::Player;
use serde::{Deserialize, Serialize};

/// Which colour the computer plays and how deep it searches.
/// The human always plays the other colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub computer: Player,
    pub search_depth: u8,
}

impl Default for GameConfig {
    /// Computer plays Black and searches three plies; the human plays White.
    fn default() -> Self {
        GameConfig {
            computer: Player::Black,
            search_depth: DEFAULT_DEPTH,
        }
    }
}

impl GameConfig {
    /// The colour played by the human.
    #[inline]
    pub fn human(&self) -> Player {
        !self.computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sides() {
        let config = GameConfig::default();
        assert_eq!(config.computer, Player::Black);
        assert_eq!(config.human(), Player::White);
        assert_eq!(config.search_depth, 3);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "computer": "White" }"#).unwrap();
        assert_eq!(config.human(), Player::Black);
        assert_eq!(config.search_depth, DEFAULT_DEPTH);

        let config: GameConfig = serde_json::from_str(r#"{ "search_depth": 1 }"#).unwrap();
        assert_eq!(config.computer, Player::Black);
        assert_eq!(config.search_depth, 1);
    }

    #[test]
    fn unknown_colour_is_rejected() {
        assert!(serde_json::from_str::<GameConfig>(r#"{ "computer": "Red" }"#).is_err());
    }
}
