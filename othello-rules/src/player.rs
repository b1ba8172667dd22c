//! The two sides of a game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    fn default() -> Self {
        Self::Black
    }
}

impl Player {
    /// `+1` for Black and `-1` for White.
    /// Multiplying a Black-positive score by this gives the score from this player's side.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "expected \"black\" or \"white\"")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Player::Black),
            "white" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(!Player::Black, Player::White);
        assert_eq!(!!Player::White, Player::White);
    }

    #[test]
    fn sign() {
        assert_eq!(Player::Black.sign(), -Player::White.sign());
    }

    #[test]
    fn parse() {
        assert_eq!("Black".parse(), Ok(Player::Black));
        assert_eq!(" white ".parse(), Ok(Player::White));
        assert_eq!("red".parse::<Player>(), Err(ParsePlayerError));
        assert_eq!(Player::White.to_string(), "White");
    }
}
