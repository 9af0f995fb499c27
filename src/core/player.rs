//! Player representation

use crate::core::{Hand, PlayerName};
use serde::{Deserialize, Serialize};

/// Which side of the table a player sits on
///
/// The human seat always acts first in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Opponent,
}

impl Seat {
    pub fn other(&self) -> Seat {
        match self {
            Seat::Human => Seat::Opponent,
            Seat::Opponent => Seat::Human,
        }
    }
}

/// A player: name, hand, and resource counters
///
/// The resource counters are not consulted by the turn protocol; they exist
/// for effect rules to read and spend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Player name
    pub name: PlayerName,

    /// Cards currently held
    pub hand: Hand,

    /// "+" resources, starting at 3
    pub plus_resources: u8,

    /// "x" resources, starting at 1
    pub cross_resources: u8,
}

impl Player {
    pub fn new(name: impl Into<PlayerName>) -> Self {
        Player {
            name: name.into(),
            hand: Hand::new(),
            plus_resources: 3,
            cross_resources: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new("Alice");
        assert_eq!(player.name.as_str(), "Alice");
        assert!(player.hand.is_empty());
        assert_eq!(player.plus_resources, 3);
        assert_eq!(player.cross_resources, 1);
    }

    #[test]
    fn test_seat_other() {
        assert_eq!(Seat::Human.other(), Seat::Opponent);
        assert_eq!(Seat::Opponent.other(), Seat::Human);
    }
}
