//! Card types and definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suit of a ranked card
///
/// Jokers carry no suit; `Card` models that with `Option<Suit>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '\u{2660}',
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rank of a card, including the two joker variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    JokerOne,
    JokerTwo,
}

impl Rank {
    /// The thirteen ranked values, in ascending settlement order
    pub const RANKED: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Settlement value: A=1 .. K=13, jokers 0
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::JokerOne | Rank::JokerTwo => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::JokerOne => "Joker1",
            Rank::JokerTwo => "Joker2",
        }
    }
}

/// A single card, immutable once constructed
///
/// Every card instance drawn from a pool is distinct: equality of rank and
/// suit does not make two instances "the same card". Settlement looks only
/// at `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Option<Suit>,
    value: u8,
}

impl Card {
    /// Create a ranked card; value derives from the rank
    pub fn ranked(rank: Rank, suit: Suit) -> Self {
        debug_assert!(
            !matches!(rank, Rank::JokerOne | Rank::JokerTwo),
            "jokers are built with Card::joker"
        );
        Card {
            rank,
            suit: Some(suit),
            value: rank.value(),
        }
    }

    /// Create one of the two joker cards (no suit, value 0)
    pub fn joker(rank: Rank) -> Self {
        debug_assert!(matches!(rank, Rank::JokerOne | Rank::JokerTwo));
        Card {
            rank,
            suit: None,
            value: 0,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Settlement value, 0..=13
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_joker(&self) -> bool {
        self.suit.is_none()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", self.rank.label(), suit),
            None => write!(f, "{}", self.rank.label()),
        }
    }
}
