//! A player's hand of cards

use crate::core::Card;
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, mutable collection of cards held by one player
///
/// Cards enter by transfer from a pool and leave by being played. The hand
/// never caps its own size; any such rule belongs to the turn engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    /// Append a card to the end of the hand
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the card at `index`, preserving the relative order
    /// of the remaining cards
    pub fn remove_at(&mut self, index: usize) -> Result<Card> {
        if index >= self.cards.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Card at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Sum of settlement values; 0 for an empty hand
    pub fn sum_value(&self) -> u32 {
        self.cards.iter().map(|c| c.value() as u32).sum()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
            first = false;
        }
        Ok(())
    }
}
