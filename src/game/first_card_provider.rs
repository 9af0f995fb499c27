//! Deterministic baseline provider
//!
//! Reveals the front half of the hand and always plays the first card.
//! Useful as a predictable automated opponent and as a testing baseline.

use crate::core::Hand;
use crate::game::provider::MoveProvider;
use crate::Result;

/// Provider that reveals the first ⌊n/2⌋ cards and plays index 0
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCardProvider;

impl FirstCardProvider {
    pub fn new() -> Self {
        FirstCardProvider
    }
}

impl MoveProvider for FirstCardProvider {
    fn select_reveal(&mut self, _hand: &Hand, count: usize) -> Result<Vec<usize>> {
        Ok((0..count).collect())
    }

    fn select_play(&mut self, _hand: &Hand) -> Result<usize> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Rank, Suit};

    #[test]
    fn test_reveals_front_half() {
        let mut hand = Hand::new();
        for rank in [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five] {
            hand.add_card(Card::ranked(rank, Suit::Diamonds));
        }

        let mut provider = FirstCardProvider::new();
        let indices = provider.select_reveal(&hand, hand.len() / 2).unwrap();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(provider.select_play(&hand).unwrap(), 0);
    }
}
