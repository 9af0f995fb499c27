//! Ordered card pools: the main deck and the public (face-down) pool

use crate::core::{Card, Rank, Suit};
use crate::{GameError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered stack of cards
///
/// Used for both the main deck and the public pool. A pool exclusively owns
/// every card it holds until that card is drawn out; draws transfer
/// ownership to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPool {
    /// Cards in draw order; the last element is the top of the pool
    cards: Vec<Card>,
}

impl CardPool {
    /// Create an empty pool
    pub fn new() -> Self {
        CardPool { cards: Vec::new() }
    }

    /// Create a pool from an existing card sequence (last card on top)
    pub fn from_cards(cards: Vec<Card>) -> Self {
        CardPool { cards }
    }

    /// Build the standard 54-card pool: 4 suits x 13 ranks plus two jokers
    ///
    /// Composition is deterministic; order before `shuffle` is unspecified.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(54);
        for suit in Suit::ALL {
            for rank in Rank::RANKED {
                cards.push(Card::ranked(rank, suit));
            }
        }
        cards.push(Card::joker(Rank::JokerOne));
        cards.push(Card::joker(Rank::JokerTwo));
        CardPool { cards }
    }

    /// Shuffle the pool into a uniformly random order
    ///
    /// The RNG is injected so matches can be seeded for deterministic
    /// replay. No-op on an empty pool.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(GameError::EmptyPool)
    }

    /// Draw `count` cards into a new pool (used to split off the public pool)
    pub fn draw_pool(&mut self, count: usize) -> Result<CardPool> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            cards.push(self.draw()?);
        }
        Ok(CardPool { cards })
    }

    /// Number of cards remaining
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn test_standard_composition() {
        let pool = CardPool::standard();
        assert_eq!(pool.len(), 54);

        let mut pool = pool;
        let mut jokers = 0;
        let mut ranked = 0;
        let mut total_value: u32 = 0;
        while let Ok(card) = pool.draw() {
            if card.is_joker() {
                jokers += 1;
            } else {
                ranked += 1;
            }
            total_value += card.value() as u32;
        }
        assert_eq!(jokers, 2);
        assert_eq!(ranked, 52);
        // 4 suits x (1 + 2 + ... + 13)
        assert_eq!(total_value, 4 * 91);
    }

    #[test]
    fn test_draw_decrements_and_fails_when_empty() {
        let mut pool = CardPool::from_cards(vec![Card::ranked(Rank::Ace, Suit::Spades)]);
        assert_eq!(pool.len(), 1);
        assert!(pool.draw().is_ok());
        assert_eq!(pool.len(), 0);
        assert!(matches!(pool.draw(), Err(GameError::EmptyPool)));
    }

    #[test]
    fn test_shuffle_preserves_membership() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let mut pool = CardPool::standard();
        pool.shuffle(&mut rng);
        assert_eq!(pool.len(), 54);

        let mut values: u32 = 0;
        while let Ok(card) = pool.draw() {
            values += card.value() as u32;
        }
        assert_eq!(values, 4 * 91);
    }

    #[test]
    fn test_shuffle_on_empty_pool_is_noop() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let mut pool = CardPool::new();
        pool.shuffle(&mut rng);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_draw_pool_moves_cards() {
        let mut main = CardPool::standard();
        let public = main.draw_pool(14).unwrap();
        assert_eq!(public.len(), 14);
        assert_eq!(main.len(), 40);
    }
}
