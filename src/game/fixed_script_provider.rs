//! Fixed script provider for deterministic testing
//!
//! Follows a predetermined sequence of hand indices. Reveal selections
//! consume one script entry per revealed card. Once the script is
//! exhausted, the provider defaults to the first valid choice.

use crate::core::Hand;
use crate::game::provider::MoveProvider;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A provider that follows a fixed script of hand indices
///
/// The script is a flat sequence of indices consumed left to right: a play
/// selection takes one entry, a reveal of `count` cards takes `count`
/// entries. When the script runs out, reveals fall back to the front of the
/// hand and plays to index 0 - the same defaults as `FirstCardProvider`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedScriptProvider {
    /// The predetermined sequence of choice indices
    script: Vec<usize>,
    /// Current position in the script
    pub current_index: usize,
}

impl FixedScriptProvider {
    pub fn new(script: Vec<usize>) -> Self {
        FixedScriptProvider {
            script,
            current_index: 0,
        }
    }

    /// Parse a script from space- or comma-separated indices, e.g. "0 2 1"
    pub fn parse(input: &str) -> std::result::Result<Self, String> {
        let mut script = Vec::new();
        for token in input.split([' ', ',']).filter(|t| !t.is_empty()) {
            let index = token
                .parse::<usize>()
                .map_err(|_| format!("invalid script index '{}'", token))?;
            script.push(index);
        }
        Ok(FixedScriptProvider::new(script))
    }

    fn next_choice(&mut self) -> Option<usize> {
        if self.current_index < self.script.len() {
            let choice = self.script[self.current_index];
            self.current_index += 1;
            Some(choice)
        } else {
            None
        }
    }
}

impl MoveProvider for FixedScriptProvider {
    fn select_reveal(&mut self, _hand: &Hand, count: usize) -> Result<Vec<usize>> {
        let mut indices = Vec::with_capacity(count);
        for fallback in 0..count {
            indices.push(self.next_choice().unwrap_or(fallback));
        }
        Ok(indices)
    }

    fn select_play(&mut self, _hand: &Hand) -> Result<usize> {
        Ok(self.next_choice().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Rank, Suit};

    fn sample_hand() -> Hand {
        let mut hand = Hand::new();
        for rank in [Rank::Ace, Rank::Five, Rank::Nine, Rank::King] {
            hand.add_card(Card::ranked(rank, Suit::Hearts));
        }
        hand
    }

    #[test]
    fn test_script_consumed_in_order() {
        let hand = sample_hand();
        let mut provider = FixedScriptProvider::new(vec![3, 1, 2]);

        let reveal = provider.select_reveal(&hand, 2).unwrap();
        assert_eq!(reveal, vec![3, 1]);
        assert_eq!(provider.select_play(&hand).unwrap(), 2);
    }

    #[test]
    fn test_exhausted_script_defaults_to_front() {
        let hand = sample_hand();
        let mut provider = FixedScriptProvider::new(vec![2]);

        assert_eq!(provider.select_play(&hand).unwrap(), 2);
        // Script exhausted: reveal falls back to the front of the hand
        assert_eq!(provider.select_reveal(&hand, 2).unwrap(), vec![0, 1]);
        assert_eq!(provider.select_play(&hand).unwrap(), 0);
    }

    #[test]
    fn test_parse() {
        let provider = FixedScriptProvider::parse("0, 2 1").unwrap();
        assert_eq!(provider.script, vec![0, 2, 1]);
        assert!(FixedScriptProvider::parse("0 x 1").is_err());
    }
}
