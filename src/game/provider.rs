//! Move provider trait
//!
//! The seam between the turn engine and whoever picks the moves - a human
//! at a terminal, a scripted strategy, or a bot. The engine asks for a
//! selection, validates it, and mutates state itself; providers only ever
//! see a read-only view of the hand.

use crate::core::Hand;
use crate::game::MatchResult;
use crate::Result;

/// Decision interface consumed by the turn engine, one per player
///
/// Both selection methods may fail with `InvalidSelection`; the engine
/// rejects bad selections without mutating state, and retry (if any) is the
/// calling boundary's job. An interactive provider loops on bad input at
/// the prompt; a scripted provider that returns garbage fails the match.
pub trait MoveProvider {
    /// Choose exactly `count` distinct hand indices to reveal
    ///
    /// Reveal is observational only; the selected cards stay in the hand.
    fn select_reveal(&mut self, hand: &Hand, count: usize) -> Result<Vec<usize>>;

    /// Choose the hand index of the card to play
    fn select_play(&mut self, hand: &Hand) -> Result<usize>;

    /// Called once when the match settles (for cleanup/logging)
    fn on_match_end(&mut self, _result: &MatchResult) {}
}
