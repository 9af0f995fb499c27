//! Turn engine
//!
//! Drives one full match: setup, alternating reveal -> play -> replenish
//! turns, the termination check, and settlement. Card-specific behavior
//! stays out of here; the engine only fires the effect registry at the
//! protocol's trigger points.

use crate::core::Seat;
use crate::effects::{EffectContext, EffectRegistry, Trigger};
use crate::game::provider::MoveProvider;
use crate::game::state::MatchState;
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default round cap guarding against a match that never drains the public
/// pool through normal means
pub const DEFAULT_MAX_ROUNDS: u32 = 500;

/// Reason a match produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEndReason {
    /// The public pool was drawn empty - the one authoritative end condition
    PublicPoolExhausted,
    /// A bounded `run_rounds` call finished without the match ending
    Stopped,
}

/// Result of a settled (or stopped) match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winning seat; `None` on a tie or a stopped match
    pub winner: Option<Seat>,
    /// Human hand value at settlement
    pub human_score: u32,
    /// Opponent hand value at settlement
    pub opponent_score: u32,
    /// Rounds played (a round is a human turn plus an opponent turn)
    pub rounds_played: u32,
    /// Why the match ended
    pub end_reason: MatchEndReason,
}

/// Match driver
///
/// Borrows the match state so the caller keeps it for inspection after the
/// match ends - including after a `SafetyLimit` failure.
pub struct TurnEngine<'a> {
    state: &'a mut MatchState,
    registry: &'a EffectRegistry,
    max_rounds: u32,
}

impl<'a> TurnEngine<'a> {
    pub fn new(state: &'a mut MatchState, registry: &'a EffectRegistry) -> Self {
        TurnEngine {
            state,
            registry,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Override the defensive round cap
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Run the match to settlement
    ///
    /// Alternates human-then-opponent turns, checking termination after
    /// every single turn - the match can settle mid-round without granting
    /// the other player a final turn.
    pub fn run(
        &mut self,
        human: &mut dyn MoveProvider,
        opponent: &mut dyn MoveProvider,
    ) -> Result<MatchResult> {
        loop {
            if let Some(result) = self.run_round_once(human, opponent)? {
                human.on_match_end(&result);
                opponent.on_match_end(&result);
                return Ok(result);
            }
        }
    }

    /// Run at most `rounds_to_run` rounds, stopping early if the match ends
    ///
    /// Returns a `Stopped` result if the bound is reached first.
    pub fn run_rounds(
        &mut self,
        human: &mut dyn MoveProvider,
        opponent: &mut dyn MoveProvider,
        rounds_to_run: u32,
    ) -> Result<MatchResult> {
        for _ in 0..rounds_to_run {
            if let Some(result) = self.run_round_once(human, opponent)? {
                return Ok(result);
            }
        }
        Ok(MatchResult {
            winner: None,
            human_score: self.state.player(Seat::Human).hand.sum_value(),
            opponent_score: self.state.player(Seat::Opponent).hand.sum_value(),
            rounds_played: self.state.round,
            end_reason: MatchEndReason::Stopped,
        })
    }

    /// Run a single round (human turn, then opponent turn) and check for
    /// termination after each turn
    ///
    /// Returns `Ok(Some(result))` once the public pool is exhausted.
    pub fn run_round_once(
        &mut self,
        human: &mut dyn MoveProvider,
        opponent: &mut dyn MoveProvider,
    ) -> Result<Option<MatchResult>> {
        if self.state.round >= self.max_rounds {
            return Err(GameError::SafetyLimit {
                rounds: self.max_rounds,
            });
        }
        let expected_total = self.state.total_cards();

        self.state.round += 1;
        self.state
            .logger
            .normal(&format!("===== Round {} =====", self.state.round));

        self.take_turn(Seat::Human, human)?;
        debug_assert_eq!(self.state.total_cards(), expected_total);
        if self.state.public_pool.is_empty() {
            return Ok(Some(self.settle()));
        }

        self.take_turn(Seat::Opponent, opponent)?;
        debug_assert_eq!(self.state.total_cards(), expected_total);
        if self.state.public_pool.is_empty() {
            return Ok(Some(self.settle()));
        }

        self.state.logger.verbose(&format!(
            "--- status: human {} cards, opponent {} cards, public pool {} ---",
            self.state.player(Seat::Human).hand.len(),
            self.state.player(Seat::Opponent).hand.len(),
            self.state.public_pool.len()
        ));
        Ok(None)
    }

    /// Resolve one player's turn
    ///
    /// Empty hand: pick up one card from the public pool (if any) and end
    /// the turn. Otherwise: reveal half the hand (rounded down), play one
    /// card, fire `OnPlay` rules, then replenish from the main pool.
    pub fn take_turn(&mut self, seat: Seat, provider: &mut dyn MoveProvider) -> Result<()> {
        let registry = self.registry;
        let MatchState {
            main_pool,
            public_pool,
            players,
            discard,
            round,
            logger,
            ..
        } = &mut *self.state;
        let [human, opponent] = players;
        let (active, other) = match seat {
            Seat::Human => (human, opponent),
            Seat::Opponent => (opponent, human),
        };

        logger.normal(&format!("---- {}'s turn ----", active.name));

        // Empty hand: the turn is just a public-pool pickup
        if active.hand.is_empty() {
            if public_pool.is_empty() {
                logger.normal(&format!(
                    "{} has no cards and the public pool is empty",
                    active.name
                ));
            } else {
                let card = public_pool.draw()?;
                logger.normal(&format!(
                    "{} has no cards to play and picks up from the public pool ({} left)",
                    active.name,
                    public_pool.len()
                ));
                active.hand.add_card(card.clone());
                let mut ctx = EffectContext {
                    main_pool,
                    public_pool,
                    opponent: other,
                    round: *round,
                    logger,
                };
                registry.run(Trigger::OnDraw, &card, active, &mut ctx);
            }
            return Ok(());
        }

        // Reveal phase: half the hand, rounded down, observational only.
        // A one-card hand reveals nothing.
        let hand_len = active.hand.len();
        let reveal_count = hand_len / 2;
        if reveal_count > 0 {
            let indices = provider.select_reveal(&active.hand, reveal_count)?;
            validate_reveal(&indices, reveal_count, hand_len)?;
            let shown: Vec<String> = indices
                .iter()
                .filter_map(|&i| active.hand.get(i))
                .map(|c| c.to_string())
                .collect();
            logger.normal(&format!(
                "{} reveals: {} ({} cards)",
                active.name,
                shown.join(", "),
                reveal_count
            ));
        } else {
            logger.verbose(&format!("{} reveals nothing (single card)", active.name));
        }

        // Play phase: one validated index, removed from the hand
        let play_index = provider.select_play(&active.hand)?;
        if play_index >= active.hand.len() {
            return Err(GameError::InvalidSelection(format!(
                "play index {} out of range (hand has {} cards)",
                play_index,
                active.hand.len()
            )));
        }
        let played = active.hand.remove_at(play_index)?;
        logger.normal(&format!("{} plays {}", active.name, played));

        {
            let mut ctx = EffectContext {
                main_pool,
                public_pool,
                opponent: other,
                round: *round,
                logger,
            };
            registry.run(Trigger::OnPlay, &played, active, &mut ctx);
        }
        discard.push(played);

        // Replenish from the main pool; once it runs dry, hands shrink
        if main_pool.is_empty() {
            logger.normal("Main pool is empty; no replenish.");
        } else {
            let card = main_pool.draw()?;
            active.hand.add_card(card.clone());
            logger.normal(&format!(
                "{} replenishes from the main pool ({} left)",
                active.name,
                main_pool.len()
            ));
            let mut ctx = EffectContext {
                main_pool,
                public_pool,
                opponent: other,
                round: *round,
                logger,
            };
            registry.run(Trigger::OnDraw, &card, active, &mut ctx);
        }

        logger.verbose(&format!(
            "{} ends the turn with {} cards",
            active.name,
            active.hand.len()
        ));
        Ok(())
    }

    /// Score both hands and decide the outcome
    ///
    /// Strictly higher summed value wins; equal values tie.
    pub fn settle(&self) -> MatchResult {
        let human = self.state.player(Seat::Human);
        let opponent = self.state.player(Seat::Opponent);
        let human_score = human.hand.sum_value();
        let opponent_score = opponent.hand.sum_value();

        let logger = &self.state.logger;
        logger.minimal("===== Settlement (public pool exhausted) =====");
        logger.minimal(&format!("{} holds: {}", human.name, human.hand));
        logger.minimal(&format!("{} holds: {}", opponent.name, opponent.hand));
        logger.minimal(&format!("{} scores {}", human.name, human_score));
        logger.minimal(&format!("{} scores {}", opponent.name, opponent_score));

        let winner = match human_score.cmp(&opponent_score) {
            std::cmp::Ordering::Greater => {
                logger.minimal(&format!("Result: {} wins!", human.name));
                Some(Seat::Human)
            }
            std::cmp::Ordering::Less => {
                logger.minimal(&format!("Result: {} wins!", opponent.name));
                Some(Seat::Opponent)
            }
            std::cmp::Ordering::Equal => {
                logger.minimal("Result: tie!");
                None
            }
        };

        MatchResult {
            winner,
            human_score,
            opponent_score,
            rounds_played: self.state.round,
            end_reason: MatchEndReason::PublicPoolExhausted,
        }
    }
}

/// Check a reveal selection: exact size, in range, no duplicates
fn validate_reveal(indices: &[usize], need: usize, hand_len: usize) -> Result<()> {
    if indices.len() != need {
        return Err(GameError::InvalidSelection(format!(
            "reveal needs exactly {} indices, got {}",
            need,
            indices.len()
        )));
    }
    let mut seen: SmallVec<[usize; 8]> = SmallVec::new();
    for &index in indices {
        if index >= hand_len {
            return Err(GameError::InvalidSelection(format!(
                "reveal index {} out of range (hand has {} cards)",
                index, hand_len
            )));
        }
        if seen.contains(&index) {
            return Err(GameError::InvalidSelection(format!(
                "duplicate reveal index {}",
                index
            )));
        }
        seen.push(index);
    }
    Ok(())
}
