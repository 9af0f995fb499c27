//! Match state: the two pools, the two players, and the match RNG

use crate::core::{Card, CardPool, Player, PlayerName, Seat};
use crate::game::MatchLogger;
use crate::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::cell::RefCell;

/// Full deck size: 52 ranked cards plus 2 jokers
pub const DECK_SIZE: usize = 54;
/// Opening hand dealt to the human seat
pub const HUMAN_OPENING_HAND: usize = 6;
/// Opening hand dealt to the opponent seat (acts second, gets one more)
pub const OPPONENT_OPENING_HAND: usize = 7;
/// Cards moved face-down into the public pool at setup
pub const PUBLIC_POOL_SIZE: usize = 14;

/// Complete state of one match
///
/// Pools and hands are created fresh per match; nothing persists across
/// matches. Every card lives in exactly one of {main pool, public pool,
/// human hand, opponent hand, discard} at any time.
#[derive(Debug)]
pub struct MatchState {
    /// Primary draw source; replenishes hands after a play
    pub main_pool: CardPool,

    /// Shared face-down pool; drawn from when a player starts a turn with
    /// no cards. The match ends the instant it empties.
    pub public_pool: CardPool,

    /// Both players; index 0 is the human seat, index 1 the opponent
    pub players: [Player; 2],

    /// Played cards, most recent last. The turn protocol never reads this
    /// back; it exists so played cards stay accounted for and so the
    /// presentation layer can show the last play.
    pub discard: Vec<Card>,

    /// Completed-round counter, starting at 0 before the first round
    pub round: u32,

    /// Match RNG (serializable seed point for deterministic replays).
    /// RefCell so shuffles can run while the state is otherwise borrowed.
    pub rng: RefCell<ChaCha12Rng>,

    /// Centralized logger for match narration
    pub logger: MatchLogger,
}

impl MatchState {
    /// Create a match with empty pools and hands; call `setup` to deal
    pub fn new(human_name: impl Into<PlayerName>, opponent_name: impl Into<PlayerName>) -> Self {
        MatchState {
            main_pool: CardPool::new(),
            public_pool: CardPool::new(),
            players: [Player::new(human_name), Player::new(opponent_name)],
            discard: Vec::new(),
            round: 0,
            rng: RefCell::new(ChaCha12Rng::seed_from_u64(0)),
            logger: MatchLogger::new(),
        }
    }

    /// Set the RNG seed for deterministic matches
    ///
    /// Call before `setup` so the shuffle is covered by the seed.
    pub fn seed_rng(&mut self, seed: u64) {
        *self.rng.borrow_mut() = ChaCha12Rng::seed_from_u64(seed);
    }

    /// Build, shuffle and deal the standard pool
    ///
    /// Deals 6 cards to the human and 7 to the opponent (the asymmetry is a
    /// fixed rule), then moves 14 cards into the public pool, leaving 27 in
    /// the main pool.
    pub fn setup(&mut self) -> Result<()> {
        self.main_pool = CardPool::standard();
        self.main_pool.shuffle(&mut *self.rng.borrow_mut());

        for _ in 0..HUMAN_OPENING_HAND {
            let card = self.main_pool.draw()?;
            self.players[0].hand.add_card(card);
        }
        for _ in 0..OPPONENT_OPENING_HAND {
            let card = self.main_pool.draw()?;
            self.players[1].hand.add_card(card);
        }
        self.public_pool = self.main_pool.draw_pool(PUBLIC_POOL_SIZE)?;

        debug_assert_eq!(self.total_cards(), DECK_SIZE);
        Ok(())
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[Self::index(seat)]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[Self::index(seat)]
    }

    /// Cards across every collection, including played ones
    pub fn total_cards(&self) -> usize {
        self.main_pool.len()
            + self.public_pool.len()
            + self.players[0].hand.len()
            + self.players[1].hand.len()
            + self.discard.len()
    }

    /// Most recently played card, if any
    pub fn last_played(&self) -> Option<&Card> {
        self.discard.last()
    }

    fn index(seat: Seat) -> usize {
        match seat {
            Seat::Human => 0,
            Seat::Opponent => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_counts() {
        let mut state = MatchState::new("Human", "Computer");
        state.seed_rng(42);
        state.setup().unwrap();

        assert_eq!(state.player(Seat::Human).hand.len(), HUMAN_OPENING_HAND);
        assert_eq!(
            state.player(Seat::Opponent).hand.len(),
            OPPONENT_OPENING_HAND
        );
        assert_eq!(state.public_pool.len(), PUBLIC_POOL_SIZE);
        assert_eq!(state.main_pool.len(), 27);
        assert_eq!(state.total_cards(), DECK_SIZE);
    }

    #[test]
    fn test_seeded_setup_is_deterministic() {
        let mut a = MatchState::new("Human", "Computer");
        a.seed_rng(7);
        a.setup().unwrap();

        let mut b = MatchState::new("Human", "Computer");
        b.seed_rng(7);
        b.setup().unwrap();

        assert_eq!(
            a.player(Seat::Human).hand.cards(),
            b.player(Seat::Human).hand.cards()
        );
        assert_eq!(
            a.player(Seat::Opponent).hand.cards(),
            b.player(Seat::Opponent).hand.cards()
        );
    }
}
