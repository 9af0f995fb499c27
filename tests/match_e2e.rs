//! End-to-end match tests
//!
//! Runs whole matches through the public API and checks the protocol-level
//! properties: card conservation, termination, settlement, determinism, and
//! effect-rule visibility.

use pool_duel::core::{Card, CardPool, Rank, Seat, Suit};
use pool_duel::effects::{rules::clubs_extra_draw, standard_rules, EffectRegistry};
use pool_duel::game::{
    FirstCardProvider, FixedScriptProvider, MatchEndReason, MatchState, OutputMode, RandomProvider,
    TurnEngine, VerbosityLevel, DECK_SIZE, HUMAN_OPENING_HAND, OPPONENT_OPENING_HAND,
    PUBLIC_POOL_SIZE,
};

fn fresh_state(seed: u64) -> MatchState {
    let mut state = MatchState::new("Human", "Computer");
    state.logger.set_verbosity(VerbosityLevel::Silent);
    state.seed_rng(seed);
    state.setup().unwrap();
    state
}

#[test]
fn setup_deals_the_documented_counts() {
    let state = fresh_state(11);
    assert_eq!(state.player(Seat::Human).hand.len(), HUMAN_OPENING_HAND);
    assert_eq!(
        state.player(Seat::Opponent).hand.len(),
        OPPONENT_OPENING_HAND
    );
    assert_eq!(state.public_pool.len(), PUBLIC_POOL_SIZE);
    assert_eq!(state.main_pool.len(), 27);
}

#[test]
fn cards_are_conserved_across_every_round() {
    let registry = standard_rules().unwrap();
    let mut state = fresh_state(42);
    let mut human = FirstCardProvider::new();
    let mut opponent = FirstCardProvider::new();

    // Re-borrow the state each round so conservation is observable between
    // rounds, not just at the end.
    loop {
        let done = {
            let mut engine = TurnEngine::new(&mut state, &registry);
            engine
                .run_round_once(&mut human, &mut opponent)
                .unwrap()
                .is_some()
        };
        assert_eq!(state.total_cards(), DECK_SIZE);
        if done {
            break;
        }
    }
}

#[test]
fn full_match_terminates_and_accounts_for_all_cards() {
    let registry = standard_rules().unwrap();
    let mut state = fresh_state(42);
    {
        let mut engine = TurnEngine::new(&mut state, &registry);
        let mut human = FirstCardProvider::new();
        let mut opponent = FirstCardProvider::new();
        let result = engine.run(&mut human, &mut opponent).unwrap();

        assert_eq!(result.end_reason, MatchEndReason::PublicPoolExhausted);
        assert!(result.rounds_played > 0);
        assert!(result.rounds_played < 500);
    }

    assert!(state.public_pool.is_empty());
    assert_eq!(state.total_cards(), DECK_SIZE);
}

#[test]
fn played_cards_are_never_drawn_again() {
    let registry = standard_rules().unwrap();
    let mut state = fresh_state(99);
    {
        let mut engine = TurnEngine::new(&mut state, &registry);
        let mut human = RandomProvider::with_seed(1);
        let mut opponent = RandomProvider::with_seed(2);
        engine.run(&mut human, &mut opponent).unwrap();
    }

    // Every card in the standard pool is unique by (rank, suit), so a
    // discarded card reappearing in a hand would be a duplication bug.
    for played in &state.discard {
        for seat in [Seat::Human, Seat::Opponent] {
            assert!(
                !state
                    .player(seat)
                    .hand
                    .iter()
                    .any(|c| c.rank() == played.rank() && c.suit() == played.suit()),
                "played card {} resurfaced in a hand",
                played
            );
        }
    }
}

#[test]
fn seeded_matches_are_deterministic() {
    let registry = standard_rules().unwrap();

    let run = |seed: u64| {
        let mut state = fresh_state(seed);
        let mut engine = TurnEngine::new(&mut state, &registry);
        let mut human = RandomProvider::with_seed(seed);
        let mut opponent = RandomProvider::with_seed(seed.wrapping_add(1));
        engine.run(&mut human, &mut opponent).unwrap()
    };

    let first = run(7);
    let second = run(7);
    assert_eq!(first, second);
}

#[test]
fn scripted_play_fires_effect_rules_visibly() {
    let registry = standard_rules().unwrap();

    let mut state = MatchState::new("Human", "Computer");
    state.logger.set_verbosity(VerbosityLevel::Normal);
    state.logger.set_output_mode(OutputMode::Memory);

    // Two-card human hand: reveal one, then play the heart at index 0.
    state
        .player_mut(Seat::Human)
        .hand
        .add_card(Card::ranked(Rank::Seven, Suit::Hearts));
    state
        .player_mut(Seat::Human)
        .hand
        .add_card(Card::ranked(Rank::Two, Suit::Spades));
    // One public card so the opponent's empty-hand turn drains it and the
    // match settles after a single round.
    state.public_pool = CardPool::from_cards(vec![Card::ranked(Rank::Three, Suit::Diamonds)]);

    let mut engine = TurnEngine::new(&mut state, &registry);
    let mut human = FixedScriptProvider::new(vec![0, 0]);
    let mut opponent = FixedScriptProvider::new(vec![]);
    let result = engine.run(&mut human, &mut opponent).unwrap();

    assert_eq!(result.rounds_played, 1);

    let entries = state.logger.entries();
    let effect_messages: Vec<&str> = entries
        .iter()
        .filter(|e| e.category.as_deref() == Some("effect"))
        .map(|e| e.message.as_str())
        .collect();
    // The seven of hearts hits both stock rules, in registration order
    assert_eq!(effect_messages.len(), 2);
    assert!(effect_messages[0].contains("heart"));
    assert!(effect_messages[1].contains("seven"));
}

#[test]
fn mutating_rule_preserves_the_partition_invariant() {
    let mut registry = EffectRegistry::new();
    registry.register(clubs_extra_draw()).unwrap();

    let mut state = fresh_state(5);
    {
        let mut engine = TurnEngine::new(&mut state, &registry);
        let mut human = FirstCardProvider::new();
        let mut opponent = FirstCardProvider::new();
        engine.run(&mut human, &mut opponent).unwrap();
    }
    assert_eq!(state.total_cards(), DECK_SIZE);
}

#[test]
fn exhausted_main_pool_stops_replenishment() {
    let registry = EffectRegistry::new();

    let mut state = MatchState::new("Human", "Computer");
    state.logger.set_verbosity(VerbosityLevel::Silent);
    state
        .player_mut(Seat::Human)
        .hand
        .add_card(Card::ranked(Rank::Jack, Suit::Clubs));
    state
        .player_mut(Seat::Opponent)
        .hand
        .add_card(Card::ranked(Rank::Queen, Suit::Clubs));
    state.public_pool =
        CardPool::from_cards(vec![Card::joker(Rank::JokerOne), Card::joker(Rank::JokerTwo)]);

    let mut engine = TurnEngine::new(&mut state, &registry);
    let mut human = FirstCardProvider::new();
    let mut opponent = FirstCardProvider::new();
    let result = engine.run(&mut human, &mut opponent).unwrap();

    // Round 1: both play their only card with no replenish (main pool is
    // empty). Round 2: both pick up a joker from the public pool, which
    // empties it and settles the match as a 0-0 tie.
    assert_eq!(result.rounds_played, 2);
    assert_eq!(result.winner, None);
    assert_eq!(result.human_score, 0);
    assert_eq!(result.opponent_score, 0);
}
