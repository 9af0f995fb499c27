//! Match state and the turn protocol

pub mod engine;
pub mod first_card_provider;
pub mod fixed_script_provider;
pub mod interactive_provider;
pub mod logger;
pub mod provider;
pub mod random_provider;
pub mod state;

pub use engine::{MatchEndReason, MatchResult, TurnEngine, DEFAULT_MAX_ROUNDS};
pub use first_card_provider::FirstCardProvider;
pub use fixed_script_provider::FixedScriptProvider;
pub use interactive_provider::InteractiveProvider;
pub use logger::{LogEntry, MatchLogger, OutputMode, VerbosityLevel};
pub use provider::MoveProvider;
pub use random_provider::RandomProvider;
pub use state::{MatchState, DECK_SIZE, HUMAN_OPENING_HAND, OPPONENT_OPENING_HAND, PUBLIC_POOL_SIZE};
