//! Core game values: cards, pools, hands, players

pub mod card;
pub mod hand;
pub mod player;
pub mod pool;
pub mod types;

pub use card::{Card, Rank, Suit};
pub use hand::Hand;
pub use player::{Player, Seat};
pub use pool::CardPool;
pub use types::{PlayerName, RuleId};
