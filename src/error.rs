//! Error types for Pool Duel

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Draw attempted on an empty pool")]
    EmptyPool,

    #[error("Hand index {index} out of range (hand has {len} cards)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Effect rule already registered: {0}")]
    DuplicateRule(String),

    #[error("Safety limit exceeded: match still running after {rounds} rounds")]
    SafetyLimit { rounds: u32 },

    #[error("Invalid game action: {0}")]
    InvalidAction(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
