//! Pool Duel - a two-player shared-pool card game engine
//!
//! Implements the turn protocol (reveal -> play -> replenish), the shared
//! main/public draw pools, and a pluggable effect-trigger system that lets
//! card-specific rules fire without being hard-coded into the turn loop.

pub mod core;
pub mod effects;
pub mod error;
pub mod game;

pub use error::{GameError, Result};
