//! Trigger-indexed effect rules
//!
//! Card-specific behavior is registered as named rules (condition + action)
//! before a match starts. The turn engine fires the bucket for a trigger at
//! the right point in the protocol; it never hard-codes card effects.

pub mod registry;
pub mod rules;

pub use registry::{EffectContext, EffectRegistry, EffectRule, Trigger};
pub use rules::standard_rules;
