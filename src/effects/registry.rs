//! Effect rule registry
//!
//! Rules are registered once before a match and are read-only during play.
//! Within a trigger bucket, rules run in registration order; later rules
//! observe the effects of earlier rules in the same invocation. A failing
//! rule is reported and skipped - third-party card content must not be able
//! to crash the match.

use crate::core::{Card, CardPool, Player, RuleId};
use crate::game::MatchLogger;
use crate::{GameError, Result};
use rustc_hash::{FxHashMap, FxHashSet};

/// Points in the turn protocol at which rules can fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// A card was played from a hand
    OnPlay,
    /// A card was drawn into a hand
    OnDraw,
}

/// Mutable match surroundings handed to a firing rule
///
/// Rules may move cards through the pools and touch the opposing player,
/// but the pool/hand partition invariant must still hold afterwards.
pub struct EffectContext<'a> {
    pub main_pool: &'a mut CardPool,
    pub public_pool: &'a mut CardPool,
    pub opponent: &'a mut Player,
    /// Current round number, starting at 1
    pub round: u32,
    pub logger: &'a MatchLogger,
}

type RuleCondition = Box<dyn Fn(&Card, &Player, &EffectContext) -> Result<bool>>;
type RuleAction = Box<dyn Fn(&Card, &mut Player, &mut EffectContext) -> Result<()>>;

/// A named rule: trigger point, condition, action
pub struct EffectRule {
    id: RuleId,
    trigger: Trigger,
    condition: RuleCondition,
    action: RuleAction,
    note: Option<String>,
}

impl EffectRule {
    pub fn new(
        id: impl Into<RuleId>,
        trigger: Trigger,
        condition: impl Fn(&Card, &Player, &EffectContext) -> Result<bool> + 'static,
        action: impl Fn(&Card, &mut Player, &mut EffectContext) -> Result<()> + 'static,
    ) -> Self {
        EffectRule {
            id: id.into(),
            trigger,
            condition: Box::new(condition),
            action: Box::new(action),
            note: None,
        }
    }

    /// Attach a human-readable note for people reading rule dumps
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn id(&self) -> &RuleId {
        &self.id
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl std::fmt::Debug for EffectRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRule")
            .field("id", &self.id)
            .field("trigger", &self.trigger)
            .field("note", &self.note)
            .finish_non_exhaustive()
    }
}

/// Trigger-indexed table of effect rules
///
/// Built once at process start and passed to the turn engine by reference;
/// matches read it, never mutate it.
#[derive(Debug, Default)]
pub struct EffectRegistry {
    buckets: FxHashMap<Trigger, Vec<EffectRule>>,
    ids: FxHashSet<RuleId>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        EffectRegistry {
            buckets: FxHashMap::default(),
            ids: FxHashSet::default(),
        }
    }

    /// Register a rule in its trigger bucket
    ///
    /// Re-registering an id already present fails, so a rule can never
    /// silently double-fire.
    pub fn register(&mut self, rule: EffectRule) -> Result<()> {
        if !self.ids.insert(rule.id.clone()) {
            return Err(GameError::DuplicateRule(rule.id.to_string()));
        }
        self.buckets.entry(rule.trigger).or_default().push(rule);
        Ok(())
    }

    /// Number of rules registered for a trigger
    pub fn rule_count(&self, trigger: Trigger) -> usize {
        self.buckets.get(&trigger).map_or(0, |b| b.len())
    }

    /// Run the bucket for `trigger` against a card event
    ///
    /// Rules run in registration order. An `Err` from a condition or an
    /// action is reported through the logger and iteration continues with
    /// the next rule; effects already applied are not rolled back.
    pub fn run(
        &self,
        trigger: Trigger,
        card: &Card,
        player: &mut Player,
        ctx: &mut EffectContext,
    ) {
        let Some(bucket) = self.buckets.get(&trigger) else {
            return;
        };
        for rule in bucket {
            match (rule.condition)(card, player, ctx) {
                Ok(true) => {
                    if let Err(err) = (rule.action)(card, player, ctx) {
                        ctx.logger
                            .effect(&format!("[effect error] {}: {}", rule.id, err));
                    }
                }
                Ok(false) => {}
                Err(err) => {
                    ctx.logger
                        .effect(&format!("[effect error] {}: {}", rule.id, err));
                }
            }
        }
    }
}
