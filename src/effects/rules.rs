//! Stock rule set
//!
//! The rules every match registers before play. Adding or removing a stock
//! rule happens here, never in the turn engine.

use crate::core::Suit;
use crate::effects::{EffectRegistry, EffectRule, Trigger};
use crate::Result;

/// Build the registry with the stock rules. Called once per process, before
/// any match is constructed.
pub fn standard_rules() -> Result<EffectRegistry> {
    let mut registry = EffectRegistry::new();

    registry.register(
        EffectRule::new(
            "onplay.hearts.echo",
            Trigger::OnPlay,
            |card, _player, _ctx| Ok(card.suit() == Some(Suit::Hearts)),
            |card, player, ctx| {
                ctx.logger
                    .effect(&format!("[effect] {} played a heart: {}", player.name, card));
                Ok(())
            },
        )
        .with_note("fires when the played card is a heart"),
    )?;

    registry.register(
        EffectRule::new(
            "onplay.value7.echo",
            Trigger::OnPlay,
            |card, _player, _ctx| Ok(card.value() == 7),
            |card, player, ctx| {
                ctx.logger
                    .effect(&format!("[effect] {} played a seven: {}", player.name, card));
                Ok(())
            },
        )
        .with_note("fires when the played card has value 7"),
    )?;

    Ok(registry)
}

/// Rule that grants an extra draw from the main pool when a club is played
///
/// Not part of the stock set; exercises card movement through
/// `EffectContext` and is registered explicitly by callers that want it.
pub fn clubs_extra_draw() -> EffectRule {
    EffectRule::new(
        "onplay.clubs.extra-draw",
        Trigger::OnPlay,
        |card, _player, _ctx| Ok(card.suit() == Some(Suit::Clubs)),
        |_card, player, ctx| {
            if ctx.main_pool.is_empty() {
                return Ok(());
            }
            let drawn = ctx.main_pool.draw()?;
            player.hand.add_card(drawn);
            ctx.logger.effect(&format!(
                "[effect] {} played a club and draws an extra card",
                player.name
            ));
            Ok(())
        },
    )
    .with_note("extra draw from the main pool when a club is played")
}
