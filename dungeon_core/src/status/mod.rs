//! Status effects - Timed conditions resolved once per round
//!
//! Each effect counts its own remaining applications. The battle orchestrator
//! swaps an exhausted effect for Neutral before the holder's next action check,
//! which is also when Burned/Frozen give their stat back.

use crate::combat::{CombatContext, Combatant, Hit};
use crate::stat_block::{ModifierSource, Stat, StatModifier};
use crate::types::Element;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// What a status does on each application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusKind {
    Neutral,
    Poisoned { damage_per_turn: i32 },
    Burned { attack_decrease: i32 },
    Frozen { speed_decrease: i32 },
    Stunned,
}

/// A status effect attached to an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    kind: StatusKind,
    remaining_turns: u32,
    /// Whether the lingering modifier has been pushed onto the holder
    #[serde(default)]
    engaged: bool,
}

impl Default for StatusEffect {
    fn default() -> Self {
        StatusEffect::neutral()
    }
}

/// What one application of a status did
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTick {
    pub status: &'static str,
    pub hit: Option<Hit>,
    pub remaining_turns: u32,
}

impl StatusEffect {
    pub fn new(kind: StatusKind, remaining_turns: u32) -> Self {
        StatusEffect {
            kind,
            remaining_turns,
            engaged: false,
        }
    }

    pub fn neutral() -> Self {
        Self::new(StatusKind::Neutral, 0)
    }

    pub fn poisoned(turns: u32, damage_per_turn: i32) -> Self {
        Self::new(StatusKind::Poisoned { damage_per_turn }, turns)
    }

    pub fn burned(turns: u32, attack_decrease: i32) -> Self {
        Self::new(StatusKind::Burned { attack_decrease }, turns)
    }

    pub fn frozen(turns: u32, speed_decrease: i32) -> Self {
        Self::new(StatusKind::Frozen { speed_decrease }, turns)
    }

    pub fn stunned(turns: u32) -> Self {
        Self::new(StatusKind::Stunned, turns)
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            StatusKind::Neutral => "Neutral",
            StatusKind::Poisoned { .. } => "Poisoned",
            StatusKind::Burned { .. } => "Burned",
            StatusKind::Frozen { .. } => "Frozen",
            StatusKind::Stunned => "Stunned",
        }
    }

    pub fn remaining_turns(&self) -> u32 {
        self.remaining_turns
    }

    pub fn is_neutral(&self) -> bool {
        self.kind == StatusKind::Neutral
    }

    /// No applications left; the holder should return to Neutral
    pub fn is_expired(&self) -> bool {
        self.remaining_turns == 0
    }

    pub fn prevents_action(&self) -> bool {
        matches!(self.kind, StatusKind::Stunned)
    }

    /// Stat delta held while this status lasts
    pub fn modifier(&self) -> Option<StatModifier> {
        match self.kind {
            StatusKind::Burned { attack_decrease } => Some(StatModifier::new(
                ModifierSource::Status,
                Stat::Attack,
                -attack_decrease.abs(),
            )),
            StatusKind::Frozen { speed_decrease } => Some(StatModifier::new(
                ModifierSource::Status,
                Stat::Speed,
                -speed_decrease.abs(),
            )),
            _ => None,
        }
    }

    /// Apply one round of this effect to `holder`
    ///
    /// `self` must not be attached to `holder` during the call; the orchestrator
    /// detaches it first. Every application costs exactly one turn.
    pub fn apply_effect(
        &mut self,
        holder: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> StatusTick {
        let mut hit = None;

        if self.remaining_turns > 0 {
            match self.kind {
                StatusKind::Poisoned { damage_per_turn } => {
                    hit = Some(holder.damage_received(damage_per_turn, Element::Poison, ctx));
                }
                StatusKind::Burned { .. } | StatusKind::Frozen { .. } => {
                    if !self.engaged {
                        if let Some(modifier) = self.modifier() {
                            holder.stats_mut().push_modifier(modifier);
                        }
                        self.engaged = true;
                    }
                }
                StatusKind::Stunned | StatusKind::Neutral => {}
            }
            self.remaining_turns -= 1;
        }

        trace!(
            holder = holder.name(),
            status = self.name(),
            remaining = self.remaining_turns,
            "status applied"
        );

        StatusTick {
            status: self.name(),
            hit,
            remaining_turns: self.remaining_turns,
        }
    }
}

/// Resolve the start-of-turn status step for `holder`
///
/// An exhausted status is replaced with Neutral (reverting its modifier);
/// otherwise the status is applied once. Returns `None` when nothing was applied.
pub fn resolve_status(holder: &mut dyn Combatant, ctx: &mut CombatContext<'_>) -> Option<StatusTick> {
    if holder.stats().status().is_expired() {
        if !holder.stats().status().is_neutral() {
            trace!(holder = holder.name(), status = holder.stats().status().name(), "status expired");
        }
        holder.stats_mut().clear_status();
        return None;
    }

    let mut status = holder.stats_mut().take_status();
    let tick = status.apply_effect(holder, ctx);
    holder.stats_mut().restore_status(status);
    Some(tick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConstants;
    use crate::dice::LoadedDice;
    use crate::monster::Monster;

    fn goblin() -> Monster {
        Monster::new("Goblin", 50, 10, 10, Element::Neutral).unwrap()
    }

    fn with_ctx<T>(f: impl FnOnce(&mut CombatContext<'_>) -> T) -> T {
        let rules = GameConstants::default();
        let mut dice = LoadedDice::failing();
        let mut ctx = CombatContext::new(&mut dice, &rules);
        f(&mut ctx)
    }

    #[test]
    fn test_neutral_is_inert() {
        let status = StatusEffect::neutral();
        assert!(!status.prevents_action());
        assert!(status.is_expired());
        assert!(status.modifier().is_none());
        assert_eq!(status.name(), "Neutral");
    }

    #[test]
    fn test_poison_deals_damage_each_turn() {
        let mut monster = goblin();
        let mut poison = StatusEffect::poisoned(2, 5);

        with_ctx(|ctx| {
            let tick = poison.apply_effect(&mut monster, ctx);
            assert_eq!(tick.hit.map(|h| h.dealt), Some(5));
            assert_eq!(tick.remaining_turns, 1);
            poison.apply_effect(&mut monster, ctx);
        });

        assert_eq!(monster.stats().current_life(), 40);
        assert!(poison.is_expired());
        assert!(!poison.prevents_action());
    }

    #[test]
    fn test_poison_uses_poison_element() {
        // Fire beats Poison, so a fire monster takes half
        let mut monster = Monster::new("Imp", 50, 10, 10, Element::Fire).unwrap();
        let mut poison = StatusEffect::poisoned(1, 10);
        with_ctx(|ctx| poison.apply_effect(&mut monster, ctx));
        assert_eq!(monster.stats().current_life(), 45);
    }

    #[test]
    fn test_burn_pushes_modifier_once() {
        let mut monster = goblin();
        monster.set_status(StatusEffect::burned(3, 4));

        with_ctx(|ctx| {
            resolve_status(&mut monster, ctx);
            resolve_status(&mut monster, ctx);
        });

        assert_eq!(monster.stats().attack(), 6);
        assert_eq!(monster.stats().base_attack(), 10);
        assert_eq!(monster.stats().status().remaining_turns(), 1);
    }

    #[test]
    fn test_burn_reverts_on_expiry() {
        let mut monster = goblin();
        monster.set_status(StatusEffect::burned(1, 4));

        with_ctx(|ctx| {
            resolve_status(&mut monster, ctx);
            assert_eq!(monster.stats().attack(), 6);
            assert_eq!(monster.stats().status().name(), "Burned");

            assert!(resolve_status(&mut monster, ctx).is_none());
        });

        assert_eq!(monster.stats().attack(), 10);
        assert!(monster.stats().status().is_neutral());
    }

    #[test]
    fn test_frozen_reduces_speed_symmetrically() {
        let mut monster = goblin();
        monster.set_status(StatusEffect::frozen(1, 15));

        with_ctx(|ctx| {
            resolve_status(&mut monster, ctx);
            assert_eq!(monster.stats().speed(), 0);
            resolve_status(&mut monster, ctx);
        });

        assert_eq!(monster.stats().speed(), 10);
    }

    #[test]
    fn test_stun_blocks_without_damage() {
        let mut monster = goblin();
        let mut stun = StatusEffect::stunned(1);
        assert!(stun.prevents_action());

        let tick = with_ctx(|ctx| stun.apply_effect(&mut monster, ctx));
        assert!(tick.hit.is_none());
        assert_eq!(stun.remaining_turns(), 0);
        assert!(stun.prevents_action());
        assert_eq!(monster.stats().current_life(), 50);
    }

    #[test]
    fn test_stun_expires_to_neutral() {
        let mut monster = goblin();
        monster.set_status(StatusEffect::stunned(1));

        with_ctx(|ctx| {
            resolve_status(&mut monster, ctx);
            assert_eq!(monster.stats().status().remaining_turns(), 0);
            assert_eq!(monster.stats().status().name(), "Stunned");

            resolve_status(&mut monster, ctx);
        });

        assert!(monster.stats().status().is_neutral());
    }

    #[test]
    fn test_status_serializes_with_kind_tag() {
        let json = serde_json::to_string(&StatusEffect::poisoned(2, 5)).unwrap();
        assert!(json.contains("\"kind\":\"poisoned\""));
        assert!(json.contains("\"damage_per_turn\":5"));
    }
}
