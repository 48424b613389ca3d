//! Combat interface - What every hero and monster can do in a fight

mod resolution;
mod result;

pub use resolution::{elemental_damage, resolve_blocked, resolve_hit, resolve_reduced};
pub use result::{Hit, Mitigation};

use crate::config::GameConstants;
use crate::dice::Dice;
use crate::error::CombatError;
use crate::stat_block::StatBlock;
use crate::status::StatusEffect;
use crate::types::Element;

/// Everything a strike needs besides attacker and target
pub struct CombatContext<'a> {
    pub dice: &'a mut dyn Dice,
    pub rules: &'a GameConstants,
}

impl<'a> CombatContext<'a> {
    pub fn new(dice: &'a mut dyn Dice, rules: &'a GameConstants) -> Self {
        CombatContext { dice, rules }
    }
}

/// A living participant of a battle
pub trait Combatant {
    fn stats(&self) -> &StatBlock;

    fn stats_mut(&mut self) -> &mut StatBlock;

    /// Receive `raw` damage of `element`
    ///
    /// The default applies `raw * multiplier` with no mitigation.
    fn damage_received(
        &mut self,
        raw: i32,
        element: Element,
        _ctx: &mut CombatContext<'_>,
    ) -> Hit {
        resolve_hit(self.stats_mut(), raw, element)
    }

    /// Attack `target`, returning a log line
    fn strike(
        &mut self,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError>;

    fn name(&self) -> &str {
        self.stats().name()
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    fn set_status(&mut self, status: StatusEffect) {
        self.stats_mut().set_status(status);
    }
}
