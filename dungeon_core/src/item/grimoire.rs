//! Grimoire - Spellbook that spends mana instead of ammunition

use super::ItemInfo;
use crate::combat::{CombatContext, Combatant, Hit};
use crate::error::{CombatError, Resource};
use crate::stat_block::StatBlock;
use crate::types::Element;

pub const DEFAULT_GRIMOIRE_WEIGHT: f64 = 2.0;

/// A mage's spellbook; its element decides the element of every cast
#[derive(Debug, Clone, PartialEq)]
pub struct Grimoire {
    info: ItemInfo,
    element: Element,
    magic_power: u32,
    mana_cost: u32,
}

impl Grimoire {
    pub fn new(
        name: &str,
        element: Element,
        magic_power: u32,
        mana_cost: u32,
    ) -> Result<Self, CombatError> {
        let mut info = ItemInfo::new(name, DEFAULT_GRIMOIRE_WEIGHT)?;
        info.set_description(format!(
            "An ancient grimoire whose runes radiate {}.",
            element
        ));
        Ok(Grimoire {
            info,
            element,
            magic_power,
            mana_cost,
        })
    }

    pub fn with_weight(mut self, weight: f64) -> Result<Self, CombatError> {
        self.info.set_weight(weight)?;
        Ok(self)
    }

    pub fn info(&self) -> &ItemInfo {
        &self.info
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn magic_power(&self) -> u32 {
        self.magic_power
    }

    pub fn mana_cost(&self) -> u32 {
        self.mana_cost
    }

    /// magic_power + caster attack
    pub fn spell_damage(&self, caster: &StatBlock) -> i32 {
        caster.attack().saturating_add(self.magic_power.min(i32::MAX as u32) as i32)
    }

    pub fn check_mana(&self, mana: u32) -> Result<(), CombatError> {
        if mana < self.mana_cost {
            return Err(CombatError::InsufficientResource {
                resource: Resource::Mana,
                required: self.mana_cost,
                available: mana,
            });
        }
        Ok(())
    }

    /// Debit mana and hit `target` with the grimoire's element
    ///
    /// Not enough mana leaves both `mana` and the target untouched.
    pub fn cast_spell(
        &self,
        caster: &StatBlock,
        mana: &mut u32,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<Hit, CombatError> {
        self.check_mana(*mana)?;
        *mana -= self.mana_cost;
        let damage = self.spell_damage(caster);
        Ok(target.damage_received(damage, self.element, ctx))
    }
}
