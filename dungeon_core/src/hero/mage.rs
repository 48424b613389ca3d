//! Mage - Spellcaster archetype that spends mana

use super::{attack_line, points_delta, ActionEntry, ActionMap, Archetype, HeroAction, HeroCore};
use crate::combat::{CombatContext, Combatant};
use crate::config::GameConstants;
use crate::error::{CombatError, Resource};
use crate::item::{AttackKind, Inventory, Item};
use crate::stat_block::StatBlock;
use crate::types::Element;

/// Mana pool of a freshly created mage
pub const DEFAULT_MANA: u32 = 100;

#[derive(Debug, Clone)]
pub struct Mage {
    core: HeroCore,
    max_mana: u32,
    current_mana: u32,
}

impl Mage {
    pub fn new(
        name: &str,
        max_life: i32,
        current_life: i32,
        attack: i32,
        speed: i32,
    ) -> Result<Self, CombatError> {
        Self::from_rules(name, max_life, current_life, attack, speed, &GameConstants::default())
    }

    pub fn from_rules(
        name: &str,
        max_life: i32,
        current_life: i32,
        attack: i32,
        speed: i32,
        rules: &GameConstants,
    ) -> Result<Self, CombatError> {
        let stats = StatBlock::new(name, max_life, current_life, attack, speed)?;
        Ok(Mage {
            core: HeroCore::from_rules(stats, rules)?,
            max_mana: DEFAULT_MANA,
            current_mana: DEFAULT_MANA,
        })
    }

    /// Set the mana pool; current mana is clamped to the new maximum
    pub fn with_mana(mut self, max_mana: u32, current_mana: u32) -> Self {
        self.set_max_mana(max_mana);
        self.set_current_mana(current_mana);
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.core.stats.set_element(element);
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.core.inventory = inventory;
        self
    }

    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    pub fn set_max_mana(&mut self, value: u32) {
        self.max_mana = value;
        self.current_mana = self.current_mana.min(value);
    }

    pub fn current_mana(&self) -> u32 {
        self.current_mana
    }

    pub fn set_current_mana(&mut self, value: u32) {
        self.current_mana = value.min(self.max_mana);
    }

    /// Costly Neutral blast: attack * multiplier + bonus
    pub fn ancient_magic(
        &mut self,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        let rules = &ctx.rules.mage;
        let cost = rules.ancient_magic_cost;
        self.check_mana(cost)?;

        let damage = self
            .core
            .stats
            .attack()
            .saturating_mul(rules.ancient_magic_attack_multiplier)
            .saturating_add(rules.ancient_magic_bonus);
        self.current_mana -= cost;
        let hit = target.damage_received(damage, Element::Neutral, ctx);
        Ok(attack_line(
            self.core.stats.name(),
            target,
            "ancient magic",
            &hit,
        ))
    }

    fn check_mana(&self, cost: u32) -> Result<(), CombatError> {
        if self.current_mana < cost {
            return Err(CombatError::InsufficientResource {
                resource: Resource::Mana,
                required: cost,
                available: self.current_mana,
            });
        }
        Ok(())
    }

    fn weapon_attack(
        &mut self,
        kind: AttackKind,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        let stats = &self.core.stats;
        match &self.core.equipped {
            Some(Item::Weapon(weapon)) => {
                let hit = weapon.use_attack(kind, stats, target, ctx);
                Ok(attack_line(stats.name(), target, weapon.info().name(), &hit))
            }
            _ => Err(CombatError::NoWeaponEquipped(stats.name().to_string())),
        }
    }
}

impl Combatant for Mage {
    fn stats(&self) -> &StatBlock {
        &self.core.stats
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.core.stats
    }

    /// Cast the equipped grimoire's spell, or throw a weak punch without one
    fn strike(
        &mut self,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        let stats = &self.core.stats;
        match &self.core.equipped {
            Some(Item::Grimoire(grimoire)) => {
                let hit = grimoire.cast_spell(stats, &mut self.current_mana, target, ctx)?;
                Ok(format!(
                    "{} casts {} on {}: {}.",
                    stats.name(),
                    grimoire.element(),
                    target.name(),
                    hit.summary()
                ))
            }
            _ => {
                let damage = ctx.rules.combat.unarmed_damage;
                let hit = target.damage_received(damage, Element::Neutral, ctx);
                Ok(attack_line(stats.name(), target, "a weak punch", &hit))
            }
        }
    }
}

impl Archetype for Mage {
    fn core(&self) -> &HeroCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HeroCore {
        &mut self.core
    }

    fn class_name(&self) -> &'static str {
        "Mage"
    }

    fn upgrade(&mut self, points: u32, choice: u8) -> Result<(), CombatError> {
        match choice {
            1 => {
                let stats = &mut self.core.stats;
                stats.set_attack(stats.base_attack().saturating_add(points_delta(points)));
            }
            2 => {
                self.max_mana = self.max_mana.saturating_add(points);
                self.set_current_mana(self.current_mana.saturating_add(points));
            }
            other => return Err(CombatError::InvalidChoice(other)),
        }
        Ok(())
    }

    /// The equipped item's attacks (or an unarmed hit) plus ancient magic on "2"
    ///
    /// A weapon's heavy attack gives "2" up to ancient magic and moves to "3".
    fn actions(&self, rules: &GameConstants) -> ActionMap {
        let mut actions = match &self.core.equipped {
            Some(item) => item.attacks(),
            None => {
                let mut actions = ActionMap::new();
                actions.insert(
                    "1".to_string(),
                    ActionEntry::new("Unarmed attack (MP: 0)", HeroAction::Strike),
                );
                actions
            }
        };
        let displaced = actions.insert(
            "2".to_string(),
            ActionEntry::new(
                format!("Ancient magic (MP: {})", rules.mage.ancient_magic_cost),
                HeroAction::AncientMagic,
            ),
        );
        if let Some(entry) = displaced {
            actions.insert("3".to_string(), entry);
        }
        actions
    }

    fn check_action(&self, action: HeroAction, rules: &GameConstants) -> Result<(), CombatError> {
        match (action, &self.core.equipped) {
            (HeroAction::Strike | HeroAction::CastSpell, Some(Item::Grimoire(grimoire))) => {
                grimoire.check_mana(self.current_mana)
            }
            (HeroAction::WeaponAttack(_), Some(Item::Weapon(_))) => Ok(()),
            (HeroAction::WeaponAttack(_), _) => {
                Err(CombatError::NoWeaponEquipped(self.core.stats.name().to_string()))
            }
            (HeroAction::AncientMagic, _) => self.check_mana(rules.mage.ancient_magic_cost),
            _ => Ok(()),
        }
    }

    fn perform(
        &mut self,
        action: HeroAction,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        match action {
            HeroAction::Strike | HeroAction::CastSpell => self.strike(target, ctx),
            HeroAction::WeaponAttack(kind) => self.weapon_attack(kind, target, ctx),
            HeroAction::AncientMagic => self.ancient_magic(target, ctx),
            other => Err(CombatError::InvalidAction(format!("{:?}", other))),
        }
    }

    fn can_equip(&self, item: &Item) -> bool {
        matches!(item, Item::Grimoire(_) | Item::Weapon(_))
    }
}
