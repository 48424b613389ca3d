//! Archer - Ranged archetype that dodges and aims

use super::{attack_line, points_delta, ActionEntry, ActionMap, Archetype, HeroAction, HeroCore};
use crate::combat::{resolve_blocked, resolve_hit, CombatContext, Combatant, Hit, Mitigation};
use crate::config::GameConstants;
use crate::error::CombatError;
use crate::item::{AttackKind, Inventory, Item};
use crate::stat_block::{ModifierSource, Stat, StatBlock, StatModifier};
use crate::types::Element;

#[derive(Debug, Clone)]
pub struct Archer {
    core: HeroCore,
    max_ammo: u32,
    current_ammo: u32,
    dodge: bool,
    aiming: bool,
}

impl Archer {
    /// New archer with a full quiver of the default size
    pub fn new(
        name: &str,
        max_life: i32,
        current_life: i32,
        attack: i32,
        speed: i32,
    ) -> Result<Self, CombatError> {
        Self::from_rules(name, max_life, current_life, attack, speed, &GameConstants::default())
    }

    /// New archer with a full quiver of `archer.default_max_ammo` arrows and an
    /// inventory of `inventory.default_capacity`
    pub fn from_rules(
        name: &str,
        max_life: i32,
        current_life: i32,
        attack: i32,
        speed: i32,
        rules: &GameConstants,
    ) -> Result<Self, CombatError> {
        let stats = StatBlock::new(name, max_life, current_life, attack, speed)?;
        let max_ammo = rules.archer.default_max_ammo;
        if max_ammo == 0 {
            return Err(CombatError::invalid("max_ammo", "must be greater than 0"));
        }
        Ok(Archer {
            core: HeroCore::from_rules(stats, rules)?,
            max_ammo,
            current_ammo: max_ammo,
            dodge: false,
            aiming: false,
        })
    }

    pub fn with_ammo(mut self, max_ammo: u32, current_ammo: u32) -> Result<Self, CombatError> {
        self.set_max_ammo(max_ammo)?;
        self.set_current_ammo(current_ammo)?;
        Ok(self)
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.core.stats.set_element(element);
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.core.inventory = inventory;
        self
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo
    }

    /// Resize the quiver; current ammo is cut down to fit
    pub fn set_max_ammo(&mut self, value: u32) -> Result<(), CombatError> {
        if value == 0 {
            return Err(CombatError::invalid("max_ammo", "must be greater than 0"));
        }
        self.max_ammo = value;
        self.current_ammo = self.current_ammo.min(value);
        Ok(())
    }

    pub fn current_ammo(&self) -> u32 {
        self.current_ammo
    }

    pub fn set_current_ammo(&mut self, value: u32) -> Result<(), CombatError> {
        if value > self.max_ammo {
            return Err(CombatError::invalid(
                "current_ammo",
                format!("must not exceed max_ammo ({}), got {}", self.max_ammo, value),
            ));
        }
        self.current_ammo = value;
        Ok(())
    }

    pub fn dodge(&self) -> bool {
        self.dodge
    }

    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    /// Focus the next shot: more damage, but no dodging until it is fired
    pub fn aim(&mut self) -> String {
        self.aiming = true;
        self.dodge = false;
        format!("{} takes aim.", self.core.stats.name())
    }

    pub fn reload(&mut self) -> String {
        self.current_ammo = self.max_ammo;
        format!(
            "{} reloads ({} arrows).",
            self.core.stats.name(),
            self.current_ammo
        )
    }

    fn roll_dodge(&mut self, ctx: &mut CombatContext<'_>) {
        if self.aiming {
            self.dodge = false;
            return;
        }
        let speed = self.core.stats.speed();
        let high = speed.saturating_add(speed / 2);
        if ctx.dice.roll(-speed, high) > 0 {
            self.dodge = true;
        }
    }
}

impl Combatant for Archer {
    fn stats(&self) -> &StatBlock {
        &self.core.stats
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.core.stats
    }

    /// Dodge on a speed-weighted roll (never while aiming), else take full damage
    fn damage_received(&mut self, raw: i32, element: Element, ctx: &mut CombatContext<'_>) -> Hit {
        self.roll_dodge(ctx);

        if self.dodge {
            self.dodge = false;
            return resolve_blocked(&self.core.stats, raw, element, Mitigation::Dodged);
        }
        resolve_hit(&mut self.core.stats, raw, element)
    }

    /// Fire the equipped ranged weapon
    ///
    /// An aimed shot adds attack / aim_divisor for this shot only. The bonus
    /// and the aiming flag are cleared whether or not the shot succeeds.
    fn strike(
        &mut self,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        let HeroCore {
            stats, equipped, ..
        } = &mut self.core;
        let Some(Item::Ranged(bow)) = equipped.as_ref() else {
            return Err(CombatError::NoWeaponEquipped(stats.name().to_string()));
        };

        if self.aiming {
            let bonus = (stats.attack() as f64 / ctx.rules.archer.aim_divisor) as i32;
            stats.push_modifier(StatModifier::new(ModifierSource::Aim, Stat::Attack, bonus));
        }

        let result = bow.fire(AttackKind::Normal, stats, &mut self.current_ammo, target, ctx);

        stats.pop_modifiers(ModifierSource::Aim);
        self.aiming = false;

        let hit = result?;
        Ok(attack_line(stats.name(), target, bow.info().name(), &hit))
    }
}

impl Archetype for Archer {
    fn core(&self) -> &HeroCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HeroCore {
        &mut self.core
    }

    fn class_name(&self) -> &'static str {
        "Archer"
    }

    /// Half the points (rounded down) go to speed, the rest to both quiver size and attack
    fn upgrade(&mut self, points: u32, _choice: u8) -> Result<(), CombatError> {
        let speed_increase = points / 2;
        let rest = points - speed_increase;

        let stats = &mut self.core.stats;
        stats.set_speed(stats.base_speed().saturating_add(points_delta(speed_increase)));
        stats.set_attack(stats.base_attack().saturating_add(points_delta(rest)));
        self.max_ammo = self.max_ammo.saturating_add(rest);
        Ok(())
    }

    fn actions(&self, _rules: &GameConstants) -> ActionMap {
        let mut actions = ActionMap::new();
        actions.insert(
            "1".to_string(),
            ActionEntry::new("Shoot (basic attack with weapon)", HeroAction::Strike),
        );
        actions.insert(
            "2".to_string(),
            ActionEntry::new(
                "Aim (sure hit, no dodging, slightly more damage)",
                HeroAction::Aim,
            ),
        );
        actions.insert(
            "3".to_string(),
            ActionEntry::new("Reload (refill ammunition)", HeroAction::Reload),
        );
        actions
    }

    fn check_action(&self, action: HeroAction, _rules: &GameConstants) -> Result<(), CombatError> {
        if action != HeroAction::Strike {
            return Ok(());
        }
        match &self.core.equipped {
            Some(Item::Ranged(bow)) => bow.check_ammo(self.current_ammo),
            _ => Err(CombatError::NoWeaponEquipped(self.core.stats.name().to_string())),
        }
    }

    fn perform(
        &mut self,
        action: HeroAction,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        match action {
            HeroAction::Strike => self.strike(target, ctx),
            HeroAction::Aim => Ok(self.aim()),
            HeroAction::Reload => Ok(self.reload()),
            other => Err(CombatError::InvalidAction(format!("{:?}", other))),
        }
    }

    fn can_equip(&self, item: &Item) -> bool {
        matches!(item, Item::Ranged(_))
    }
}
