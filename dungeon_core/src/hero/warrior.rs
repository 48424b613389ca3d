//! Warrior - Melee archetype that blocks with shield and armor

use super::{attack_line, points_delta, ActionEntry, ActionMap, Archetype, HeroAction, HeroCore};
use crate::combat::{resolve_blocked, resolve_reduced, CombatContext, Combatant, Hit, Mitigation};
use crate::config::GameConstants;
use crate::error::CombatError;
use crate::item::{Inventory, Item};
use crate::stat_block::StatBlock;
use crate::types::Element;

/// Values a rage overwrites, restored when it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RageSnapshot {
    attack: i32,
    shield: i32,
    armor: i32,
}

#[derive(Debug, Clone)]
pub struct Warrior {
    core: HeroCore,
    shield: i32,
    armor: i32,
    defend: bool,
    rage: Option<RageSnapshot>,
}

impl Warrior {
    pub fn new(
        name: &str,
        max_life: i32,
        current_life: i32,
        attack: i32,
        speed: i32,
    ) -> Result<Self, CombatError> {
        Self::from_rules(name, max_life, current_life, attack, speed, &GameConstants::default())
    }

    /// Warrior whose inventory capacity comes from `rules`
    pub fn from_rules(
        name: &str,
        max_life: i32,
        current_life: i32,
        attack: i32,
        speed: i32,
        rules: &GameConstants,
    ) -> Result<Self, CombatError> {
        let stats = StatBlock::new(name, max_life, current_life, attack, speed)?;
        Ok(Warrior {
            core: HeroCore::from_rules(stats, rules)?,
            shield: 0,
            armor: 0,
            defend: false,
            rage: None,
        })
    }

    /// Set shield and armor (negative values count as zero)
    pub fn with_defenses(mut self, shield: i32, armor: i32) -> Self {
        self.shield = shield.max(0);
        self.armor = armor.max(0);
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

    pub fn shield(&self) -> i32 {
        self.shield
    }

    pub fn armor(&self) -> i32 {
        self.armor
    }

    /// Whether the last defend roll succeeded and has not been spent yet
    pub fn is_defending(&self) -> bool {
        self.defend
    }

    pub fn in_rage(&self) -> bool {
        self.rage.is_some()
    }

    /// Double attack and drop shield and armor until the next strike
    pub fn to_rage(&mut self) -> String {
        let name = self.core.stats.name().to_string();
        if self.rage.is_some() {
            return format!("{} is already raging.", name);
        }

        let attack = self.core.stats.base_attack();
        self.rage = Some(RageSnapshot {
            attack,
            shield: self.shield,
            armor: self.armor,
        });
        self.core.stats.set_attack(attack.saturating_mul(2));
        self.shield = 0;
        self.armor = 0;
        format!("{} flies into a rage! Attack doubled, defenses dropped.", name)
    }

    /// Restore the values saved by `to_rage`
    pub fn reset_rage(&mut self) {
        if let Some(snapshot) = self.rage.take() {
            self.core.stats.set_attack(snapshot.attack);
            self.shield = snapshot.shield;
            self.armor = snapshot.armor;
        }
    }

    fn roll_defend(&mut self, ctx: &mut CombatContext<'_>) {
        self.defend = ctx.dice.roll(-self.shield, self.shield) > 0;
    }
}

impl Combatant for Warrior {
    fn stats(&self) -> &StatBlock {
        &self.core.stats
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.core.stats
    }

    /// Block everything on a successful defend roll, else subtract shield + armor
    fn damage_received(&mut self, raw: i32, element: Element, ctx: &mut CombatContext<'_>) -> Hit {
        self.roll_defend(ctx);

        if self.defend {
            self.defend = false;
            return resolve_blocked(&self.core.stats, raw, element, Mitigation::Blocked);
        }

        let reduction = self.shield.saturating_add(self.armor);
        resolve_reduced(&mut self.core.stats, raw, element, reduction)
    }

    fn strike(
        &mut self,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        let stats = &self.core.stats;
        let line = match &self.core.equipped {
            Some(Item::Weapon(weapon)) => {
                let hit = weapon.attack(stats, target, ctx);
                attack_line(stats.name(), target, weapon.info().name(), &hit)
            }
            _ => {
                let hit = target.damage_received(stats.attack(), Element::Neutral, ctx);
                attack_line(stats.name(), target, "bare fists", &hit)
            }
        };
        self.reset_rage();
        Ok(line)
    }
}

impl Archetype for Warrior {
    fn core(&self) -> &HeroCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HeroCore {
        &mut self.core
    }

    fn class_name(&self) -> &'static str {
        "Warrior"
    }

    fn upgrade(&mut self, points: u32, choice: u8) -> Result<(), CombatError> {
        let delta = points_delta(points);
        match choice {
            1 => self.shield = self.shield.saturating_add(delta),
            2 => self.armor = self.armor.saturating_add(delta),
            other => return Err(CombatError::InvalidChoice(other)),
        }
        Ok(())
    }

    fn actions(&self, _rules: &GameConstants) -> ActionMap {
        let mut actions = ActionMap::new();
        actions.insert(
            "1".to_string(),
            ActionEntry::new("Attack (basic attack with weapon)", HeroAction::Strike),
        );
        actions.insert(
            "2".to_string(),
            ActionEntry::new("Rage (doubles attack, sacrifices defense)", HeroAction::Rage),
        );
        actions
    }

    fn perform(
        &mut self,
        action: HeroAction,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        match action {
            HeroAction::Strike => self.strike(target, ctx),
            HeroAction::Rage => Ok(self.to_rage()),
            other => Err(CombatError::InvalidAction(format!("{:?}", other))),
        }
    }

    fn can_equip(&self, item: &Item) -> bool {
        matches!(item, Item::Weapon(_))
    }
}
