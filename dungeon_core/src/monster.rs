//! Monster - Hostile entity with a fixed elemental attack and loot

use crate::combat::{CombatContext, Combatant};
use crate::error::CombatError;
use crate::stat_block::StatBlock;
use crate::types::{Describe, Element};

#[derive(Debug, Clone)]
pub struct Monster {
    stats: StatBlock,
    loot: Vec<String>,
    description: String,
}

impl Monster {
    /// Spawn a monster at full life
    pub fn new(
        name: &str,
        max_life: i32,
        attack: i32,
        speed: i32,
        element: Element,
    ) -> Result<Self, CombatError> {
        let stats = StatBlock::new(name, max_life, max_life, attack, speed)?.with_element(element);
        Ok(Monster {
            stats,
            loot: Vec::new(),
            description: String::new(),
        })
    }

    pub fn with_loot(mut self, loot: Vec<String>) -> Self {
        self.loot = loot;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Configured drops, regardless of whether the monster is alive
    pub fn loot(&self) -> &[String] {
        &self.loot
    }

    /// Drops released on death; empty while the monster lives
    pub fn get_loot(&self) -> Vec<String> {
        if self.is_alive() {
            Vec::new()
        } else {
            self.loot.clone()
        }
    }
}

impl Combatant for Monster {
    fn stats(&self) -> &StatBlock {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    fn strike(
        &mut self,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        let hit = target.damage_received(self.stats.attack(), self.stats.element(), ctx);
        Ok(format!(
            "{} attacks {}: {}.",
            self.stats.name(),
            target.name(),
            hit.summary()
        ))
    }
}

impl Describe for Monster {
    fn description(&self) -> String {
        if self.description.is_empty() {
            format!(
                "{} is a {} element monster.",
                self.stats.name(),
                self.stats.element()
            )
        } else {
            self.description.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConstants;
    use crate::dice::LoadedDice;
    use crate::hero::{Hero, Mage};

    #[test]
    fn test_spawns_at_full_life() {
        let monster = Monster::new("  cave troll ", 40, 6, 3, Element::Ice).unwrap();
        assert_eq!(monster.name(), "Cave Troll");
        assert_eq!(monster.stats().current_life(), 40);
        assert_eq!(monster.stats().element(), Element::Ice);
        assert!(Monster::new("Troll", 0, 6, 3, Element::Ice).is_err());
    }

    #[test]
    fn test_strike_uses_own_element() {
        let rules = GameConstants::default();
        let mut dice = LoadedDice::failing();
        let mut ctx = CombatContext::new(&mut dice, &rules);
        let mut imp = Monster::new("Imp", 20, 12, 5, Element::Fire).unwrap();
        let mut hero: Hero = Mage::new("Merlin", 100, 100, 5, 5)
            .unwrap()
            .with_element(Element::Poison)
            .into();

        let line = imp.strike(&mut hero, &mut ctx).unwrap();
        assert_eq!(hero.stats().current_life(), 76);
        assert_eq!(line, "Imp attacks Merlin: 24 Fire damage, super effective.");
    }

    #[test]
    fn test_loot_only_after_death() {
        let mut monster = Monster::new("Goblin", 10, 2, 2, Element::Neutral)
            .unwrap()
            .with_loot(vec!["Gold Coin".to_string(), "Rusty Key".to_string()]);
        assert!(monster.get_loot().is_empty());

        monster.stats_mut().set_current_life(0);
        assert_eq!(monster.get_loot(), vec!["Gold Coin", "Rusty Key"]);
    }

    #[test]
    fn test_description() {
        let monster = Monster::new("Wisp", 5, 1, 9, Element::Lightning).unwrap();
        assert_eq!(monster.description(), "Wisp is a Lightning element monster.");

        let monster = monster.with_description("A flickering light.");
        assert_eq!(monster.description(), "A flickering light.");
    }
}
