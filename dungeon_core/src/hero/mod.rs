//! Heroes - Player archetypes with equipment and keyed actions
//!
//! A hero is one of three archetypes sharing a `HeroCore` (stats, inventory,
//! equipped item). The equipped item decides which attacks a hero can pick,
//! so changing equipment changes the action menu without changing the hero.

mod archer;
mod mage;
mod warrior;

pub use archer::Archer;
pub use mage::Mage;
pub use warrior::Warrior;

use crate::combat::{CombatContext, Combatant, Hit};
use crate::config::GameConstants;
use crate::error::CombatError;
use crate::item::{AttackKind, Inventory, Item, ItemId};
use crate::stat_block::StatBlock;
use crate::status::StatusEffect;
use crate::types::Element;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Ordered menu of actions, keyed by what the player types
pub type ActionMap = BTreeMap<String, ActionEntry>;

/// One menu entry
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEntry {
    pub description: String,
    pub action: HeroAction,
}

impl ActionEntry {
    pub fn new(description: impl Into<String>, action: HeroAction) -> Self {
        ActionEntry {
            description: description.into(),
            action,
        }
    }
}

/// Everything a hero can be asked to do on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroAction {
    /// Use one of the equipped weapon's attacks
    WeaponAttack(AttackKind),
    /// The archetype's basic attack
    Strike,
    Rage,
    Aim,
    Reload,
    CastSpell,
    AncientMagic,
}

/// Result of an equip request that did not fail outright
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipOutcome {
    Equipped {
        item: String,
        replaced: Option<String>,
    },
    /// The archetype cannot wield the item; nothing changed
    Rejected { reason: String },
}

impl EquipOutcome {
    pub fn is_equipped(&self) -> bool {
        matches!(self, EquipOutcome::Equipped { .. })
    }

    pub fn message(&self) -> String {
        match self {
            EquipOutcome::Equipped {
                item,
                replaced: Some(old),
            } => format!("Equipped {} (put {} back in the inventory).", item, old),
            EquipOutcome::Equipped { item, replaced: None } => format!("Equipped {}.", item),
            EquipOutcome::Rejected { reason } => reason.clone(),
        }
    }
}

/// State shared by every archetype
#[derive(Debug, Clone)]
pub struct HeroCore {
    stats: StatBlock,
    inventory: Inventory,
    equipped: Option<Item>,
}

impl HeroCore {
    /// Empty-handed core with an inventory of the configured capacity
    pub fn from_rules(stats: StatBlock, rules: &GameConstants) -> Result<Self, CombatError> {
        Ok(HeroCore {
            stats,
            inventory: Inventory::from_rules(rules)?,
            equipped: None,
        })
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn equipped(&self) -> Option<&Item> {
        self.equipped.as_ref()
    }
}

/// Behaviour that distinguishes the archetypes
pub trait Archetype: Combatant {
    fn core(&self) -> &HeroCore;

    fn core_mut(&mut self) -> &mut HeroCore;

    fn class_name(&self) -> &'static str;

    /// Spend `points` on the stats picked by `choice`
    fn upgrade(&mut self, points: u32, choice: u8) -> Result<(), CombatError>;

    fn actions(&self, rules: &GameConstants) -> ActionMap;

    /// Fail if `action` could not be carried out right now (missing weapon,
    /// ammo or mana); nothing is changed either way
    fn check_action(&self, _action: HeroAction, _rules: &GameConstants) -> Result<(), CombatError> {
        Ok(())
    }

    fn perform(
        &mut self,
        action: HeroAction,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError>;

    fn can_equip(&self, item: &Item) -> bool;
}

/// A hero of any archetype
#[derive(Debug, Clone)]
pub enum Hero {
    Warrior(Warrior),
    Archer(Archer),
    Mage(Mage),
}

impl Hero {
    fn archetype(&self) -> &dyn Archetype {
        match self {
            Hero::Warrior(w) => w,
            Hero::Archer(a) => a,
            Hero::Mage(m) => m,
        }
    }

    fn archetype_mut(&mut self) -> &mut dyn Archetype {
        match self {
            Hero::Warrior(w) => w,
            Hero::Archer(a) => a,
            Hero::Mage(m) => m,
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.archetype().class_name()
    }

    pub fn core(&self) -> &HeroCore {
        self.archetype().core()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.core().inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.archetype_mut().core_mut().inventory
    }

    pub fn equipped_weapon(&self) -> Option<&Item> {
        self.core().equipped()
    }

    /// Store an item, handing it back if it does not fit
    pub fn add_item_to_inventory(&mut self, item: Item) -> Result<(), Item> {
        self.inventory_mut().add(item)
    }

    /// Move an inventory item into the weapon slot
    ///
    /// A previously equipped item goes back into the inventory; if it no
    /// longer fits, nothing changes and `InventoryFull` is returned.
    pub fn equip(&mut self, id: ItemId) -> Result<EquipOutcome, CombatError> {
        let hero = self.archetype_mut();
        let item = hero
            .core()
            .inventory
            .get(id)
            .ok_or_else(|| CombatError::ItemNotFound(id.to_string()))?;

        if !hero.can_equip(item) {
            return Ok(EquipOutcome::Rejected {
                reason: format!("A {} cannot equip {}.", hero.class_name(), item.name()),
            });
        }

        let core = hero.core_mut();
        let item = core
            .inventory
            .remove(id)
            .ok_or_else(|| CombatError::ItemNotFound(id.to_string()))?;
        let replaced = match core.equipped.take() {
            Some(previous) => {
                let old_name = previous.name().to_string();
                if let Err(previous) = core.inventory.add(previous) {
                    core.equipped = Some(previous);
                    core.inventory.put_back(item);
                    return Err(CombatError::InventoryFull(old_name));
                }
                Some(old_name)
            }
            None => None,
        };

        let name = item.name().to_string();
        debug!(hero = core.stats.name(), item = %name, "item equipped");
        core.equipped = Some(item);
        Ok(EquipOutcome::Equipped {
            item: name,
            replaced,
        })
    }

    /// Return the equipped item to the inventory
    pub fn unequip(&mut self) -> Result<Option<ItemId>, CombatError> {
        let core = self.archetype_mut().core_mut();
        let Some(item) = core.equipped.take() else {
            return Ok(None);
        };
        let id = item.id();
        match core.inventory.add(item) {
            Ok(()) => Ok(Some(id)),
            Err(item) => {
                let name = item.name().to_string();
                core.equipped = Some(item);
                Err(CombatError::InventoryFull(name))
            }
        }
    }

    pub fn upgrade(&mut self, points: u32, choice: u8) -> Result<(), CombatError> {
        self.archetype_mut().upgrade(points, choice)
    }

    pub fn get_actions(&self, rules: &GameConstants) -> ActionMap {
        self.archetype().actions(rules)
    }

    /// Resolve `key` and make sure the hero can afford the bound action
    pub fn check_action(&self, key: &str, rules: &GameConstants) -> Result<HeroAction, CombatError> {
        let action = self
            .get_actions(rules)
            .get(key)
            .map(|entry| entry.action)
            .ok_or_else(|| CombatError::InvalidAction(key.to_string()))?;
        self.archetype().check_action(action, rules)?;
        Ok(action)
    }

    /// Run the action bound to `key` in the current menu
    pub fn perform_action(
        &mut self,
        key: &str,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        let action = self.check_action(key, ctx.rules)?;
        self.archetype_mut().perform(action, target, ctx)
    }

    pub fn as_warrior(&self) -> Option<&Warrior> {
        match self {
            Hero::Warrior(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_warrior_mut(&mut self) -> Option<&mut Warrior> {
        match self {
            Hero::Warrior(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_archer(&self) -> Option<&Archer> {
        match self {
            Hero::Archer(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_archer_mut(&mut self) -> Option<&mut Archer> {
        match self {
            Hero::Archer(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_mage(&self) -> Option<&Mage> {
        match self {
            Hero::Mage(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mage_mut(&mut self) -> Option<&mut Mage> {
        match self {
            Hero::Mage(m) => Some(m),
            _ => None,
        }
    }
}

impl Combatant for Hero {
    fn stats(&self) -> &StatBlock {
        self.archetype().stats()
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        self.archetype_mut().stats_mut()
    }

    fn damage_received(&mut self, raw: i32, element: Element, ctx: &mut CombatContext<'_>) -> Hit {
        self.archetype_mut().damage_received(raw, element, ctx)
    }

    fn strike(
        &mut self,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<String, CombatError> {
        self.archetype_mut().strike(target, ctx)
    }

    fn set_status(&mut self, status: StatusEffect) {
        self.archetype_mut().set_status(status);
    }
}

impl From<Warrior> for Hero {
    fn from(warrior: Warrior) -> Self {
        Hero::Warrior(warrior)
    }
}

impl From<Archer> for Hero {
    fn from(archer: Archer) -> Self {
        Hero::Archer(archer)
    }
}

impl From<Mage> for Hero {
    fn from(mage: Mage) -> Self {
        Hero::Mage(mage)
    }
}

/// Upgrade points as a stat delta
pub(crate) fn points_delta(points: u32) -> i32 {
    i32::try_from(points).unwrap_or(i32::MAX)
}

/// Log line for a hit on `target`
pub(crate) fn attack_line(attacker: &str, target: &dyn Combatant, with: &str, hit: &Hit) -> String {
    format!(
        "{} attacks {} with {}: {}.",
        attacker,
        target.name(),
        with,
        hit.summary()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Grimoire, RangedWeapon, Weapon};

    fn warrior() -> Hero {
        Warrior::new("Conan", 100, 100, 10, 10).unwrap().into()
    }

    #[test]
    fn test_equip_moves_item_out_of_inventory() {
        let mut hero = warrior();
        let sword: Item = Weapon::new("Sword", 5).unwrap().into();
        let id = sword.id();
        hero.add_item_to_inventory(sword).unwrap();

        let outcome = hero.equip(id).unwrap();
        assert!(outcome.is_equipped());
        assert_eq!(outcome.message(), "Equipped Sword.");
        assert!(hero.inventory().is_empty());
        assert_eq!(hero.equipped_weapon().map(Item::id), Some(id));
    }

    #[test]
    fn test_equip_swaps_previous_weapon_back() {
        let mut hero = warrior();
        let sword: Item = Weapon::new("Sword", 5).unwrap().into();
        let axe: Item = Weapon::new("Axe", 7).unwrap().into();
        let (sword_id, axe_id) = (sword.id(), axe.id());
        hero.add_item_to_inventory(sword).unwrap();
        hero.add_item_to_inventory(axe).unwrap();

        hero.equip(sword_id).unwrap();
        let outcome = hero.equip(axe_id).unwrap();
        assert_eq!(
            outcome,
            EquipOutcome::Equipped {
                item: "Axe".to_string(),
                replaced: Some("Sword".to_string())
            }
        );
        assert!(hero.inventory().get(sword_id).is_some());
        assert_eq!(hero.equipped_weapon().map(Item::id), Some(axe_id));
    }

    #[test]
    fn test_equip_rejects_wrong_kind() {
        let mut hero = warrior();
        let book: Item = Grimoire::new("Tome", Element::Fire, 5, 5).unwrap().into();
        let bow: Item = RangedWeapon::new("Bow", 5, 1).unwrap().into();
        let (book_id, bow_id) = (book.id(), bow.id());
        hero.add_item_to_inventory(book).unwrap();
        hero.add_item_to_inventory(bow).unwrap();

        let outcome = hero.equip(book_id).unwrap();
        assert_eq!(outcome.message(), "A Warrior cannot equip Tome.");
        assert!(!hero.equip(bow_id).unwrap().is_equipped());
        assert_eq!(hero.inventory().len(), 2);
        assert!(hero.equipped_weapon().is_none());
    }

    #[test]
    fn test_equip_unknown_item() {
        let mut hero = warrior();
        let stray: Item = Weapon::new("Dagger", 2).unwrap().into();
        assert!(matches!(
            hero.equip(stray.id()),
            Err(CombatError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_swap_fails_when_old_weapon_no_longer_fits() {
        let core_inventory = Inventory::new(10.0).unwrap();
        let mut hero: Hero = Warrior::new("Conan", 100, 100, 10, 10)
            .unwrap()
            .with_inventory(core_inventory)
            .into();
        let hammer: Item = Weapon::new("Hammer", 9).unwrap().with_weight(8.0).unwrap().into();
        let knife: Item = Weapon::new("Knife", 2).unwrap().with_weight(1.0).unwrap().into();
        let (hammer_id, knife_id) = (hammer.id(), knife.id());
        hero.add_item_to_inventory(hammer).unwrap();
        hero.equip(hammer_id).unwrap();
        hero.add_item_to_inventory(knife).unwrap();
        // once the knife leaves, only 1.5 units are free for the hammer
        let brick: Item = Weapon::new("Brick", 1).unwrap().with_weight(8.5).unwrap().into();
        hero.add_item_to_inventory(brick).unwrap();

        let result = hero.equip(knife_id);
        assert!(matches!(result, Err(CombatError::InventoryFull(ref n)) if n == "Hammer"));
        assert_eq!(hero.equipped_weapon().map(Item::id), Some(hammer_id));
        assert!(hero.inventory().get(knife_id).is_some());
    }

    #[test]
    fn test_unequip_returns_item() {
        let mut hero = warrior();
        let sword: Item = Weapon::new("Sword", 5).unwrap().into();
        let id = sword.id();
        hero.add_item_to_inventory(sword).unwrap();
        hero.equip(id).unwrap();

        assert_eq!(hero.unequip().unwrap(), Some(id));
        assert!(hero.equipped_weapon().is_none());
        assert!(hero.inventory().has_item("sword"));
        assert_eq!(hero.unequip().unwrap(), None);
    }

    #[test]
    fn test_perform_unknown_key() {
        let mut hero = warrior();
        let mut target = crate::monster::Monster::new("Rat", 10, 1, 1, Element::Neutral).unwrap();
        let rules = GameConstants::default();
        let mut dice = crate::dice::LoadedDice::failing();
        let mut ctx = CombatContext::new(&mut dice, &rules);

        let err = hero.perform_action("9", &mut target, &mut ctx).unwrap_err();
        assert_eq!(err, CombatError::InvalidAction("9".to_string()));
        assert_eq!(target.stats().current_life(), 10);
    }

    #[test]
    fn test_points_delta_saturates() {
        assert_eq!(points_delta(5), 5);
        assert_eq!(points_delta(u32::MAX), i32::MAX);
    }
}
