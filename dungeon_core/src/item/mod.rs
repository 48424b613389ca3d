//! Items - Weapons, grimoires and the weight-limited inventory

mod grimoire;
mod inventory;
mod weapon;

pub use grimoire::Grimoire;
pub use inventory::{Inventory, InventorySummary, ItemSummary};
pub use weapon::{AttackKind, RangedWeapon, Weapon};

use crate::error::CombatError;
use crate::hero::{ActionEntry, ActionMap, HeroAction};
use crate::types::{normalize_name, Describe, Element};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an item instance (shared by clones of the same item)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemId(u64);

impl ItemId {
    fn next() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fields common to every item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemInfo {
    id: ItemId,
    name: String,
    description: String,
    weight: f64,
}

impl ItemInfo {
    pub fn new(name: &str, weight: f64) -> Result<Self, CombatError> {
        let name = normalize_name("item name", name)?;
        validate_weight(weight)?;
        Ok(ItemInfo {
            id: ItemId::next(),
            name,
            description: String::new(),
            weight,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) -> Result<(), CombatError> {
        validate_weight(weight)?;
        self.weight = weight;
        Ok(())
    }

    pub(crate) fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Explicit description, or a generic one from name and weight
    pub fn describe(&self) -> String {
        if self.description.is_empty() {
            format!("{} is an item weighing {} units.", self.name, self.weight)
        } else {
            self.description.clone()
        }
    }
}

fn validate_weight(weight: f64) -> Result<(), CombatError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(CombatError::invalid(
            "weight",
            format!("must be positive, got {}", weight),
        ));
    }
    Ok(())
}

/// Anything that can be stored in an inventory
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Weapon(Weapon),
    Ranged(RangedWeapon),
    Grimoire(Grimoire),
}

impl Item {
    pub fn info(&self) -> &ItemInfo {
        match self {
            Item::Weapon(w) => w.info(),
            Item::Ranged(r) => r.info(),
            Item::Grimoire(g) => g.info(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.info().id()
    }

    pub fn name(&self) -> &str {
        self.info().name()
    }

    pub fn weight(&self) -> f64 {
        self.info().weight()
    }

    pub fn element(&self) -> Element {
        match self {
            Item::Weapon(w) => w.element(),
            Item::Ranged(r) => r.element(),
            Item::Grimoire(g) => g.element(),
        }
    }

    /// Keyed attacks this item grants its wielder
    pub fn attacks(&self) -> ActionMap {
        let mut actions = ActionMap::new();
        match self {
            Item::Weapon(_) | Item::Ranged(_) => {
                actions.insert(
                    "1".to_string(),
                    ActionEntry::new("Normal attack", HeroAction::WeaponAttack(AttackKind::Normal)),
                );
                actions.insert(
                    "2".to_string(),
                    ActionEntry::new("Heavy attack", HeroAction::WeaponAttack(AttackKind::Heavy)),
                );
            }
            Item::Grimoire(g) => {
                actions.insert(
                    "1".to_string(),
                    ActionEntry::new(
                        format!("Cast {} (MP: {})", g.element(), g.mana_cost()),
                        HeroAction::CastSpell,
                    ),
                );
            }
        }
        actions
    }
}

impl Describe for Item {
    fn description(&self) -> String {
        self.info().describe()
    }
}

impl From<Weapon> for Item {
    fn from(weapon: Weapon) -> Self {
        Item::Weapon(weapon)
    }
}

impl From<RangedWeapon> for Item {
    fn from(weapon: RangedWeapon) -> Self {
        Item::Ranged(weapon)
    }
}

impl From<Grimoire> for Item {
    fn from(grimoire: Grimoire) -> Self {
        Item::Grimoire(grimoire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_info_validation() {
        let info = ItemInfo::new("  rusty sword ", 3.0).unwrap();
        assert_eq!(info.name(), "Rusty Sword");
        assert!(ItemInfo::new("", 1.0).is_err());
        assert!(ItemInfo::new("Feather", 0.0).is_err());
        assert!(ItemInfo::new("Feather", -2.0).is_err());
        assert!(ItemInfo::new("Feather", f64::NAN).is_err());
    }

    #[test]
    fn test_ids_are_unique_and_shared_by_clones() {
        let a = ItemInfo::new("Stone", 1.0).unwrap();
        let b = ItemInfo::new("Stone", 1.0).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn test_default_description() {
        let item: Item = Weapon::new("Club", 4).unwrap().into();
        assert_eq!(item.description(), "Club is an item weighing 1 units.");

        let item: Item = Weapon::new("Club", 4)
            .unwrap()
            .with_description("A heavy club")
            .into();
        assert_eq!(item.description(), "A heavy club");
    }

    #[test]
    fn test_weapon_attack_keys() {
        let item: Item = Weapon::new("Sword", 5).unwrap().into();
        let attacks = item.attacks();
        assert_eq!(
            attacks.get("1").map(|a| a.action),
            Some(HeroAction::WeaponAttack(AttackKind::Normal))
        );
        assert_eq!(
            attacks.get("2").map(|a| a.action),
            Some(HeroAction::WeaponAttack(AttackKind::Heavy))
        );
    }

    #[test]
    fn test_grimoire_attack_keys() {
        let item: Item = Grimoire::new("Pyronomicon", Element::Fire, 10, 5).unwrap().into();
        let attacks = item.attacks();
        assert_eq!(attacks.len(), 1);
        let cast = attacks.get("1").unwrap();
        assert_eq!(cast.action, HeroAction::CastSpell);
        assert_eq!(cast.description, "Cast Fire (MP: 5)");
    }
}
