//! Room - A dungeon location holding monsters and loose items

use crate::combat::Combatant;
use crate::error::CombatError;
use crate::item::{Inventory, Item, ItemId};
use crate::monster::Monster;
use crate::types::{Describe, Element};

const RULE: &str = "------------------------------";

#[derive(Debug, Clone)]
pub struct Room {
    description: String,
    environment: Element,
    monsters: Vec<Monster>,
    items: Vec<Item>,
}

impl Room {
    pub fn new(description: &str, environment: Element) -> Result<Self, CombatError> {
        if description.trim().is_empty() {
            return Err(CombatError::invalid("description", "cannot be empty"));
        }
        Ok(Room {
            description: description.to_string(),
            environment,
            monsters: Vec::new(),
            items: Vec::new(),
        })
    }

    pub fn environment(&self) -> Element {
        self.environment
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn add_monster(&mut self, monster: Monster) {
        self.monsters.push(monster);
    }

    /// Remove the first monster with this name, ignoring case
    pub fn remove_monster(&mut self, name: &str) -> Option<Monster> {
        let wanted = name.trim().to_lowercase();
        let index = self
            .monsters
            .iter()
            .position(|m| m.name().to_lowercase() == wanted)?;
        Some(self.monsters.remove(index))
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Pick up the first item with this name, ignoring case
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let wanted = name.trim().to_lowercase();
        let index = self
            .items
            .iter()
            .position(|i| i.name().to_lowercase() == wanted)?;
        Some(self.items.remove(index))
    }

    /// Move a named item into `inventory`
    ///
    /// The item stays in the room if the inventory cannot hold it.
    pub fn loot_into(&mut self, name: &str, inventory: &mut Inventory) -> Result<ItemId, CombatError> {
        let item = self
            .take_item(name)
            .ok_or_else(|| CombatError::ItemNotFound(name.to_string()))?;
        let id = item.id();
        inventory.add(item).map_err(|item| {
            let name = item.name().to_string();
            self.items.push(item);
            CombatError::InventoryFull(name)
        })?;
        Ok(id)
    }

    /// Text shown when `hero_name` walks in
    pub fn enter(&self, hero_name: &str) -> String {
        let mut log = format!("{}\n{}\n{}\n", RULE, self.description(), RULE);
        if self.monsters.is_empty() {
            log.push_str("The room seems quiet.\n");
        } else {
            log.push_str(&format!("{} found enemies! Prepare to fight!\n", hero_name));
        }
        log
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

impl Describe for Room {
    fn description(&self) -> String {
        let mut text = format!("{}\nEnvironment: {}\n", self.description, self.environment);

        if self.monsters.is_empty() {
            text.push_str("The room looks empty...\n");
        } else {
            let names = join_names(self.monsters.iter().map(|m| m.name()));
            text.push_str(&format!("WARNING! ENEMIES IN SIGHT: {}\n", names));
        }

        if self.items.is_empty() {
            text.push_str("There is nothing of value nearby.");
        } else {
            let names = join_names(self.items.iter().map(|i| i.name()));
            text.push_str(&format!("In the room you found: {}", names));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Weapon;

    fn room() -> Room {
        Room::new("A damp cellar.", Element::Ice).unwrap()
    }

    fn sword(weight: f64) -> Item {
        Weapon::new("Sword", 5).unwrap().with_weight(weight).unwrap().into()
    }

    #[test]
    fn test_description_required() {
        assert!(Room::new("   ", Element::Neutral).is_err());
    }

    #[test]
    fn test_monster_management() {
        let mut room = room();
        room.add_monster(Monster::new("Rat", 5, 1, 1, Element::Neutral).unwrap());
        room.add_monster(Monster::new("Bat", 5, 1, 1, Element::Neutral).unwrap());

        assert!(room.remove_monster("RAT").is_some());
        assert!(room.remove_monster("rat").is_none());
        assert_eq!(room.monsters().len(), 1);
    }

    #[test]
    fn test_take_item_is_case_insensitive() {
        let mut room = room();
        room.add_item(sword(1.0));
        assert!(room.take_item("sWoRd").is_some());
        assert!(room.items().is_empty());
        assert!(room.take_item("sword").is_none());
    }

    #[test]
    fn test_remove_item_by_identity() {
        let mut room = room();
        let item = sword(1.0);
        let id = item.id();
        room.add_item(item);
        room.add_item(sword(1.0));
        assert_eq!(room.remove_item(id).map(|i| i.id()), Some(id));
        assert_eq!(room.items().len(), 1);
    }

    #[test]
    fn test_loot_into_respects_capacity() {
        let mut room = room();
        room.add_item(sword(6.0));
        let mut bag = Inventory::new(5.0).unwrap();

        let result = room.loot_into("sword", &mut bag);
        assert!(matches!(result, Err(CombatError::InventoryFull(_))));
        assert_eq!(room.items().len(), 1);
        assert!(bag.is_empty());

        let mut big_bag = Inventory::new(10.0).unwrap();
        room.loot_into("Sword", &mut big_bag).unwrap();
        assert!(room.items().is_empty());
        assert_eq!(big_bag.len(), 1);

        assert!(matches!(
            room.loot_into("Sword", &mut big_bag),
            Err(CombatError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_description_lists_contents() {
        let mut room = room();
        assert_eq!(
            room.description(),
            "A damp cellar.\nEnvironment: Ice\nThe room looks empty...\nThere is nothing of value nearby."
        );

        room.add_monster(Monster::new("Rat", 5, 1, 1, Element::Neutral).unwrap());
        room.add_monster(Monster::new("Bat", 5, 1, 1, Element::Neutral).unwrap());
        room.add_item(sword(1.0));
        let text = room.description();
        assert!(text.contains("WARNING! ENEMIES IN SIGHT: Rat, Bat"));
        assert!(text.contains("In the room you found: Sword"));
    }

    #[test]
    fn test_enter_announces_enemies() {
        let mut room = room();
        assert!(room.enter("Conan").ends_with("The room seems quiet.\n"));

        room.add_monster(Monster::new("Rat", 5, 1, 1, Element::Neutral).unwrap());
        let log = room.enter("Conan");
        assert!(log.starts_with(RULE));
        assert!(log.ends_with("Conan found enemies! Prepare to fight!\n"));
    }
}
