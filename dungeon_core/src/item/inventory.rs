//! Inventory - Weight-limited item storage

use super::{Item, ItemId};
use crate::config::{GameConstants, InventoryConstants};
use crate::error::CombatError;
use serde::Serialize;
use std::fmt;

/// A bag of items bounded by total weight
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    capacity: f64,
    items: Vec<Item>,
}

/// Read-only snapshot of an inventory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub capacity: f64,
    pub current_weight: f64,
    pub available_capacity: f64,
    pub item_count: usize,
    pub items: Vec<ItemSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub name: String,
    pub weight: f64,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory {
            capacity: InventoryConstants::default().default_capacity,
            items: Vec::new(),
        }
    }
}

impl Inventory {
    pub fn new(capacity: f64) -> Result<Self, CombatError> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(CombatError::invalid(
                "capacity",
                format!("must be positive, got {}", capacity),
            ));
        }
        Ok(Inventory {
            capacity,
            items: Vec::new(),
        })
    }

    /// Inventory with the configured default capacity
    pub fn from_rules(rules: &GameConstants) -> Result<Self, CombatError> {
        Self::new(rules.inventory.default_capacity)
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Independent copy of the stored items
    pub fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn current_weight(&self) -> f64 {
        self.items.iter().map(Item::weight).sum()
    }

    pub fn available_capacity(&self) -> f64 {
        self.capacity - self.current_weight()
    }

    pub fn can_add(&self, item: &Item) -> bool {
        item.weight() <= self.available_capacity()
    }

    /// Store `item` if it fits, handing it back otherwise
    pub fn add(&mut self, item: Item) -> Result<(), Item> {
        if !self.can_add(&item) {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Reinsert an item that was removed a moment ago, skipping the weight check
    pub(crate) fn put_back(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the item with identity `id`
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// First item whose name matches, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        let wanted = name.trim().to_lowercase();
        self.items.iter().find(|i| i.name().to_lowercase() == wanted)
    }

    pub fn remove_by_name(&mut self, name: &str) -> Option<Item> {
        let id = self.find_by_name(name)?.id();
        self.remove(id)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            capacity: self.capacity,
            current_weight: self.current_weight(),
            available_capacity: self.available_capacity(),
            item_count: self.items.len(),
            items: self
                .items
                .iter()
                .map(|i| ItemSummary {
                    name: i.name().to_string(),
                    weight: i.weight(),
                })
                .collect(),
        }
    }

    /// Human-readable listing, one entry per line
    pub fn lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec!["Empty inventory".to_string()];
        }
        let mut lines = vec![
            format!("Capacity: {:.1}/{}", self.current_weight(), self.capacity),
            "Items:".to_string(),
        ];
        for (index, item) in self.items.iter().enumerate() {
            lines.push(format!(
                "  {}. {} (weight: {})",
                index + 1,
                item.name(),
                item.weight()
            ));
        }
        lines
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
