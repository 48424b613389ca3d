//! dungeon_core - Combat core for a turn-based dungeon crawler
//!
//! This library provides:
//! - Element: The elemental advantage cycle and damage multipliers
//! - StatBlock: Clamped vital stats with status-driven modifiers
//! - Items: Weapons, ranged weapons, grimoires and a weight-limited inventory
//! - Status effects: Poison, burn, freeze and stun resolved once per round
//! - Heroes and monsters: Warrior, Archer and Mage archetypes plus monsters with loot
//! - Battle: The round orchestrator producing structured turn reports

pub mod battle;
pub mod combat;
pub mod config;
pub mod dice;
pub mod error;
pub mod hero;
pub mod item;
pub mod monster;
pub mod prelude;
pub mod room;
pub mod stat_block;
pub mod status;
pub mod types;

// Re-export core types for convenience
pub use battle::{Battle, CombatOutcome, Participant, ParticipantStatus, TurnReport};
pub use combat::{CombatContext, Combatant, Hit, Mitigation};
pub use config::{ConfigError, GameConstants};
pub use dice::{Dice, LoadedDice, RngDice};
pub use error::{CombatError, Resource};
pub use hero::{
    ActionEntry, ActionMap, Archer, Archetype, EquipOutcome, Hero, HeroAction, HeroCore, Mage,
    Warrior,
};
pub use item::{
    AttackKind, Grimoire, Inventory, InventorySummary, Item, ItemId, ItemInfo, ItemSummary,
    RangedWeapon, Weapon,
};
pub use monster::Monster;
pub use room::Room;
pub use stat_block::{ModifierSource, Stat, StatBlock, StatModifier};
pub use status::{resolve_status, StatusEffect, StatusKind, StatusTick};
pub use types::{Describe, Element};
