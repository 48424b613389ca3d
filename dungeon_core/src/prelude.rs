//! Prelude module for convenient imports
//!
//! ```rust
//! use dungeon_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::StatBlock;
pub use crate::types::{Describe, Element};

// Combat
pub use crate::combat::{CombatContext, Combatant, Hit};
pub use crate::dice::{Dice, LoadedDice, RngDice};
pub use crate::error::CombatError;

// Entities
pub use crate::hero::{Archer, Archetype, Hero, Mage, Warrior};
pub use crate::monster::Monster;
pub use crate::status::StatusEffect;

// Items
pub use crate::item::{Grimoire, Inventory, Item, RangedWeapon, Weapon};

// Battle
pub use crate::battle::{Battle, CombatOutcome, TurnReport};

// Config
pub use crate::config::GameConstants;
