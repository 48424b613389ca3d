//! Game constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub archer: ArcherConstants,
    #[serde(default)]
    pub mage: MageConstants,
    #[serde(default)]
    pub inventory: InventoryConstants,
}

impl GameConstants {
    /// Reject values that would break the combat math
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.combat.heavy_attack_multiplier <= 0.0 {
            return Err(ConfigError::ValidationError(
                "combat.heavy_attack_multiplier must be positive".to_string(),
            ));
        }
        if self.archer.aim_divisor <= 0.0 {
            return Err(ConfigError::ValidationError(
                "archer.aim_divisor must be positive".to_string(),
            ));
        }
        if self.archer.default_max_ammo == 0 {
            return Err(ConfigError::ValidationError(
                "archer.default_max_ammo must be at least 1".to_string(),
            ));
        }
        if self.inventory.default_capacity <= 0.0 {
            return Err(ConfigError::ValidationError(
                "inventory.default_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Heavy attacks deal (base_damage + attack) times this
    #[serde(default = "default_heavy_multiplier")]
    pub heavy_attack_multiplier: f64,
    /// Damage of a bare-handed mage punch
    #[serde(default = "default_unarmed_damage")]
    pub unarmed_damage: i32,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            heavy_attack_multiplier: 2.0,
            unarmed_damage: 1,
        }
    }
}

fn default_heavy_multiplier() -> f64 {
    2.0
}
fn default_unarmed_damage() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcherConstants {
    /// Aiming adds attack / aim_divisor to the next shot
    #[serde(default = "default_aim_divisor")]
    pub aim_divisor: f64,
    #[serde(default = "default_max_ammo")]
    pub default_max_ammo: u32,
}

impl Default for ArcherConstants {
    fn default() -> Self {
        ArcherConstants {
            aim_divisor: 2.5,
            default_max_ammo: 10,
        }
    }
}

fn default_aim_divisor() -> f64 {
    2.5
}
fn default_max_ammo() -> u32 {
    10
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MageConstants {
    #[serde(default = "default_ancient_magic_cost")]
    pub ancient_magic_cost: u32,
    /// Ancient magic damage = attack * multiplier + bonus
    #[serde(default = "default_ancient_magic_multiplier")]
    pub ancient_magic_attack_multiplier: i32,
    #[serde(default = "default_ancient_magic_bonus")]
    pub ancient_magic_bonus: i32,
}

impl Default for MageConstants {
    fn default() -> Self {
        MageConstants {
            ancient_magic_cost: 50,
            ancient_magic_attack_multiplier: 3,
            ancient_magic_bonus: 50,
        }
    }
}

fn default_ancient_magic_cost() -> u32 {
    50
}
fn default_ancient_magic_multiplier() -> i32 {
    3
}
fn default_ancient_magic_bonus() -> i32 {
    50
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConstants {
    #[serde(default = "default_capacity")]
    pub default_capacity: f64,
}

impl Default for InventoryConstants {
    fn default() -> Self {
        InventoryConstants {
            default_capacity: 100.0,
        }
    }
}

fn default_capacity() -> f64 {
    100.0
}
