//! Error types for the combat core

use std::fmt;
use thiserror::Error;

/// A consumable resource spent by attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Ammo,
    Mana,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Ammo => f.write_str("ammunition"),
            Resource::Mana => f.write_str("mana"),
        }
    }
}

/// Errors raised by entity construction, equipment and battle turns
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
    #[error("Invalid choice: {0} (must be 1 or 2)")]
    InvalidChoice(u8),
    #[error("Action '{0}' is invalid")]
    InvalidAction(String),
    #[error("Not enough {resource}: {required} required, {available} available")]
    InsufficientResource {
        resource: Resource,
        required: u32,
        available: u32,
    },
    #[error("{0} has no weapon equipped")]
    NoWeaponEquipped(String),
    #[error("Item '{0}' not found")]
    ItemNotFound(String),
    #[error("Inventory cannot hold '{0}'")]
    InventoryFull(String),
    #[error("The battle is already over")]
    BattleOver,
}

impl CombatError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CombatError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_values() {
        assert_eq!(
            CombatError::InvalidChoice(7).to_string(),
            "Invalid choice: 7 (must be 1 or 2)"
        );
        assert_eq!(
            CombatError::InvalidAction("9".to_string()).to_string(),
            "Action '9' is invalid"
        );
        let err = CombatError::InsufficientResource {
            resource: Resource::Ammo,
            required: 2,
            available: 1,
        };
        assert_eq!(err.to_string(), "Not enough ammunition: 2 required, 1 available");
    }
}
