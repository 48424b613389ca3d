//! StatModifier - Temporary stat deltas pushed by statuses and buffs

use serde::{Deserialize, Serialize};

/// Stat a modifier applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Attack,
    Speed,
}

/// What pushed a modifier, so it can be popped again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierSource {
    /// Lingering effect of the current status (Burned, Frozen)
    Status,
    /// Archer's aimed-shot bonus
    Aim,
}

/// A signed delta on one stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub source: ModifierSource,
    pub stat: Stat,
    pub delta: i32,
}

impl StatModifier {
    pub fn new(source: ModifierSource, stat: Stat, delta: i32) -> Self {
        StatModifier { source, stat, delta }
    }
}

/// Sum of all deltas for `stat`
pub(crate) fn total_delta(modifiers: &[StatModifier], stat: Stat) -> i32 {
    modifiers
        .iter()
        .filter(|m| m.stat == stat)
        .map(|m| m.delta)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_delta_filters_by_stat() {
        let mods = [
            StatModifier::new(ModifierSource::Status, Stat::Attack, -5),
            StatModifier::new(ModifierSource::Aim, Stat::Attack, 8),
            StatModifier::new(ModifierSource::Status, Stat::Speed, -3),
        ];
        assert_eq!(total_delta(&mods, Stat::Attack), 3);
        assert_eq!(total_delta(&mods, Stat::Speed), -3);
    }
}
