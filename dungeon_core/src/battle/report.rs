//! TurnReport - What happened during one round of a battle

use serde::{Deserialize, Serialize};

/// State of the fight after a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CombatOutcome {
    Ongoing,
    /// Hero alive, monster dead; carries the monster's drops
    Victory { loot: Vec<String> },
    Defeat,
}

impl CombatOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, CombatOutcome::Ongoing)
    }

    /// Drops won, empty unless this is a victory
    pub fn loot(&self) -> &[String] {
        match self {
            CombatOutcome::Victory { loot } => loot,
            _ => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CombatOutcome::Ongoing => "ongoing",
            CombatOutcome::Victory { .. } => "victory",
            CombatOutcome::Defeat => "defeat",
        }
    }
}

/// Snapshot of one participant at the end of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStatus {
    pub name: String,
    pub status: String,
    pub life: i32,
    pub max_life: i32,
}

/// Result of `Battle::execute_turn`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 1-based round number
    pub turn: u32,
    /// Status and action lines in the order they happened
    pub log: Vec<String>,
    /// Participants in turn order
    pub statuses: Vec<ParticipantStatus>,
    pub combat_over: bool,
    pub outcome: CombatOutcome,
}

impl TurnReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
