//! Hit - Outcome of a single damage reception

use crate::types::Element;
use serde::{Deserialize, Serialize};

/// How the defender softened or avoided a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mitigation {
    None,
    /// Flat reduction from shield and armor
    Reduced(i32),
    /// Warrior's full block
    Blocked,
    /// Archer's evasion
    Dodged,
}

/// Result of applying damage to an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Damage before the element multiplier
    pub raw: i32,
    pub element: Element,
    pub multiplier: f64,
    /// Life actually removed from the defender
    pub dealt: i32,
    pub mitigation: Mitigation,
}

impl Hit {
    /// A hit that was avoided entirely
    pub fn avoided(raw: i32, element: Element, multiplier: f64, mitigation: Mitigation) -> Self {
        Hit {
            raw,
            element,
            multiplier,
            dealt: 0,
            mitigation,
        }
    }

    pub fn landed(&self) -> bool {
        !matches!(self.mitigation, Mitigation::Blocked | Mitigation::Dodged)
    }

    /// Short human-readable form for turn logs
    pub fn summary(&self) -> String {
        match self.mitigation {
            Mitigation::Blocked => "blocked".to_string(),
            Mitigation::Dodged => "dodged".to_string(),
            Mitigation::Reduced(amount) if amount > 0 => {
                format!("{} {} damage ({} absorbed)", self.dealt, self.element, amount)
            }
            _ => {
                let mut text = format!("{} {} damage", self.dealt, self.element);
                if self.multiplier > 1.0 {
                    text.push_str(", super effective");
                } else if self.multiplier < 1.0 {
                    text.push_str(", resisted");
                }
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_variants() {
        let hit = Hit {
            raw: 10,
            element: Element::Fire,
            multiplier: 2.0,
            dealt: 20,
            mitigation: Mitigation::None,
        };
        assert_eq!(hit.summary(), "20 Fire damage, super effective");
        assert!(hit.landed());

        let blocked = Hit::avoided(10, Element::Ice, 1.0, Mitigation::Blocked);
        assert_eq!(blocked.summary(), "blocked");
        assert!(!blocked.landed());

        let reduced = Hit {
            raw: 100,
            element: Element::Neutral,
            multiplier: 1.0,
            dealt: 80,
            mitigation: Mitigation::Reduced(20),
        };
        assert!(reduced.summary().contains("20 absorbed"));
    }
}
