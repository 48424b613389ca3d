//! Core types shared across the combat model

use crate::error::CombatError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier applied when the attacking element has the advantage
pub const ADVANTAGE_MULTIPLIER: f64 = 2.0;
/// Multiplier applied when the defending element has the advantage
pub const DISADVANTAGE_MULTIPLIER: f64 = 0.5;

/// Elemental affinity of entities, weapons and rooms
///
/// The four active elements form the advantage cycle
/// Poison -> Lightning -> Ice -> Fire -> Poison.
/// Neutral sits outside the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Poison,
    #[default]
    Neutral,
}

impl Element {
    /// Get all elements
    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Ice,
            Element::Lightning,
            Element::Poison,
            Element::Neutral,
        ]
    }

    /// The element this one has the advantage over, if any
    pub fn successor(self) -> Option<Element> {
        match self {
            Element::Poison => Some(Element::Lightning),
            Element::Lightning => Some(Element::Ice),
            Element::Ice => Some(Element::Fire),
            Element::Fire => Some(Element::Poison),
            Element::Neutral => None,
        }
    }

    /// Check whether `self` directly precedes `other` in the cycle
    pub fn has_advantage_over(self, other: Element) -> bool {
        if other == Element::Neutral {
            return false;
        }
        self.successor() == Some(other)
    }

    /// Damage multiplier for an attack of element `self` against `defender`
    pub fn multiplier(self, defender: Element) -> f64 {
        if self.has_advantage_over(defender) {
            ADVANTAGE_MULTIPLIER
        } else if defender.has_advantage_over(self) {
            DISADVANTAGE_MULTIPLIER
        } else {
            1.0
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Ice => "Ice",
            Element::Lightning => "Lightning",
            Element::Poison => "Poison",
            Element::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything with a player-facing description (items, monsters, rooms)
pub trait Describe {
    fn description(&self) -> String;
}

/// Trim, validate and title-case a display name
pub(crate) fn normalize_name(field: &'static str, raw: &str) -> Result<String, CombatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CombatError::invalid(field, "cannot be empty"));
    }
    Ok(title_case(trimmed))
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advantage_cycle() {
        assert!(Element::Poison.has_advantage_over(Element::Lightning));
        assert!(Element::Lightning.has_advantage_over(Element::Ice));
        assert!(Element::Ice.has_advantage_over(Element::Fire));
        assert!(Element::Fire.has_advantage_over(Element::Poison));

        assert!(!Element::Lightning.has_advantage_over(Element::Poison));
        assert!(!Element::Fire.has_advantage_over(Element::Ice));
        assert!(!Element::Fire.has_advantage_over(Element::Lightning));
    }

    #[test]
    fn test_neutral_never_has_advantage() {
        for &e in Element::all() {
            assert!(!Element::Neutral.has_advantage_over(e));
            assert!(!e.has_advantage_over(Element::Neutral));
        }
    }

    #[test]
    fn test_multiplier_values() {
        assert!((Element::Fire.multiplier(Element::Poison) - 2.0).abs() < f64::EPSILON);
        assert!((Element::Poison.multiplier(Element::Fire) - 0.5).abs() < f64::EPSILON);
        // Opposite sides of the ring are even
        assert!((Element::Fire.multiplier(Element::Lightning) - 1.0).abs() < f64::EPSILON);
        assert!((Element::Ice.multiplier(Element::Ice) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_title_case_names() {
        assert_eq!(normalize_name("name", "  errant knight ").unwrap(), "Errant Knight");
        assert_eq!(normalize_name("name", "FIRE dragon").unwrap(), "Fire Dragon");
        assert_eq!(normalize_name("name", "o'neil").unwrap(), "O'Neil");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            normalize_name("name", "   "),
            Err(CombatError::InvalidArgument { field: "name", .. })
        ));
    }

    fn any_element() -> impl Strategy<Value = Element> {
        prop::sample::select(Element::all().to_vec())
    }

    proptest! {
        #[test]
        fn prop_cycle_pairs_are_reciprocal(a in any_element(), b in any_element()) {
            if a.has_advantage_over(b) {
                let product = a.multiplier(b) * b.multiplier(a);
                prop_assert!((product - 1.0).abs() < f64::EPSILON);
            }
        }

        #[test]
        fn prop_neutral_is_even(e in any_element()) {
            prop_assert!((Element::Neutral.multiplier(e) - 1.0).abs() < f64::EPSILON);
            prop_assert!((e.multiplier(Element::Neutral) - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn prop_multiplier_is_one_of_three(a in any_element(), b in any_element()) {
            let m = a.multiplier(b);
            prop_assert!(m == 2.0 || m == 0.5 || m == 1.0);
        }
    }
}
