//! Damage resolution - Apply elemental damage to a StatBlock

use super::result::{Hit, Mitigation};
use crate::stat_block::StatBlock;
use crate::types::Element;
use tracing::debug;

/// Raw damage scaled by the element matchup
pub fn elemental_damage(raw: i32, attack_element: Element, defender_element: Element) -> f64 {
    raw as f64 * attack_element.multiplier(defender_element)
}

/// Apply an unmitigated hit
pub fn resolve_hit(defender: &mut StatBlock, raw: i32, element: Element) -> Hit {
    resolve_reduced(defender, raw, element, 0)
}

/// Apply a hit after subtracting a flat `reduction` (never below zero)
pub fn resolve_reduced(defender: &mut StatBlock, raw: i32, element: Element, reduction: i32) -> Hit {
    let multiplier = element.multiplier(defender.element());
    let scaled = elemental_damage(raw, element, defender.element());
    let amount = ((scaled - reduction as f64) as i32).max(0);
    let dealt = defender.take_damage(amount);

    debug!(
        target_name = defender.name(),
        raw,
        %element,
        multiplier,
        reduction,
        dealt,
        life = defender.current_life(),
        "damage received"
    );

    Hit {
        raw,
        element,
        multiplier,
        dealt,
        mitigation: if reduction > 0 {
            Mitigation::Reduced(reduction)
        } else {
            Mitigation::None
        },
    }
}

/// Record a hit the defender avoided entirely
pub fn resolve_blocked(defender: &StatBlock, raw: i32, element: Element, mitigation: Mitigation) -> Hit {
    let multiplier = element.multiplier(defender.element());
    debug!(target_name = defender.name(), raw, %element, ?mitigation, "damage avoided");
    Hit::avoided(raw, element, multiplier, mitigation)
}
