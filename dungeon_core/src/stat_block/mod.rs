//! StatBlock - Shared vital stats of every combatant

mod modifier;

pub use modifier::{ModifierSource, Stat, StatModifier};

use crate::error::CombatError;
use crate::status::StatusEffect;
use crate::types::{normalize_name, Element};
use modifier::total_delta;
use serde::Serialize;

/// Core stats of a hero or monster
///
/// Life, attack and speed never fail on out-of-range writes: they clamp to
/// the nearest valid bound so extreme modifiers cannot crash the combat math.
#[derive(Debug, Clone, Serialize)]
pub struct StatBlock {
    name: String,
    max_life: i32,
    current_life: i32,
    attack: i32,
    speed: i32,
    element: Element,
    status: StatusEffect,
    modifiers: Vec<StatModifier>,
}

impl StatBlock {
    /// Create a stat block, validating the name and max life
    pub fn new(
        name: &str,
        max_life: i32,
        current_life: i32,
        attack: i32,
        speed: i32,
    ) -> Result<Self, CombatError> {
        let name = normalize_name("name", name)?;
        if max_life <= 0 {
            return Err(CombatError::invalid(
                "max_life",
                format!("must be greater than 0, got {}", max_life),
            ));
        }
        let mut stats = StatBlock {
            name,
            max_life,
            current_life: 0,
            attack: 0,
            speed: 0,
            element: Element::Neutral,
            status: StatusEffect::neutral(),
            modifiers: Vec::new(),
        };
        stats.set_current_life(current_life);
        stats.set_attack(attack);
        stats.set_speed(speed);
        Ok(stats)
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    // === Identity ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn set_element(&mut self, element: Element) {
        self.element = element;
    }

    // === Life ===

    pub fn max_life(&self) -> i32 {
        self.max_life
    }

    /// Change max life; current life is re-clamped to the new bound
    pub fn set_max_life(&mut self, value: i32) -> Result<(), CombatError> {
        if value <= 0 {
            return Err(CombatError::invalid(
                "max_life",
                format!("must be greater than 0, got {}", value),
            ));
        }
        self.max_life = value;
        self.current_life = self.current_life.min(value);
        Ok(())
    }

    pub fn current_life(&self) -> i32 {
        self.current_life
    }

    pub fn set_current_life(&mut self, value: i32) {
        self.current_life = value.clamp(0, self.max_life);
    }

    /// Subtract `amount` from life, returning how much life was actually lost
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.current_life;
        self.set_current_life(before.saturating_sub(amount.max(0)));
        before - self.current_life
    }

    pub fn heal(&mut self, amount: i32) {
        self.set_current_life(self.current_life.saturating_add(amount.max(0)));
    }

    pub fn is_alive(&self) -> bool {
        self.current_life > 0
    }

    // === Attack / Speed ===

    /// Effective attack (base plus modifiers, never negative)
    pub fn attack(&self) -> i32 {
        self.attack.saturating_add(total_delta(&self.modifiers, Stat::Attack)).max(0)
    }

    pub fn base_attack(&self) -> i32 {
        self.attack
    }

    pub fn set_attack(&mut self, value: i32) {
        self.attack = value.max(0);
    }

    /// Effective speed (base plus modifiers, never negative)
    pub fn speed(&self) -> i32 {
        self.speed.saturating_add(total_delta(&self.modifiers, Stat::Speed)).max(0)
    }

    pub fn base_speed(&self) -> i32 {
        self.speed
    }

    pub fn set_speed(&mut self, value: i32) {
        self.speed = value.max(0);
    }

    // === Modifiers ===

    pub fn modifiers(&self) -> &[StatModifier] {
        &self.modifiers
    }

    pub fn push_modifier(&mut self, modifier: StatModifier) {
        self.modifiers.push(modifier);
    }

    /// Remove every modifier pushed by `source`
    pub fn pop_modifiers(&mut self, source: ModifierSource) {
        self.modifiers.retain(|m| m.source != source);
    }

    // === Status ===

    pub fn status(&self) -> &StatusEffect {
        &self.status
    }

    /// Replace the current status, reverting the lingering modifier of the old one
    pub fn set_status(&mut self, status: StatusEffect) {
        self.pop_modifiers(ModifierSource::Status);
        self.status = status;
    }

    /// Expire the current status and return to Neutral
    pub fn clear_status(&mut self) {
        self.set_status(StatusEffect::neutral());
    }

    /// Detach the status while it is being applied to this block's owner
    pub(crate) fn take_status(&mut self) -> StatusEffect {
        std::mem::replace(&mut self.status, StatusEffect::neutral())
    }

    /// Reattach a status detached by `take_status`, keeping its modifiers
    pub(crate) fn restore_status(&mut self, status: StatusEffect) {
        self.status = status;
    }
}
