//! Weapons - Melee and ranged attack strategies

use super::ItemInfo;
use crate::combat::{CombatContext, Combatant, Hit};
use crate::error::{CombatError, Resource};
use crate::stat_block::StatBlock;
use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Default weight of a weapon when none is given
pub const DEFAULT_WEAPON_WEIGHT: f64 = 1.0;

/// Which of a weapon's attacks to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    Normal,
    Heavy,
}

/// A melee weapon
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    info: ItemInfo,
    base_damage: i32,
    element: Element,
}

impl Weapon {
    pub fn new(name: &str, base_damage: i32) -> Result<Self, CombatError> {
        if base_damage <= 0 {
            return Err(CombatError::invalid(
                "base_damage",
                format!("must be greater than 0, got {}", base_damage),
            ));
        }
        Ok(Weapon {
            info: ItemInfo::new(name, DEFAULT_WEAPON_WEIGHT)?,
            base_damage,
            element: Element::Neutral,
        })
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Result<Self, CombatError> {
        self.info.set_weight(weight)?;
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info.set_description(description);
        self
    }

    pub fn info(&self) -> &ItemInfo {
        &self.info
    }

    pub fn base_damage(&self) -> i32 {
        self.base_damage
    }

    pub fn element(&self) -> Element {
        self.element
    }

    /// Damage the given attack would deal before the target's defenses
    pub fn damage(&self, kind: AttackKind, user: &StatBlock, ctx: &CombatContext<'_>) -> i32 {
        let base = self.base_damage.saturating_add(user.attack());
        match kind {
            AttackKind::Normal => base,
            AttackKind::Heavy => (base as f64 * ctx.rules.combat.heavy_attack_multiplier) as i32,
        }
    }

    /// base_damage + user attack, at the weapon's element
    pub fn attack(
        &self,
        user: &StatBlock,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Hit {
        self.use_attack(AttackKind::Normal, user, target, ctx)
    }

    /// Normal attack times the heavy multiplier
    pub fn heavy_attack(
        &self,
        user: &StatBlock,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Hit {
        self.use_attack(AttackKind::Heavy, user, target, ctx)
    }

    pub fn use_attack(
        &self,
        kind: AttackKind,
        user: &StatBlock,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Hit {
        let damage = self.damage(kind, user, ctx);
        target.damage_received(damage, self.element, ctx)
    }
}

/// A weapon that spends ammunition on every attack
#[derive(Debug, Clone, PartialEq)]
pub struct RangedWeapon {
    weapon: Weapon,
    ammo_required: u32,
}

impl RangedWeapon {
    pub fn new(name: &str, base_damage: i32, ammo_required: u32) -> Result<Self, CombatError> {
        if ammo_required == 0 {
            return Err(CombatError::invalid("ammo_required", "must be greater than 0"));
        }
        Ok(RangedWeapon {
            weapon: Weapon::new(name, base_damage)?,
            ammo_required,
        })
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.weapon = self.weapon.with_element(element);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Result<Self, CombatError> {
        self.weapon = self.weapon.with_weight(weight)?;
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.weapon = self.weapon.with_description(description);
        self
    }

    pub fn info(&self) -> &ItemInfo {
        self.weapon.info()
    }

    pub fn base_damage(&self) -> i32 {
        self.weapon.base_damage()
    }

    pub fn element(&self) -> Element {
        self.weapon.element()
    }

    pub fn ammo_required(&self) -> u32 {
        self.ammo_required
    }

    /// Whether `ammo` covers one shot
    pub fn check_ammo(&self, ammo: u32) -> Result<(), CombatError> {
        if ammo < self.ammo_required {
            return Err(CombatError::InsufficientResource {
                resource: Resource::Ammo,
                required: self.ammo_required,
                available: ammo,
            });
        }
        Ok(())
    }

    /// Spend ammunition, then attack like the underlying weapon
    ///
    /// Fails without touching `ammo` or the target when there is not enough.
    pub fn fire(
        &self,
        kind: AttackKind,
        user: &StatBlock,
        ammo: &mut u32,
        target: &mut dyn Combatant,
        ctx: &mut CombatContext<'_>,
    ) -> Result<Hit, CombatError> {
        self.check_ammo(*ammo)?;
        *ammo -= self.ammo_required;
        Ok(self.weapon.use_attack(kind, user, target, ctx))
    }
}
