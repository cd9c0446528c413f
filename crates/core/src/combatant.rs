//! Fighter state shared by the human player and AI opponents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::items::Inventory;

/// Stored stat line for a gladiator. Roster entries and the player's
/// starting stats both use this shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GladiatorTemplate {
    pub name: String,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl GladiatorTemplate {
    pub fn new(name: impl Into<String>, max_health: u32, attack: u32, defense: u32) -> Self {
        Self { name: name.into(), max_health, attack, defense }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CombatantError {
    #[error("combatant name must not be empty")]
    EmptyName,
    #[error("combatant '{0}' must have positive max health")]
    NoHealth(String),
}

const MIN_ATTACK: u32 = 1;
const MIN_DEFENSE: u32 = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    health: u32,
    max_health: u32,
    attack: u32,
    defense: u32,
    blocking: bool,
    inventory: Inventory,
}

impl Combatant {
    pub fn new(
        name: impl Into<String>,
        max_health: u32,
        attack: u32,
        defense: u32,
    ) -> Result<Self, CombatantError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CombatantError::EmptyName);
        }
        if max_health == 0 {
            return Err(CombatantError::NoHealth(name));
        }
        Ok(Self {
            name,
            health: max_health,
            max_health,
            attack,
            defense,
            blocking: false,
            inventory: Inventory::new(),
        })
    }

    pub fn from_template(template: &GladiatorTemplate) -> Result<Self, CombatantError> {
        Self::new(template.name.clone(), template.max_health, template.attack, template.defense)
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    pub fn set_blocking(&mut self, blocking: bool) {
        self.blocking = blocking;
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Subtract already-resolved damage. Returns the health actually lost.
    pub fn take_hit(&mut self, damage: u32) -> u32 {
        let lost = damage.min(self.health);
        self.health -= lost;
        lost
    }

    /// Restore health up to the maximum. Returns the amount healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }

    pub fn raise_attack(&mut self, amount: u32) {
        self.attack = self.attack.saturating_add(amount);
    }

    /// Permanently cut attack and defense by a fifth (at least one point each),
    /// never below 1 attack and 0 defense. Returns `(attack_loss, defense_loss)`.
    pub fn apply_taunt_debuff(&mut self) -> (u32, u32) {
        let attack_loss = debuff_loss(self.attack, MIN_ATTACK);
        let defense_loss = debuff_loss(self.defense, MIN_DEFENSE);
        self.attack -= attack_loss;
        self.defense -= defense_loss;
        (attack_loss, defense_loss)
    }
}

/// A fifth of `value`, rounded down but never below one point, and never
/// taking the stat under `floor`. Plain truncation would let a taunt on a
/// stat below 5 succeed without changing it, so the one-point minimum keeps a
/// successful taunt a strict reduction.
fn debuff_loss(value: u32, floor: u32) -> u32 {
    let headroom = value.saturating_sub(floor);
    (value / 5).max(1).min(headroom)
}
