//! Built-in game content: the starter kit and fallback roster.

use crate::combatant::GladiatorTemplate;
use crate::items::{Inventory, Item, ItemCategory};

pub mod keys {
    pub const HEALTH_POTION: &str = "Health Potion";
    pub const BERSERK_POTION: &str = "Berserk Potion";
}

pub const DEFAULT_PLAYER_MAX_HEALTH: u32 = 100;
pub const DEFAULT_PLAYER_ATTACK: u32 = 50;
pub const DEFAULT_PLAYER_DEFENSE: u32 = 5;

pub fn default_player(name: impl Into<String>) -> GladiatorTemplate {
    GladiatorTemplate::new(
        name,
        DEFAULT_PLAYER_MAX_HEALTH,
        DEFAULT_PLAYER_ATTACK,
        DEFAULT_PLAYER_DEFENSE,
    )
}

pub fn starter_kit() -> Inventory {
    [
        Item::new(keys::HEALTH_POTION, "Restores 20 HP", ItemCategory::Heal, 20),
        Item::new(keys::BERSERK_POTION, "Increases attack by 5", ItemCategory::Buff, 5),
    ]
    .into_iter()
    .collect()
}

/// Roster used whenever stored gladiators are missing or empty.
pub fn default_roster() -> Vec<GladiatorTemplate> {
    vec![
        GladiatorTemplate::new("Spartacus", 100, 35, 5),
        GladiatorTemplate::new("Maximus", 120, 45, 10),
        GladiatorTemplate::new("Commodus", 90, 30, 3),
    ]
}
