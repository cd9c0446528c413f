pub mod cancel;
pub mod combatant;
pub mod config;
pub mod content;
pub mod controller;
pub mod damage;
pub mod dice;
pub mod engine;
pub mod items;
pub mod narration;
pub mod player_name;
pub mod policy;
pub mod roster;
pub mod seed;
pub mod session;
pub mod store;
pub mod types;

pub use cancel::CancelToken;
pub use combatant::{Combatant, CombatantError, GladiatorTemplate};
pub use config::{ArenaConfig, ConfigError, PlayerStats};
pub use controller::{ActionSource, PolicyController, ScriptedActions};
pub use damage::resolve_damage;
pub use dice::{Dice, ScriptedDice};
pub use engine::{BattleView, EngineError, TurnEngine};
pub use items::{Inventory, Item, ItemCategory};
pub use narration::{Names, describe_event, describe_outcome};
pub use player_name::{NameError, validate_name};
pub use policy::AiPolicy;
pub use roster::pick_opponent;
pub use seed::SeedChoice;
pub use session::{BattleReport, BattleSession, record_outcome};
pub use store::{ArenaStore, BattleRecord, FileStore, MemoryStore, StoreError};
pub use types::*;
