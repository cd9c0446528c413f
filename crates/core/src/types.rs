use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// One decision taken at the start of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Attack,
    Guard,
    Taunt,
    /// Inventory slot, zero based.
    UseItem(usize),
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    PlayerWon,
    PlayerLost,
    Abandoned,
}

impl BattleOutcome {
    /// Win/loss verdict for the history log. Abandoned battles have none.
    pub fn verdict(self) -> Option<Verdict> {
        match self {
            Self::PlayerWon => Some(Verdict::Win),
            Self::PlayerLost => Some(Verdict::Loss),
            Self::Abandoned => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "WIN")]
    Win,
    #[serde(rename = "LOSS")]
    Loss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    PlayerTurn,
    EnemyTurn,
    Finished(BattleOutcome),
}

impl TurnPhase {
    pub fn acting_side(self) -> Option<Side> {
        match self {
            Self::PlayerTurn => Some(Side::Player),
            Self::EnemyTurn => Some(Side::Enemy),
            Self::Finished(_) => None,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    Healed(u32),
    AttackRaised(u32),
    Fizzled,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    Attacked { actor: Side, damage: u32, blocked: bool, remaining_health: u32 },
    Guarded { actor: Side },
    Taunted { actor: Side, success: bool, attack_loss: u32, defense_loss: u32 },
    ItemUsed { actor: Side, item: String, effect: ItemEffect },
    NoItemToUse { actor: Side },
    Abandoned { actor: Side },
    Defeated { side: Side },
}
