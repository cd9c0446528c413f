//! AI decision functions.
//!
//! A policy only picks the next [`Action`]; carrying it out is the turn engine's job.
//! Both policies draw one d10 when they fall through to the weighted table.

use serde::{Deserialize, Serialize};

use crate::combatant::Combatant;
use crate::dice::Dice;
use crate::types::Action;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiPolicy {
    /// Guards when hurt, presses a weakened opponent, otherwise 50/40/10
    /// attack/guard/taunt.
    #[default]
    Threshold,
    /// Ignores health entirely: 60/20/20 attack/guard/taunt.
    FlatWeighted,
}

impl AiPolicy {
    pub fn choose_action(
        self,
        me: &Combatant,
        opponent: &Combatant,
        dice: &mut impl Dice,
    ) -> Action {
        match self {
            Self::Threshold => threshold_action(me, opponent, dice),
            Self::FlatWeighted => flat_weighted_action(dice.roll_d10()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::FlatWeighted => "flat-weighted",
        }
    }
}

/// Health strictly below 30% of maximum.
fn is_critical(combatant: &Combatant) -> bool {
    u64::from(combatant.health()) * 10 < u64::from(combatant.max_health()) * 3
}

fn threshold_action(me: &Combatant, opponent: &Combatant, dice: &mut impl Dice) -> Action {
    if is_critical(me) {
        return Action::Guard;
    }
    if is_critical(opponent) {
        return Action::Attack;
    }
    match dice.roll_d10() {
        0..=4 => Action::Attack,
        5..=8 => Action::Guard,
        _ => Action::Taunt,
    }
}

fn flat_weighted_action(roll: u32) -> Action {
    match roll {
        0..=5 => Action::Attack,
        6..=7 => Action::Guard,
        _ => Action::Taunt,
    }
}
