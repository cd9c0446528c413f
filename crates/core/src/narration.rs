//! One-line battle log text shared by the console and the desktop window.

use crate::types::{BattleEvent, BattleOutcome, ItemEffect, Side};

/// Display names for both sides of a battle.
#[derive(Clone, Copy, Debug)]
pub struct Names<'a> {
    pub player: &'a str,
    pub enemy: &'a str,
}

impl<'a> Names<'a> {
    pub fn new(player: &'a str, enemy: &'a str) -> Self {
        Self { player, enemy }
    }

    pub fn of(self, side: Side) -> &'a str {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }
}

pub fn describe_event(event: &BattleEvent, names: Names<'_>) -> String {
    match event {
        BattleEvent::Attacked { actor, damage, blocked, remaining_health } => {
            let target = names.of(actor.opponent());
            let guard_note = if *blocked { " through a guard" } else { "" };
            format!(
                "{} attacks {target}{guard_note} for {damage} damage \
                 ({target} has {remaining_health} HP left).",
                names.of(*actor)
            )
        }
        BattleEvent::Guarded { actor } => format!("{} raises a guard.", names.of(*actor)),
        BattleEvent::Taunted { actor, success: true, attack_loss, defense_loss } => format!(
            "{} taunts {}! Attack -{attack_loss}, defense -{defense_loss}.",
            names.of(*actor),
            names.of(actor.opponent())
        ),
        BattleEvent::Taunted { actor, success: false, .. } => {
            let target = names.of(actor.opponent());
            format!("{} taunts {target}, but it has no effect.", names.of(*actor))
        }
        BattleEvent::ItemUsed { actor, item, effect } => match effect {
            ItemEffect::Healed(amount) => {
                format!("{} drinks a {item} and recovers {amount} HP.", names.of(*actor))
            }
            ItemEffect::AttackRaised(amount) => {
                format!("{} drinks a {item}. Attack +{amount}.", names.of(*actor))
            }
            ItemEffect::Fizzled => format!("{} uses a {item}. Nothing happens.", names.of(*actor)),
        },
        BattleEvent::NoItemToUse { actor } => {
            format!("{} reaches for an item, but there are no items to use.", names.of(*actor))
        }
        BattleEvent::Abandoned { actor } => format!("{} leaves the arena.", names.of(*actor)),
        BattleEvent::Defeated { side } => format!("{} has been defeated!", names.of(*side)),
    }
}

pub fn describe_outcome(outcome: BattleOutcome, names: Names<'_>) -> String {
    match outcome {
        BattleOutcome::PlayerWon => format!("Victory! {} defeated {}.", names.player, names.enemy),
        BattleOutcome::PlayerLost => format!("Defeat. {} fell to {}.", names.player, names.enemy),
        BattleOutcome::Abandoned => "The battle was abandoned.".to_string(),
    }
}
