//! Turn sequencing for one battle.
//! The engine owns both combatants, applies one action per call and reports
//! the phase that follows. Callers decide where actions come from.

use thiserror::Error;

use crate::combatant::Combatant;
use crate::damage::resolve_damage;
use crate::dice::Dice;
use crate::items::ItemCategory;
use crate::types::{Action, BattleEvent, BattleOutcome, ItemEffect, Side, TurnPhase};

/// A roll at or above this value on a d10 lands a taunt (70%).
const TAUNT_SUCCESS_MIN_ROLL: u32 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("battle already finished: {0:?}")]
    BattleOver(BattleOutcome),
}

/// Read-only snapshot handed to whoever decides the next action.
#[derive(Clone, Copy, Debug)]
pub struct BattleView<'a> {
    pub side: Side,
    pub me: &'a Combatant,
    pub opponent: &'a Combatant,
    pub round: u32,
    /// Everything that happened so far, oldest first.
    pub events: &'a [BattleEvent],
}

pub struct TurnEngine {
    player: Combatant,
    enemy: Combatant,
    phase: TurnPhase,
    round: u32,
    events: Vec<BattleEvent>,
}

impl TurnEngine {
    pub fn new(player: Combatant, enemy: Combatant) -> Self {
        let mut engine =
            Self { player, enemy, phase: TurnPhase::PlayerTurn, round: 0, events: Vec::new() };
        engine.enter_turn(Side::Player);
        engine
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            TurnPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// View for the side whose turn it is, or `None` once the battle is over.
    pub fn view(&self) -> Option<BattleView<'_>> {
        let side = self.phase.acting_side()?;
        Some(BattleView {
            side,
            me: self.combatant(side),
            opponent: self.combatant(side.opponent()),
            round: self.round,
            events: &self.events,
        })
    }

    /// Carry out `action` for the side whose turn it is and advance the phase.
    pub fn act(&mut self, action: Action, dice: &mut impl Dice) -> Result<TurnPhase, EngineError> {
        let actor = match self.phase {
            TurnPhase::Finished(outcome) => return Err(EngineError::BattleOver(outcome)),
            TurnPhase::PlayerTurn => Side::Player,
            TurnPhase::EnemyTurn => Side::Enemy,
        };

        match action {
            Action::Attack => self.attack(actor),
            Action::Guard => self.guard(actor),
            Action::Taunt => self.taunt(actor, dice),
            Action::UseItem(slot) => self.use_item(actor, slot),
            Action::Exit => {
                self.events.push(BattleEvent::Abandoned { actor });
                self.phase = TurnPhase::Finished(BattleOutcome::Abandoned);
                return Ok(self.phase);
            }
        }

        let defender = actor.opponent();
        if !self.combatant(defender).is_alive() {
            self.events.push(BattleEvent::Defeated { side: defender });
            self.phase = TurnPhase::Finished(match actor {
                Side::Player => BattleOutcome::PlayerWon,
                Side::Enemy => BattleOutcome::PlayerLost,
            });
            return Ok(self.phase);
        }

        self.enter_turn(defender);
        Ok(self.phase)
    }

    /// End an unfinished battle without a winner. Only the player can walk
    /// away, so the event names the player even during the enemy's turn.
    pub fn abandon(&mut self) {
        if !self.phase.is_finished() {
            self.events.push(BattleEvent::Abandoned { actor: Side::Player });
            self.phase = TurnPhase::Finished(BattleOutcome::Abandoned);
        }
    }

    fn enter_turn(&mut self, side: Side) {
        // A guard only covers the opponent's turn that follows it.
        self.combatant_mut(side).set_blocking(false);
        self.phase = match side {
            Side::Player => {
                self.round += 1;
                TurnPhase::PlayerTurn
            }
            Side::Enemy => TurnPhase::EnemyTurn,
        };
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    fn pair_mut(&mut self, actor: Side) -> (&mut Combatant, &mut Combatant) {
        match actor {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        }
    }

    fn attack(&mut self, actor: Side) {
        let (attacker, defender) = self.pair_mut(actor);
        let blocked = defender.is_blocking();
        let damage = resolve_damage(attacker.attack(), defender.defense(), blocked);
        defender.take_hit(damage);
        if blocked {
            defender.set_blocking(false);
        }
        let remaining_health = defender.health();
        tracing::debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            damage,
            blocked,
            remaining_health,
            "attack resolved"
        );
        self.events.push(BattleEvent::Attacked { actor, damage, blocked, remaining_health });
    }

    fn guard(&mut self, actor: Side) {
        let guardian = self.combatant_mut(actor);
        guardian.set_blocking(true);
        tracing::debug!(actor = guardian.name(), "guard raised");
        self.events.push(BattleEvent::Guarded { actor });
    }

    fn taunt(&mut self, actor: Side, dice: &mut impl Dice) {
        let success = dice.roll_d10() >= TAUNT_SUCCESS_MIN_ROLL;
        let (attack_loss, defense_loss) = if success {
            self.combatant_mut(actor.opponent()).apply_taunt_debuff()
        } else {
            (0, 0)
        };
        tracing::debug!(?actor, success, attack_loss, defense_loss, "taunt");
        self.events.push(BattleEvent::Taunted { actor, success, attack_loss, defense_loss });
    }

    fn use_item(&mut self, actor: Side, slot: usize) {
        let user = self.combatant_mut(actor);
        let Some(item) = user.inventory_mut().take(slot) else {
            tracing::debug!(actor = user.name(), slot, "no items to use");
            self.events.push(BattleEvent::NoItemToUse { actor });
            return;
        };

        let effect = match item.category {
            ItemCategory::Heal => ItemEffect::Healed(user.heal(item.magnitude)),
            ItemCategory::Buff => {
                user.raise_attack(item.magnitude);
                ItemEffect::AttackRaised(item.magnitude)
            }
            ItemCategory::Other => ItemEffect::Fizzled,
        };
        tracing::debug!(actor = user.name(), item = %item.name, ?effect, "item used");
        self.events.push(BattleEvent::ItemUsed { actor, item: item.name, effect });
    }
}
