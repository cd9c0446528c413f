//! Runs one battle from first turn to a terminal state and records the result.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::cancel::CancelToken;
use crate::combatant::Combatant;
use crate::controller::ActionSource;
use crate::dice::Dice;
use crate::engine::TurnEngine;
use crate::store::{ArenaStore, BattleRecord, StoreError};
use crate::types::{BattleEvent, BattleOutcome, Side, Verdict};

#[derive(Debug)]
pub struct BattleReport {
    pub player: String,
    pub opponent: String,
    pub outcome: BattleOutcome,
    pub rounds: u32,
    pub events: Vec<BattleEvent>,
    /// Store failures hit while recording. The outcome stands regardless.
    pub store_errors: Vec<StoreError>,
}

pub struct BattleSession<'s, S: ArenaStore + ?Sized> {
    store: &'s mut S,
    cancel: CancelToken,
    turn_delay: Duration,
}

impl<'s, S: ArenaStore + ?Sized> BattleSession<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self { store, cancel: CancelToken::new(), turn_delay: Duration::ZERO }
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Cosmetic pause between turns. Zero disables it.
    pub fn with_turn_delay(mut self, turn_delay: Duration) -> Self {
        self.turn_delay = turn_delay;
        self
    }

    pub fn run(
        &mut self,
        player: Combatant,
        enemy: Combatant,
        player_source: &mut dyn ActionSource,
        enemy_source: &mut dyn ActionSource,
        dice: &mut impl Dice,
    ) -> BattleReport {
        let player_name = player.name().to_string();
        let opponent_name = enemy.name().to_string();
        tracing::info!(player = %player_name, opponent = %opponent_name, "battle started");

        let mut engine = TurnEngine::new(player, enemy);
        loop {
            if self.cancel.is_cancelled() {
                engine.abandon();
            }
            let Some(view) = engine.view() else {
                break;
            };
            let action = match view.side {
                Side::Player => player_source.next_action(&view),
                Side::Enemy => enemy_source.next_action(&view),
            };
            if let Err(error) = engine.act(action, dice) {
                tracing::warn!(%error, "turn rejected");
                break;
            }
            if !engine.phase().is_finished() && !self.turn_delay.is_zero() {
                thread::sleep(self.turn_delay);
            }
        }

        let outcome = engine.outcome().unwrap_or(BattleOutcome::Abandoned);
        tracing::info!(?outcome, rounds = engine.round(), "battle finished");
        let store_errors = record_outcome(&mut *self.store, &player_name, &opponent_name, outcome);

        BattleReport {
            player: player_name,
            opponent: opponent_name,
            outcome,
            rounds: engine.round(),
            events: engine.events().to_vec(),
            store_errors,
        }
    }
}

/// Persist a finished battle: a win bumps the player's score, wins and losses
/// append one history record, abandoned battles write nothing.
///
/// Failures are logged and handed back to the caller, never raised.
pub fn record_outcome<S: ArenaStore + ?Sized>(
    store: &mut S,
    player: &str,
    opponent: &str,
    outcome: BattleOutcome,
) -> Vec<StoreError> {
    let Some(verdict) = outcome.verdict() else {
        tracing::info!(player, opponent, "battle abandoned, nothing recorded");
        return Vec::new();
    };

    let mut errors = Vec::new();

    if verdict == Verdict::Win {
        let bumped =
            store.score(player).and_then(|score| store.set_score(player, score.saturating_add(1)));
        if let Err(error) = bumped {
            tracing::warn!(player, %error, "failed to update score");
            errors.push(error);
        }
    }

    let record = BattleRecord {
        player: player.to_string(),
        opponent: opponent.to_string(),
        outcome: verdict,
        timestamp_unix_ms: now_unix_ms(),
    };
    if let Err(error) = store.record_battle(&record) {
        tracing::warn!(player, opponent, %error, "failed to record battle");
        errors.push(error);
    }

    errors
}

fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
