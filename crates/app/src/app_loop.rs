use std::time::Duration;

use arena_core::content::starter_kit;
use arena_core::seed::derive_seed;
use arena_core::{
    Action, ActionSource, AiPolicy, ArenaStore, BattleOutcome, Combatant, GladiatorTemplate,
    PolicyController, TurnEngine, TurnPhase, pick_opponent, record_outcome,
};
use macroquad::prelude::KeyCode;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

const ENEMY_DICE_STREAM: u64 = 1;
const OPPONENT_PICK_STREAM: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    /// Waiting for the player's key.
    PlayerTurn,
    /// The opponent acts once `remaining` seconds have passed.
    EnemyThinking { remaining: f32 },
    Finished(BattleOutcome),
}

/// One battle on screen. The engine is stepped one action at a time; the
/// opponent's delay is purely cosmetic.
pub struct AppState {
    pub mode: AppMode,
    /// Seed the battle was started from, shown so it can be replayed.
    pub seed: u64,
    /// Persistence problems to surface in the status bar.
    pub notices: Vec<String>,
    pub rematch_requested: bool,
    engine: TurnEngine,
    dice: ChaCha8Rng,
    enemy_source: PolicyController<ChaCha8Rng>,
    enemy_delay: f32,
}

impl AppState {
    pub fn new(
        player: Combatant,
        enemy: Combatant,
        policy: AiPolicy,
        seed: u64,
        enemy_delay: Duration,
    ) -> Self {
        Self {
            mode: AppMode::PlayerTurn,
            seed,
            notices: Vec::new(),
            rematch_requested: false,
            engine: TurnEngine::new(player, enemy),
            dice: ChaCha8Rng::seed_from_u64(seed),
            enemy_source: PolicyController::new(
                policy,
                ChaCha8Rng::seed_from_u64(derive_seed(seed, ENEMY_DICE_STREAM)),
            ),
            enemy_delay: enemy_delay.as_secs_f32(),
        }
    }

    /// Pick an opponent from `roster` and set up a fresh battle with the starter kit.
    pub fn start(
        roster: &[GladiatorTemplate],
        player: &GladiatorTemplate,
        policy: AiPolicy,
        seed: u64,
        enemy_delay: Duration,
    ) -> Result<Self, String> {
        let mut pick_dice = ChaCha8Rng::seed_from_u64(derive_seed(seed, OPPONENT_PICK_STREAM));
        let template = pick_opponent(roster, &mut pick_dice)
            .ok_or_else(|| "the gladiator roster is empty".to_string())?;
        let player = Combatant::from_template(player)
            .map_err(|e| format!("invalid player: {e}"))?
            .with_inventory(starter_kit());
        let enemy = Combatant::from_template(template)
            .map_err(|e| format!("invalid roster entry: {e}"))?;
        tracing::info!(seed, opponent = enemy.name(), policy = policy.label(), "battle started");
        Ok(Self::new(player, enemy, policy, seed, enemy_delay))
    }

    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    pub fn policy(&self) -> AiPolicy {
        self.enemy_source.policy()
    }

    /// Process the keys pressed this frame and `dt` seconds of elapsed time.
    pub fn tick<S: ArenaStore + ?Sized>(
        &mut self,
        store: &mut S,
        keys_pressed: &[KeyCode],
        dt: f32,
    ) {
        match self.mode {
            AppMode::PlayerTurn => {
                if let Some(action) = self.player_action(keys_pressed) {
                    self.step(store, action);
                }
            }
            AppMode::EnemyThinking { remaining } => {
                if keys_pressed.contains(&KeyCode::Escape) {
                    self.engine.abandon();
                    self.sync_mode(store);
                    return;
                }
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.mode = AppMode::EnemyThinking { remaining };
                    return;
                }
                let Some(view) = self.engine.view() else {
                    self.sync_mode(store);
                    return;
                };
                let action = self.enemy_source.next_action(&view);
                self.step(store, action);
            }
            AppMode::Finished(_) => {
                if keys_pressed.contains(&KeyCode::N) {
                    self.rematch_requested = true;
                }
            }
        }
    }

    fn player_action(&self, keys_pressed: &[KeyCode]) -> Option<Action> {
        keys_pressed.iter().find_map(|key| match key {
            KeyCode::A => Some(Action::Attack),
            KeyCode::G => Some(Action::Guard),
            // Oldest item first; an empty bag is still a (wasted) turn.
            KeyCode::I => Some(Action::UseItem(0)),
            KeyCode::T => Some(Action::Taunt),
            KeyCode::Escape => Some(Action::Exit),
            _ => None,
        })
    }

    fn step<S: ArenaStore + ?Sized>(&mut self, store: &mut S, action: Action) {
        if let Err(error) = self.engine.act(action, &mut self.dice) {
            tracing::warn!(%error, ?action, "action ignored");
        }
        self.sync_mode(store);
    }

    fn sync_mode<S: ArenaStore + ?Sized>(&mut self, store: &mut S) {
        self.mode = match self.engine.phase() {
            TurnPhase::PlayerTurn => AppMode::PlayerTurn,
            TurnPhase::EnemyTurn => AppMode::EnemyThinking { remaining: self.enemy_delay },
            TurnPhase::Finished(outcome) => {
                if !matches!(self.mode, AppMode::Finished(_)) {
                    self.finish(store, outcome);
                }
                AppMode::Finished(outcome)
            }
        };
    }

    fn finish<S: ArenaStore + ?Sized>(&mut self, store: &mut S, outcome: BattleOutcome) {
        tracing::info!(?outcome, rounds = self.engine.round(), seed = self.seed, "battle finished");
        let player = self.engine.player().name().to_string();
        let enemy = self.engine.enemy().name().to_string();
        for error in record_outcome(store, &player, &enemy, outcome) {
            self.notices.push(format!("Result not saved: {error}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::content::default_roster;
    use arena_core::{BattleEvent, MemoryStore, Side, Verdict};

    fn app(delay_ms: u64) -> AppState {
        let player = Combatant::new("Hero", 100, 30, 5).unwrap();
        let enemy = Combatant::new("Commodus", 90, 30, 3).unwrap();
        AppState::new(player, enemy, AiPolicy::Threshold, 7, Duration::from_millis(delay_ms))
    }

    #[test]
    fn start_picks_from_the_roster_and_hands_out_the_kit() {
        let roster = default_roster();
        let hero = GladiatorTemplate::new("Hero", 100, 50, 5);

        let app = AppState::start(&roster, &hero, AiPolicy::FlatWeighted, 3, Duration::ZERO)
            .unwrap();

        assert!(roster.iter().any(|entry| entry.name == app.engine().enemy().name()));
        assert_eq!(app.engine().player().inventory().len(), 2);
        assert_eq!(app.policy(), AiPolicy::FlatWeighted);
        assert_eq!(app.mode, AppMode::PlayerTurn);
    }

    #[test]
    fn start_rejects_an_empty_roster() {
        let hero = GladiatorTemplate::new("Hero", 100, 50, 5);
        let result = AppState::start(&[], &hero, AiPolicy::Threshold, 3, Duration::ZERO);
        assert!(result.is_err());
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let mut store = MemoryStore::new();
        let mut app = app(500);
        app.tick(&mut store, &[KeyCode::Space, KeyCode::Right], 0.016);
        assert_eq!(app.mode, AppMode::PlayerTurn);
        assert!(app.engine().events().is_empty());
    }

    #[test]
    fn enemy_waits_out_the_delay() {
        let mut store = MemoryStore::new();
        let mut app = app(500);

        app.tick(&mut store, &[KeyCode::G], 0.016);
        assert_eq!(app.mode, AppMode::EnemyThinking { remaining: 0.5 });

        app.tick(&mut store, &[], 0.2);
        assert!(matches!(app.mode, AppMode::EnemyThinking { .. }));
        assert_eq!(app.engine().events().len(), 1);

        app.tick(&mut store, &[], 0.4);
        assert_eq!(app.mode, AppMode::PlayerTurn);
        assert_eq!(app.engine().events().len(), 2);
    }

    #[test]
    fn player_keys_are_ignored_while_enemy_thinks() {
        let mut store = MemoryStore::new();
        let mut app = app(500);

        app.tick(&mut store, &[KeyCode::G], 0.0);
        app.tick(&mut store, &[KeyCode::A], 0.1);

        assert_eq!(app.engine().events().len(), 1);
    }

    #[test]
    fn escape_while_enemy_thinks_abandons_as_the_player() {
        let mut store = MemoryStore::new();
        let mut app = app(500);

        app.tick(&mut store, &[KeyCode::A], 0.0);
        assert!(matches!(app.mode, AppMode::EnemyThinking { .. }));
        app.tick(&mut store, &[KeyCode::Escape], 0.0);

        assert_eq!(app.mode, AppMode::Finished(BattleOutcome::Abandoned));
        assert_eq!(
            app.engine().events().last(),
            Some(&BattleEvent::Abandoned { actor: Side::Player })
        );
        assert!(store.battle_history().unwrap().is_empty());
    }

    #[test]
    fn finished_battle_is_recorded_once_and_offers_rematch() {
        let mut store = MemoryStore::new();
        let mut app = app(0);

        for _ in 0..200 {
            if matches!(app.mode, AppMode::Finished(_)) {
                break;
            }
            app.tick(&mut store, &[KeyCode::A], 0.016);
        }

        let AppMode::Finished(outcome) = app.mode else {
            panic!("battle should finish, got {:?}", app.mode);
        };
        app.tick(&mut store, &[KeyCode::A], 0.016);
        app.tick(&mut store, &[KeyCode::N], 0.016);

        let history = store.battle_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(Some(history[0].outcome), outcome.verdict());
        if outcome.verdict() == Some(Verdict::Win) {
            assert_eq!(store.score("Hero").unwrap(), 1);
        }
        assert!(app.rematch_requested);
    }

    #[test]
    fn store_failures_become_notices() {
        let mut store = MemoryStore::failing();
        let mut app = app(0);

        for _ in 0..200 {
            if matches!(app.mode, AppMode::Finished(_)) {
                break;
            }
            app.tick(&mut store, &[KeyCode::A], 0.016);
        }

        assert!(matches!(app.mode, AppMode::Finished(_)));
        assert!(!app.notices.is_empty());
    }
}
