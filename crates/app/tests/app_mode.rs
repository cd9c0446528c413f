use std::time::Duration;

use arena_app::app_loop::{AppMode, AppState};
use arena_core::content::default_roster;
use arena_core::{AiPolicy, ArenaStore, BattleOutcome, FileStore, GladiatorTemplate};
use macroquad::prelude::KeyCode;
use tempfile::tempdir;

fn hero() -> GladiatorTemplate {
    GladiatorTemplate::new("Hero", 100, 50, 5)
}

fn play_out(app: &mut AppState, store: &mut FileStore, key: KeyCode) -> BattleOutcome {
    for _ in 0..1_000 {
        if let AppMode::Finished(outcome) = app.mode {
            return outcome;
        }
        app.tick(store, &[key], 0.25);
    }
    panic!("battle did not finish: {:?}", app.mode);
}

#[test]
fn test_window_battle_is_saved_to_the_data_dir() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    let roster = store.load_roster().unwrap();
    let mut app =
        AppState::start(&roster, &hero(), AiPolicy::Threshold, 2024, Duration::from_millis(500))
            .unwrap();

    let outcome = play_out(&mut app, &mut store, KeyCode::A);
    store.close().unwrap();

    let reopened = FileStore::open(dir.path()).unwrap();
    let history = reopened.battle_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(Some(history[0].outcome), outcome.verdict());
    assert_eq!(history[0].opponent, app.engine().enemy().name());
}

#[test]
fn test_same_seed_same_opponent_and_log() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    let roster = default_roster();

    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut app =
            AppState::start(&roster, &hero(), AiPolicy::FlatWeighted, 77, Duration::ZERO).unwrap();
        play_out(&mut app, &mut store, KeyCode::A);
        runs.push((app.engine().enemy().name().to_string(), app.engine().events().to_vec()));
    }

    assert_eq!(runs[0], runs[1]);
}

#[test]
fn test_leaving_mid_battle_keeps_the_store_clean() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    let mut app =
        AppState::start(&default_roster(), &hero(), AiPolicy::Threshold, 5, Duration::ZERO)
            .unwrap();

    app.tick(&mut store, &[KeyCode::G], 0.0);
    app.tick(&mut store, &[], 0.1);
    let outcome = play_out(&mut app, &mut store, KeyCode::Escape);

    assert_eq!(outcome, BattleOutcome::Abandoned);
    assert!(store.battle_history().unwrap().is_empty());
    assert!(store.scores().unwrap().is_empty());
}
