use std::fs;

use arena_core::{
    Action, AiPolicy, ArenaStore, BattleOutcome, BattleSession, Combatant, FileStore,
    PolicyController, ScriptedActions, ScriptedDice, Verdict, content::starter_kit,
    pick_opponent,
};
use tempfile::tempdir;

#[test]
fn test_smoke_file_backed_battles() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    let roster = store.load_roster().unwrap();
    let mut dice = ScriptedDice::new([2, 9, 9, 9]);

    // Commodus, the third roster entry, against a hero who only swings.
    let template = pick_opponent(&roster, &mut dice).unwrap().clone();
    assert_eq!(template.name, "Commodus");

    for _ in 0..2 {
        let player = Combatant::new("Hero", 100, 50, 5).unwrap().with_inventory(starter_kit());
        let enemy = Combatant::from_template(&template).unwrap();
        let report = BattleSession::new(&mut store).run(
            player,
            enemy,
            &mut ScriptedActions::always(Action::Attack),
            &mut PolicyController::new(AiPolicy::Threshold, ScriptedDice::new([0])),
            &mut dice,
        );
        assert_eq!(report.outcome, BattleOutcome::PlayerWon);
        assert!(report.store_errors.is_empty());
    }

    let player = Combatant::new("Hero", 100, 50, 5).unwrap();
    let enemy = Combatant::from_template(&template).unwrap();
    let report = BattleSession::new(&mut store).run(
        player,
        enemy,
        &mut ScriptedActions::always(Action::Exit),
        &mut ScriptedActions::always(Action::Attack),
        &mut dice,
    );
    assert_eq!(report.outcome, BattleOutcome::Abandoned);
    store.close().unwrap();

    let reopened = FileStore::open(dir.path()).unwrap();
    assert_eq!(reopened.score("Hero").unwrap(), 2);
    let history = reopened.battle_history().unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|record| record.outcome == Verdict::Win));

    let raw = fs::read_to_string(dir.path().join("battles.jsonl")).unwrap();
    assert_eq!(raw.lines().count(), 2);
}
