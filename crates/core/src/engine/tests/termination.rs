//! Tests for victory, defeat and abandonment.

use super::support::*;

#[test]
fn slugfest_ends_with_exactly_one_survivor() {
    let mut engine = standard_duel();
    let mut dice = never_taunts();

    let mut actions = 0;
    while !engine.phase().is_finished() {
        engine.act(Action::Attack, &mut dice).unwrap();
        actions += 1;
        assert!(actions < 100, "battle should terminate");
    }

    assert_eq!(engine.outcome(), Some(BattleOutcome::PlayerWon));
    assert_eq!(engine.enemy().health(), 0);
    assert_eq!(engine.player().health(), 19);
    assert_eq!(engine.round(), 4);
    assert_eq!(actions, 7);
    assert_eq!(engine.events().last(), Some(&BattleEvent::Defeated { side: Side::Enemy }));
}

#[test]
fn killing_blow_ends_the_round_immediately() {
    let mut engine =
        TurnEngine::new(gladiator("Hero", 100, 500, 5), gladiator("Weakling", 10, 30, 0));

    let phase = engine.act(Action::Attack, &mut never_taunts()).unwrap();

    assert_eq!(phase, TurnPhase::Finished(BattleOutcome::PlayerWon));
    assert_eq!(engine.player().health(), 100);
}

#[test]
fn guard_cannot_save_from_an_overwhelming_hit() {
    let mut engine = TurnEngine::new(gladiator("Hero", 10, 1, 0), gladiator("Giant", 500, 50, 0));
    let mut dice = never_taunts();

    engine.act(Action::Guard, &mut dice).unwrap();
    let phase = engine.act(Action::Attack, &mut dice).unwrap();

    // 50 halved to 25 still exceeds 10 health.
    assert_eq!(phase, TurnPhase::Finished(BattleOutcome::PlayerLost));
}

#[test]
fn unguarded_player_falls() {
    let mut engine = TurnEngine::new(gladiator("Hero", 10, 1, 0), gladiator("Giant", 500, 50, 0));
    let mut dice = never_taunts();

    engine.act(Action::Attack, &mut dice).unwrap();
    let phase = engine.act(Action::Attack, &mut dice).unwrap();

    assert_eq!(phase, TurnPhase::Finished(BattleOutcome::PlayerLost));
    assert_eq!(engine.player().health(), 0);
    assert_eq!(engine.events().last(), Some(&BattleEvent::Defeated { side: Side::Player }));
}

#[test]
fn exit_abandons_and_locks_the_battle() {
    let mut engine = standard_duel();
    let mut dice = never_taunts();

    let phase = engine.act(Action::Exit, &mut dice).unwrap();

    assert_eq!(phase, TurnPhase::Finished(BattleOutcome::Abandoned));
    assert_eq!(
        engine.act(Action::Attack, &mut dice),
        Err(EngineError::BattleOver(BattleOutcome::Abandoned))
    );
    assert_eq!(engine.enemy().health(), 90);
}

#[test]
fn abandon_only_affects_running_battles() {
    let mut engine =
        TurnEngine::new(gladiator("Hero", 100, 500, 5), gladiator("Weakling", 10, 30, 0));
    engine.act(Action::Attack, &mut never_taunts()).unwrap();

    engine.abandon();

    assert_eq!(engine.outcome(), Some(BattleOutcome::PlayerWon));
}

#[test]
fn abandon_during_enemy_turn_names_the_player() {
    let mut engine = standard_duel();
    engine.act(Action::Guard, &mut never_taunts()).unwrap();
    assert_eq!(engine.phase(), TurnPhase::EnemyTurn);

    engine.abandon();

    assert_eq!(engine.outcome(), Some(BattleOutcome::Abandoned));
    assert_eq!(engine.events().last(), Some(&BattleEvent::Abandoned { actor: Side::Player }));
}

#[test]
fn view_describes_the_acting_side() {
    let mut engine = standard_duel();
    let view = engine.view().expect("battle is running");
    assert_eq!(view.side, Side::Player);
    assert_eq!(view.me.name(), "Hero");
    assert_eq!(view.round, 1);

    engine.act(Action::Guard, &mut never_taunts()).unwrap();
    let view = engine.view().expect("battle is running");
    assert_eq!(view.side, Side::Enemy);
    assert_eq!(view.opponent.name(), "Hero");

    engine.abandon();
    assert!(engine.view().is_none());
}
