use arena_core::{
    Action, BattleEvent, BattleOutcome, Combatant, TurnEngine, TurnPhase, content::starter_kit,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const MAX_ACTIONS: usize = 20_000;

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn check_invariants(engine: &TurnEngine) -> Result<(), String> {
    for fighter in [engine.player(), engine.enemy()] {
        if fighter.health() > fighter.max_health() {
            return Err(format!("{} has health above max", fighter.name()));
        }
        if fighter.attack() < 1 {
            return Err(format!("{} dropped below 1 attack", fighter.name()));
        }
    }
    Ok(())
}

fn run_fuzz_battle(stat_seed: u64, choice_seed: u64) -> Result<(), String> {
    let mut stats = ChaCha8Rng::seed_from_u64(stat_seed);
    let mut roll = |low: u64, span: u64| (low + stats.next_u64() % span) as u32;
    let player = Combatant::new("Fuzzer", roll(1, 300), roll(1, 80), roll(0, 60))
        .map_err(|e| e.to_string())?
        .with_inventory(starter_kit());
    let enemy = Combatant::new("Target", roll(1, 300), roll(1, 80), roll(0, 60))
        .map_err(|e| e.to_string())?;

    let mut engine = TurnEngine::new(player, enemy);
    let mut rng = ChaCha8Rng::seed_from_u64(choice_seed);
    let menu =
        [Action::Attack, Action::Guard, Action::Taunt, Action::UseItem(0), Action::UseItem(1)];

    for _ in 0..MAX_ACTIONS {
        if engine.phase().is_finished() {
            break;
        }
        let action = choose(&mut rng, &menu);
        engine.act(action, &mut rng).map_err(|e| e.to_string())?;
        check_invariants(&engine)?;
    }

    match engine.phase() {
        TurnPhase::Finished(BattleOutcome::PlayerWon) => {
            if engine.enemy().health() != 0 || engine.player().health() == 0 {
                return Err("win with wrong survivor".to_string());
            }
        }
        TurnPhase::Finished(BattleOutcome::PlayerLost) => {
            if engine.player().health() != 0 || engine.enemy().health() == 0 {
                return Err("loss with wrong survivor".to_string());
            }
        }
        other => return Err(format!("battle did not finish: {other:?}")),
    }

    let defeats =
        engine.events().iter().filter(|e| matches!(e, BattleEvent::Defeated { .. })).count();
    if defeats != 1 {
        return Err(format!("expected one defeat event, found {defeats}"));
    }
    Ok(())
}

#[test]
fn test_fuzz_battle_invariants() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(stat_seed, choice_seed)| {
            run_fuzz_battle(stat_seed, choice_seed).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("random battles should preserve combat invariants");
}
