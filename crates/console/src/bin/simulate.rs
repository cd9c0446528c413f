use anyhow::{Result, bail, ensure};
use arena_console::commands::PolicyArg;
use arena_console::logging;
use arena_core::content::{default_player, default_roster, starter_kit};
use arena_core::seed::derive_seed;
use arena_core::{
    ActionSource, AiPolicy, ArenaStore, BattleOutcome, Combatant, MemoryStore, PolicyController,
    Side, TurnEngine, pick_opponent, record_outcome,
};
use clap::Parser;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

/// No real battle gets anywhere near this; damage is at least 1 per hit.
const MAX_ACTIONS: u32 = 10_000;

#[derive(Parser)]
#[command(author, version, about = "Headless AI-vs-AI battles", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    battles: u64,
    #[arg(long, value_enum, default_value = "threshold")]
    player_policy: PolicyArg,
    #[arg(long, value_enum, default_value = "threshold")]
    enemy_policy: PolicyArg,
}

fn check_invariants(engine: &TurnEngine) -> Result<()> {
    for fighter in [engine.player(), engine.enemy()] {
        ensure!(
            fighter.health() <= fighter.max_health(),
            "{} has {} HP above max {}",
            fighter.name(),
            fighter.health(),
            fighter.max_health()
        );
        ensure!(fighter.attack() >= 1, "{} attack fell below 1", fighter.name());
    }
    Ok(())
}

fn simulate_battle(
    battle_seed: u64,
    player_policy: AiPolicy,
    enemy_policy: AiPolicy,
    store: &mut MemoryStore,
) -> Result<(BattleOutcome, u32)> {
    let roster = default_roster();
    let mut dice = ChaCha8Rng::seed_from_u64(battle_seed);
    let Some(template) = pick_opponent(&roster, &mut dice) else {
        bail!("default roster is empty");
    };

    let player =
        Combatant::from_template(&default_player("Simulant"))?.with_inventory(starter_kit());
    let enemy = Combatant::from_template(template)?;
    let player_dice = ChaCha8Rng::seed_from_u64(derive_seed(battle_seed, 1));
    let enemy_dice = ChaCha8Rng::seed_from_u64(derive_seed(battle_seed, 2));
    let mut player_source = PolicyController::new(player_policy, player_dice);
    let mut enemy_source = PolicyController::new(enemy_policy, enemy_dice);

    let mut engine = TurnEngine::new(player, enemy);
    let mut actions = 0;
    while let Some(view) = engine.view() {
        ensure!(actions < MAX_ACTIONS, "battle {battle_seed} did not finish");
        let action = match view.side {
            Side::Player => player_source.next_action(&view),
            Side::Enemy => enemy_source.next_action(&view),
        };
        engine.act(action, &mut dice)?;
        check_invariants(&engine)?;
        actions += 1;
    }

    let Some(outcome) = engine.outcome() else {
        bail!("battle {battle_seed} stopped without an outcome");
    };
    let loser = match outcome {
        BattleOutcome::PlayerWon => engine.enemy(),
        BattleOutcome::PlayerLost => engine.player(),
        BattleOutcome::Abandoned => bail!("AI players never leave the arena"),
    };
    ensure!(loser.health() == 0, "battle {battle_seed} ended with the loser alive");

    let errors = record_outcome(store, engine.player().name(), engine.enemy().name(), outcome);
    ensure!(errors.is_empty(), "memory store rejected a result");
    Ok((outcome, engine.round()))
}

fn main() -> Result<()> {
    logging::init("info");
    let args = Args::parse();
    let player_policy = AiPolicy::from(args.player_policy);
    let enemy_policy = AiPolicy::from(args.enemy_policy);

    println!(
        "Simulating {} battles from seed {} ({} vs {})...",
        args.battles,
        args.seed,
        player_policy.label(),
        enemy_policy.label()
    );
    let mut store = MemoryStore::new();
    let mut wins = 0_u64;
    let mut total_rounds = 0_u64;

    for index in 0..args.battles {
        let battle_seed = derive_seed(args.seed, index);
        let (outcome, rounds) =
            simulate_battle(battle_seed, player_policy, enemy_policy, &mut store)?;
        tracing::debug!(battle_seed, ?outcome, rounds, "battle simulated");
        if outcome == BattleOutcome::PlayerWon {
            wins += 1;
        }
        total_rounds += u64::from(rounds);
    }

    let history = store.battle_history()?;
    ensure!(history.len() as u64 == args.battles, "history is missing battles");
    let losses = args.battles - wins;
    println!("Player won {wins}, lost {losses}.");
    if args.battles > 0 {
        println!("Average length: {:.1} rounds.", total_rounds as f64 / args.battles as f64);
    }
    println!("Simulation completed successfully.");
    Ok(())
}
