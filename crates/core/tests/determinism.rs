use arena_core::{
    AiPolicy, BattleEvent, BattleSession, Combatant, MemoryStore, PolicyController,
    content::default_roster, pick_opponent,
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

fn ai_duel(seed: u64, player_policy: AiPolicy, enemy_policy: AiPolicy) -> Vec<BattleEvent> {
    let roster = default_roster();
    let mut dice = ChaCha8Rng::seed_from_u64(seed);
    let template = pick_opponent(&roster, &mut dice).expect("default roster is not empty");

    let player = Combatant::new("Hero", 100, 50, 5).unwrap();
    let enemy = Combatant::from_template(template).unwrap();
    let mut player_source =
        PolicyController::new(player_policy, ChaCha8Rng::seed_from_u64(seed ^ 0x5eed));
    let mut enemy_source =
        PolicyController::new(enemy_policy, ChaCha8Rng::seed_from_u64(seed.rotate_left(17)));

    let mut store = MemoryStore::new();
    BattleSession::new(&mut store)
        .run(player, enemy, &mut player_source, &mut enemy_source, &mut dice)
        .events
}

#[test]
fn test_determinism_identical_seeds_produce_same_battle() {
    for seed in [1, 42, 12345] {
        let first = ai_duel(seed, AiPolicy::Threshold, AiPolicy::Threshold);
        let second = ai_duel(seed, AiPolicy::Threshold, AiPolicy::Threshold);
        assert_eq!(first, second, "seed {seed} must replay identically");
        assert!(!first.is_empty());
    }
}

#[test]
fn test_determinism_different_seeds_diverge() {
    let traces: Vec<Vec<BattleEvent>> = (0..8)
        .map(|seed| ai_duel(seed, AiPolicy::FlatWeighted, AiPolicy::FlatWeighted))
        .collect();
    let distinct = traces.iter().filter(|trace| **trace != traces[0]).count();
    assert!(distinct > 0, "eight seeds should not all play out identically");
}
