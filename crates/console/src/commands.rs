//! Subcommand bodies. Each writes its report to the given output so the
//! binary and the tests share the exact same text.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use arena_core::content::starter_kit;
use arena_core::narration::{Names, describe_outcome};
use arena_core::seed::derive_seed;
use arena_core::{
    AiPolicy, ArenaStore, BattleReport, BattleSession, Combatant, PlayerStats, PolicyController,
    SeedChoice, Verdict, pick_opponent, validate_name,
};
use clap::ValueEnum;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::prompt::ConsolePrompt;

/// Dice stream for the opponent's decisions, separate from taunts and the pick.
const ENEMY_DICE_STREAM: u64 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Threshold,
    FlatWeighted,
}

impl From<PolicyArg> for AiPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Threshold => Self::Threshold,
            PolicyArg::FlatWeighted => Self::FlatWeighted,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResetTarget {
    Scores,
    Roster,
    History,
}

#[derive(Clone, Debug)]
pub struct FightOptions {
    pub name: Option<String>,
    pub seed: SeedChoice,
    pub policy: AiPolicy,
    pub player: PlayerStats,
    pub turn_delay: Duration,
}

/// Run one interactive battle. `Ok(None)` when input ended before a name was given.
pub fn fight<S, R, W>(
    store: &mut S,
    options: &FightOptions,
    prompt: &mut ConsolePrompt<R, W>,
) -> Result<Option<BattleReport>>
where
    S: ArenaStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let name = match &options.name {
        Some(raw) => validate_name(raw).with_context(|| format!("invalid player name '{raw}'"))?,
        None => match prompt.ask_name().context("failed to read player name")? {
            Some(name) => name,
            None => return Ok(None),
        },
    };

    let roster = store.load_roster().context("failed to load gladiator roster")?;
    let seed = options.seed.value();
    let mut dice = ChaCha8Rng::seed_from_u64(seed);
    let template =
        pick_opponent(&roster, &mut dice).ok_or_else(|| anyhow!("gladiator roster is empty"))?;

    let player = Combatant::from_template(&options.player.template(name.as_str()))
        .context("invalid player stats")?
        .with_inventory(starter_kit());
    let enemy = Combatant::from_template(template)
        .with_context(|| format!("invalid roster entry '{}'", template.name))?;

    let out = prompt.output_mut();
    writeln!(out, "Seed: {seed}")?;
    writeln!(
        out,
        "{} enters the arena against {} (HP {}, ATK {}, DEF {}).",
        player.name(),
        enemy.name(),
        enemy.max_health(),
        enemy.attack(),
        enemy.defense()
    )?;
    tracing::info!(seed, policy = options.policy.label(), opponent = enemy.name(), "fight");

    let mut enemy_source = PolicyController::new(
        options.policy,
        ChaCha8Rng::seed_from_u64(derive_seed(seed, ENEMY_DICE_STREAM)),
    );
    let report = BattleSession::new(&mut *store).with_turn_delay(options.turn_delay).run(
        player,
        enemy,
        prompt,
        &mut enemy_source,
        &mut dice,
    );

    let names = Names::new(&report.player, &report.opponent);
    prompt.narrate(&report.events, names)?;
    let out = prompt.output_mut();
    writeln!(out, "{}", describe_outcome(report.outcome, names))?;
    for error in &report.store_errors {
        writeln!(out, "Warning: result not saved: {error}")?;
    }
    if report.outcome.verdict().is_some() {
        match store.score(&report.player) {
            Ok(wins) => writeln!(out, "{} has {wins} win(s).", report.player)?,
            Err(error) => tracing::warn!(%error, "could not read score back"),
        }
    }

    Ok(Some(report))
}

pub fn print_scores<S: ArenaStore + ?Sized>(store: &S, out: &mut impl Write) -> Result<()> {
    let scores = store.scores().context("failed to load scores")?;
    if scores.is_empty() {
        writeln!(out, "No scores yet.")?;
        return Ok(());
    }

    let mut ranked: Vec<(&String, &u32)> = scores.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (rank, (player, wins)) in ranked.into_iter().enumerate() {
        writeln!(out, "{:>2}. {player:<20} {wins}", rank + 1)?;
    }
    Ok(())
}

/// Most recent `limit` battles, oldest first.
pub fn print_history<S: ArenaStore + ?Sized>(
    store: &S,
    limit: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let history = store.battle_history().context("failed to load battle history")?;
    if history.is_empty() {
        writeln!(out, "No battles fought yet.")?;
        return Ok(());
    }

    let skip = limit.map_or(0, |limit| history.len().saturating_sub(limit));
    for (index, record) in history.iter().enumerate().skip(skip) {
        let verdict = match record.outcome {
            Verdict::Win => "WIN",
            Verdict::Loss => "LOSS",
        };
        writeln!(out, "{:>4}. {} vs {}: {verdict}", index + 1, record.player, record.opponent)?;
    }
    Ok(())
}

pub fn print_roster<S: ArenaStore + ?Sized>(store: &mut S, out: &mut impl Write) -> Result<()> {
    let roster = store.load_roster().context("failed to load gladiator roster")?;
    for entry in &roster {
        writeln!(
            out,
            "{:<20} HP {:>3}  ATK {:>3}  DEF {:>3}",
            entry.name, entry.max_health, entry.attack, entry.defense
        )?;
    }
    Ok(())
}

pub fn reset<S: ArenaStore + ?Sized>(
    store: &mut S,
    target: ResetTarget,
    out: &mut impl Write,
) -> Result<()> {
    match target {
        ResetTarget::Scores => {
            store.clear_scores().context("failed to clear scores")?;
            writeln!(out, "Scores cleared.")?;
        }
        ResetTarget::Roster => {
            let roster = store.reset_roster().context("failed to reset roster")?;
            writeln!(out, "Roster reset to {} default gladiators.", roster.len())?;
        }
        ResetTarget::History => {
            store.clear_history().context("failed to clear battle history")?;
            writeln!(out, "Battle history cleared.")?;
        }
    }
    tracing::info!(?target, "store reset");
    Ok(())
}
