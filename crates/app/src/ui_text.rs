//! Text for the status bar, fighter panels, help line and event log.

use arena_app::app_loop::{AppMode, AppState};
use arena_core::narration::{Names, describe_event, describe_outcome};
use arena_core::{BattleOutcome, Combatant, TurnEngine};

pub const HELP_TEXT: &str = "[A] Attack  [G] Guard  [I] Use item  [T] Taunt  [Esc] Leave";
pub const FINISHED_HELP_TEXT: &str = "[N] New battle  [Esc] Quit";

pub fn names(engine: &TurnEngine) -> Names<'_> {
    Names::new(engine.player().name(), engine.enemy().name())
}

pub fn status_text(app: &AppState) -> String {
    let engine = app.engine();
    if let Some(notice) = app.notices.last() {
        return notice.clone();
    }
    match app.mode {
        AppMode::PlayerTurn => format!("Round {}: your move", engine.round()),
        AppMode::EnemyThinking { .. } => {
            format!("Round {}: {} is deciding...", engine.round(), engine.enemy().name())
        }
        AppMode::Finished(outcome) => describe_outcome(outcome, names(engine)),
    }
}

pub fn help_text(mode: &AppMode) -> &'static str {
    match mode {
        AppMode::Finished(_) => FINISHED_HELP_TEXT,
        _ => HELP_TEXT,
    }
}

pub fn fighter_lines(fighter: &Combatant) -> Vec<String> {
    let mut lines = vec![
        fighter.name().to_string(),
        format!("HP {}/{}", fighter.health(), fighter.max_health()),
        format!("ATK {}  DEF {}", fighter.attack(), fighter.defense()),
    ];
    if fighter.is_blocking() {
        lines.push("Guarding".to_string());
    }
    if !fighter.inventory().is_empty() {
        let items: Vec<&str> = fighter.inventory().iter().map(|item| item.name.as_str()).collect();
        lines.push(format!("Items: {}", items.join(", ")));
    }
    lines
}

/// The newest `max_lines` log entries, oldest first.
pub fn event_log_lines(engine: &TurnEngine, max_lines: usize) -> Vec<String> {
    let events = engine.events();
    let start = events.len().saturating_sub(max_lines);
    events[start..].iter().map(|event| describe_event(event, names(engine))).collect()
}

pub fn recap_lines(app: &AppState, outcome: BattleOutcome) -> Vec<String> {
    let engine = app.engine();
    vec![
        describe_outcome(outcome, names(engine)),
        format!("Rounds: {}", engine.round()),
        format!("Seed: {}", app.seed),
        format!("Opponent policy: {}", app.policy().label()),
    ]
}
