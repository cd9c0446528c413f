//! Sources of actions for either side of a battle.

use std::collections::VecDeque;

use crate::dice::Dice;
use crate::engine::BattleView;
use crate::policy::AiPolicy;
use crate::types::Action;

/// Decides the next action for the side described by `view`.
///
/// Human input adapters and AI policies both plug in here, so the session
/// never needs to know which kind of fighter it is driving.
pub trait ActionSource {
    fn next_action(&mut self, view: &BattleView<'_>) -> Action;
}

/// AI side: a policy plus its own dice.
pub struct PolicyController<D> {
    policy: AiPolicy,
    dice: D,
}

impl<D: Dice> PolicyController<D> {
    pub fn new(policy: AiPolicy, dice: D) -> Self {
        Self { policy, dice }
    }

    pub fn policy(&self) -> AiPolicy {
        self.policy
    }
}

impl<D: Dice> ActionSource for PolicyController<D> {
    fn next_action(&mut self, view: &BattleView<'_>) -> Action {
        self.policy.choose_action(view.me, view.opponent, &mut self.dice)
    }
}

/// Plays back a fixed list of actions, then repeats `fallback` forever.
#[derive(Clone, Debug)]
pub struct ScriptedActions {
    queue: VecDeque<Action>,
    fallback: Action,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = Action>, fallback: Action) -> Self {
        Self { queue: actions.into_iter().collect(), fallback }
    }

    pub fn always(action: Action) -> Self {
        Self::new([], action)
    }
}

impl ActionSource for ScriptedActions {
    fn next_action(&mut self, _view: &BattleView<'_>) -> Action {
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}
