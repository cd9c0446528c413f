//! Console input boundary: player names and the battle menu.
//!
//! Nothing typed at the keyboard reaches the engine unless it parsed into a
//! valid [`Action`]; anything else is re-prompted here.

use std::io::{self, BufRead, Write};

use arena_core::narration::{Names, describe_event};
use arena_core::{
    Action, ActionSource, BattleEvent, BattleView, Combatant, Inventory, validate_name,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Attack,
    Guard,
    UseItem,
    Taunt,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 5] = [Self::Attack, Self::Guard, Self::UseItem, Self::Taunt, Self::Exit];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Attack),
            "2" => Some(Self::Guard),
            "3" => Some(Self::UseItem),
            "4" => Some(Self::Taunt),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Guard => "Guard",
            Self::UseItem => "Use item",
            Self::Taunt => "Taunt",
            Self::Exit => "Exit battle",
        }
    }
}

/// Human side of a console battle. Also narrates whatever happened since the
/// player last acted; [`ConsolePrompt::narrate`] prints the tail once the
/// battle is over.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    seen_events: usize,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, seen_events: 0 }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for a fighter name until a valid one is entered. `None` on end of input.
    pub fn ask_name(&mut self) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "Enter your gladiator's name: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match validate_name(&line) {
                Ok(name) => return Ok(Some(name)),
                Err(error) => writeln!(self.output, "Invalid name: {error}.")?,
            }
        }
    }

    /// Narrate events the player has not seen yet.
    pub fn narrate(&mut self, events: &[BattleEvent], names: Names<'_>) -> io::Result<()> {
        for event in events.iter().skip(self.seen_events) {
            writeln!(self.output, "{}", describe_event(event, names))?;
        }
        self.seen_events = self.seen_events.max(events.len());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn show_status(&mut self, view: &BattleView<'_>) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Round {} ---", view.round)?;
        write_fighter(&mut self.output, view.me)?;
        write_fighter(&mut self.output, view.opponent)?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, choice.label())?;
        }
        Ok(())
    }

    fn choose(&mut self, view: &BattleView<'_>) -> io::Result<Action> {
        let names = Names::new(view.me.name(), view.opponent.name());
        self.narrate(view.events, names)?;
        self.show_status(view)?;
        loop {
            write!(self.output, "Choose an action (1-5): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Action::Exit);
            };
            let action = match MenuChoice::parse(&line) {
                Some(MenuChoice::Attack) => Action::Attack,
                Some(MenuChoice::Guard) => Action::Guard,
                Some(MenuChoice::Taunt) => Action::Taunt,
                Some(MenuChoice::Exit) => Action::Exit,
                Some(MenuChoice::UseItem) => match self.choose_item(view.me.inventory())? {
                    Some(action) => action,
                    None => continue,
                },
                None => {
                    writeln!(self.output, "Please enter a number from 1 to 5.")?;
                    continue;
                }
            };
            return Ok(action);
        }
    }

    /// `None` sends the player back to the main menu.
    fn choose_item(&mut self, inventory: &Inventory) -> io::Result<Option<Action>> {
        if inventory.is_empty() {
            // Still a turn: the engine logs the empty-handed attempt.
            return Ok(Some(Action::UseItem(0)));
        }
        for (index, item) in inventory.iter().enumerate() {
            writeln!(self.output, "  {}. {} - {}", index + 1, item.name, item.description)?;
        }
        loop {
            write!(self.output, "Pick an item (1-{}, 0 to go back): ", inventory.len())?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Some(Action::Exit));
            };
            match line.trim().parse::<usize>() {
                Ok(0) => return Ok(None),
                Ok(number) if number <= inventory.len() => {
                    return Ok(Some(Action::UseItem(number - 1)));
                }
                _ => writeln!(self.output, "There is no item with that number.")?,
            }
        }
    }
}

fn write_fighter(output: &mut impl Write, fighter: &Combatant) -> io::Result<()> {
    let guard = if fighter.is_blocking() { " [guarding]" } else { "" };
    writeln!(
        output,
        "{:<20} HP {:>3}/{:<3}  ATK {:>3}  DEF {:>3}{guard}",
        fighter.name(),
        fighter.health(),
        fighter.max_health(),
        fighter.attack(),
        fighter.defense()
    )
}

impl<R: BufRead, W: Write> ActionSource for ConsolePrompt<R, W> {
    fn next_action(&mut self, view: &BattleView<'_>) -> Action {
        match self.choose(view) {
            Ok(action) => action,
            Err(error) => {
                tracing::warn!(%error, "console input failed, leaving the battle");
                Action::Exit
            }
        }
    }
}
