//! Opponent selection from the gladiator roster.

use crate::combatant::GladiatorTemplate;
use crate::dice::Dice;

/// Uniform pick over the roster. `None` only for an empty roster.
pub fn pick_opponent<'a>(
    roster: &'a [GladiatorTemplate],
    dice: &mut impl Dice,
) -> Option<&'a GladiatorTemplate> {
    let sides = u32::try_from(roster.len()).ok().filter(|len| *len > 0)?;
    roster.get(dice.roll(sides) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_roster;
    use crate::dice::ScriptedDice;

    #[test]
    fn empty_roster_has_no_opponent() {
        assert!(pick_opponent(&[], &mut ScriptedDice::new([4])).is_none());
    }

    #[test]
    fn every_entry_is_reachable() {
        let roster = default_roster();
        let mut dice = ScriptedDice::new([0, 1, 2, 3]);
        let picks: Vec<&str> = (0..4)
            .map(|_| pick_opponent(&roster, &mut dice).unwrap().name.as_str())
            .collect();
        assert_eq!(picks, vec!["Spartacus", "Maximus", "Commodus", "Spartacus"]);
    }
}
