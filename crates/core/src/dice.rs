//! Uniform integer draws used by AI decisions, taunts and opponent picks.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub trait Dice {
    /// Uniform draw in `[0, sides)`. `sides` must be positive.
    fn roll(&mut self, sides: u32) -> u32;

    fn roll_d10(&mut self) -> u32 {
        self.roll(10)
    }
}

impl Dice for ChaCha8Rng {
    fn roll(&mut self, sides: u32) -> u32 {
        (self.next_u64() % u64::from(sides.max(1))) as u32
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
/// Each value is reduced modulo the requested number of sides.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(rolls: impl Into<Vec<u32>>) -> Self {
        let mut rolls = rolls.into();
        if rolls.is_empty() {
            rolls.push(0);
        }
        Self { rolls, cursor: 0 }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        value % sides.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;

    #[test]
    fn chacha_rolls_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rng.roll_d10() < 10);
            assert!(rng.roll(3) < 3);
        }
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut first = ChaCha8Rng::seed_from_u64(99);
        let mut second = ChaCha8Rng::seed_from_u64(99);
        let a: Vec<u32> = (0..20).map(|_| first.roll_d10()).collect();
        let b: Vec<u32> = (0..20).map(|_| second.roll_d10()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn scripted_dice_cycle() {
        let mut dice = ScriptedDice::new([3, 9]);
        assert_eq!(dice.roll_d10(), 3);
        assert_eq!(dice.roll_d10(), 9);
        assert_eq!(dice.roll_d10(), 3);
        assert_eq!(dice.roll(2), 1);
    }
}
