//! Die values, the authoritative random source, and the timed roll.
//!
//! The value a roll resolves to always comes from a [`DiceSource`]. The
//! faces flashed while the die spins come from a separate display RNG held
//! by [`RollTimer`], so swapping in a scripted source for tests does not
//! depend on how many frames the roll lasted.

use crate::config::{DICE_FACES, ROLL_DURATION, ROLL_TICK_INTERVAL};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A single die face, always in 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiceValue(u8);

impl DiceValue {
    pub fn new(value: u8) -> Option<Self> {
        (1..=DICE_FACES).contains(&value).then_some(DiceValue(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        DiceValue(rng.gen_range(1..=DICE_FACES))
    }
}

impl fmt::Display for DiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where final roll values come from.
pub trait DiceSource {
    fn roll(&mut self) -> DiceValue;
}

/// Uniform die backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    pub fn from_entropy() -> Self {
        RandomDice {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomDice {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> DiceValue {
        DiceValue::random(&mut self.rng)
    }
}

/// Replays a fixed list of faces, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<DiceValue>,
    next: usize,
}

impl ScriptedDice {
    /// Returns `None` when the list is empty or holds a value outside 1..=6.
    pub fn new(faces: &[u8]) -> Option<Self> {
        let faces = faces
            .iter()
            .map(|&v| DiceValue::new(v))
            .collect::<Option<Vec<_>>>()?;
        if faces.is_empty() {
            return None;
        }
        Some(ScriptedDice { faces, next: 0 })
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DiceValue {
        let value = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        value
    }
}

/// Outcome of advancing a [`RollTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollProgress {
    /// Still spinning; the face to display right now.
    Spinning(DiceValue),
    /// Duration elapsed; the caller should resolve the roll now.
    Finished,
}

/// Drives the Rolling state: tentative faces every tick, then one resolution.
#[derive(Debug, Clone)]
pub struct RollTimer {
    elapsed: f32,
    tick_accumulator: f32,
    tentative: DiceValue,
    finished: bool,
    display_rng: StdRng,
}

impl RollTimer {
    pub fn start() -> Self {
        Self::with_display_rng(StdRng::from_entropy())
    }

    pub fn with_display_rng(mut display_rng: StdRng) -> Self {
        let tentative = DiceValue::random(&mut display_rng);
        RollTimer {
            elapsed: 0.0,
            tick_accumulator: 0.0,
            tentative,
            finished: false,
            display_rng,
        }
    }

    /// The face currently shown on the spinning die.
    pub fn tentative(&self) -> DiceValue {
        self.tentative
    }

    /// Fraction of the roll duration elapsed, in 0..=1.
    pub fn progress(&self) -> f32 {
        (self.elapsed / ROLL_DURATION).min(1.0)
    }

    /// Advances by `dt` seconds. Reports `Finished` exactly once.
    pub fn advance(&mut self, dt: f32) -> Option<RollProgress> {
        if self.finished {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed >= ROLL_DURATION {
            self.finished = true;
            crate::debug_dice!("Roll timer finished after {:.3}s", self.elapsed);
            return Some(RollProgress::Finished);
        }

        self.tick_accumulator += dt;
        while self.tick_accumulator >= ROLL_TICK_INTERVAL {
            self.tick_accumulator -= ROLL_TICK_INTERVAL;
            self.tentative = DiceValue::random(&mut self.display_rng);
        }
        Some(RollProgress::Spinning(self.tentative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_dice_value_range() {
        assert!(DiceValue::new(0).is_none());
        assert!(DiceValue::new(7).is_none());
        for v in 1..=6 {
            assert_eq!(DiceValue::new(v).unwrap().get(), v);
        }
    }

    #[test]
    fn test_seeded_dice_are_reproducible() {
        let mut a = RandomDice::seeded(7);
        let mut b = RandomDice::seeded(7);
        let rolls_a: Vec<u8> = (0..50).map(|_| a.roll().get()).collect();
        let rolls_b: Vec<u8> = (0..50).map(|_| b.roll().get()).collect();
        assert_eq!(rolls_a, rolls_b);
        assert!(rolls_a.iter().all(|v| (1..=6).contains(v)));
    }

    #[test]
    fn test_random_dice_cover_all_faces() {
        let mut dice = RandomDice::seeded(42);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[(dice.roll().get() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_dice_wrap() {
        let mut dice = ScriptedDice::new(&[3, 5]).unwrap();
        assert_eq!(dice.roll().get(), 3);
        assert_eq!(dice.roll().get(), 5);
        assert_eq!(dice.roll().get(), 3);
        assert!(ScriptedDice::new(&[]).is_none());
        assert!(ScriptedDice::new(&[2, 9]).is_none());
    }

    #[test]
    fn test_roll_timer_finishes_once() {
        let mut timer = RollTimer::with_display_rng(StdRng::seed_from_u64(1));
        let step = ROLL_DURATION / 4.0;
        for _ in 0..3 {
            assert!(matches!(timer.advance(step), Some(RollProgress::Spinning(_))));
        }
        assert_eq!(timer.advance(step + 0.001), Some(RollProgress::Finished));
        assert_eq!(timer.advance(step), None);
        assert_approx_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_roll_timer_single_long_frame() {
        let mut timer = RollTimer::with_display_rng(StdRng::seed_from_u64(1));
        assert_eq!(timer.advance(ROLL_DURATION * 3.0), Some(RollProgress::Finished));
    }

    #[test]
    fn test_roll_timer_progress() {
        let mut timer = RollTimer::with_display_rng(StdRng::seed_from_u64(9));
        assert_approx_eq!(timer.progress(), 0.0);
        timer.advance(ROLL_DURATION / 2.0);
        assert_approx_eq!(timer.progress(), 0.5);
    }
}
