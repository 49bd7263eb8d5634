//! Dice rolling and face histograms.

use crate::config::FACES;
use alloc::vec::Vec;
use rand::Rng;

/// A single die showing a face in `1..=FACES`.
pub type Die = u8;

/// Roll `n` fair dice.
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Die> {
    (0..n).map(|_| rng.random_range(1..=FACES)).collect()
}

/// Count of each face `1..=FACES` across a set of dice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceCounts([usize; FACES as usize]);

impl FaceCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dice(dice: &[Die]) -> Self {
        let mut counts = Self::new();
        counts.add(dice);
        counts
    }

    /// Tally additional dice. Values outside `1..=FACES` are ignored.
    pub fn add(&mut self, dice: &[Die]) {
        for &d in dice {
            if (1..=FACES).contains(&d) {
                self.0[(d - 1) as usize] += 1;
            }
        }
    }

    /// Number of dice showing `face`; zero for faces that cannot appear.
    pub fn get(&self, face: u8) -> usize {
        if (1..=FACES).contains(&face) {
            self.0[(face - 1) as usize]
        } else {
            0
        }
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(face, count)` pairs in face order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.0.iter().enumerate().map(|(i, &c)| (i as u8 + 1, c))
    }
}
