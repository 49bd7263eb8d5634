use crate::{
    bid::{Action, Bid},
    config::{FACES, WILD_FACE},
    dice::{Die, FaceCounts},
    strategy::Strategy,
};
use rand::{rngs::SmallRng, Rng};

/// Escalates the standing bid by one die and calls "liar" at random.
pub struct NaiveStrategy {
    challenge_probability: f64,
}

impl NaiveStrategy {
    pub fn new(challenge_probability: f64) -> Self {
        Self {
            challenge_probability: challenge_probability.clamp(0.0, 1.0),
        }
    }

    /// Most common non-wild face in hand; ties go to the higher face.
    fn favourite_face(own_dice: &[Die]) -> u8 {
        let counts = FaceCounts::from_dice(own_dice);
        counts
            .iter()
            .filter(|&(face, _)| face != WILD_FACE)
            .max_by_key(|&(face, count)| (count, face))
            .map(|(face, _)| face)
            .unwrap_or(FACES)
    }
}

impl Default for NaiveStrategy {
    fn default() -> Self {
        Self::new(0.25)
    }
}

impl Strategy for NaiveStrategy {
    fn decide(
        &mut self,
        rng: &mut SmallRng,
        current_bid: Option<Bid>,
        total_dice: usize,
        own_dice: &[Die],
    ) -> Action {
        match current_bid {
            None => Action::Bid(Bid {
                quantity: 1,
                face: Self::favourite_face(own_dice),
            }),
            Some(bid) => {
                let next = bid.quantity.saturating_add(1);
                if next as usize > total_dice || rng.random_bool(self.challenge_probability) {
                    Action::Challenge
                } else {
                    Action::Bid(Bid {
                        quantity: next,
                        face: bid.face,
                    })
                }
            }
        }
    }

    fn name(&self) -> &str {
        "naive"
    }
}
