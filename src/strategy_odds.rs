use crate::{
    bid::{Action, Bid},
    config::{FACES, WILD_FACE},
    dice::Die,
    odds::{bid_probability, expected_count},
    strategy::Strategy,
};
use rand::rngs::SmallRng;

/// Bids from binomial odds over the unseen dice.
///
/// Calls "liar" when the standing bid is less likely than `threshold`,
/// otherwise plays the most likely bid that outranks it.
pub struct OddsStrategy {
    threshold: f64,
}

impl OddsStrategy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    fn opening_bid(own_dice: &[Die], total_dice: usize) -> Bid {
        let mut best = Bid {
            quantity: 1,
            face: FACES,
        };
        let mut best_expected = f64::MIN;
        for face in (1..=FACES).filter(|&f| f != WILD_FACE) {
            let expected = expected_count(face, own_dice, total_dice);
            if expected > best_expected {
                best_expected = expected;
                // Truncation keeps the opening at or below the expectation.
                let quantity = (expected as u32).max(1);
                best = Bid { quantity, face };
            }
        }
        best
    }

    /// Most likely bid outranking `bid`, with its probability.
    fn best_raise(bid: &Bid, own_dice: &[Die], total_dice: usize) -> (Bid, f64) {
        let mut best: Option<(Bid, f64)> = None;
        for face in 1..=FACES {
            let quantity = if face > bid.face {
                bid.quantity
            } else {
                bid.quantity.saturating_add(1)
            };
            let candidate = Bid { quantity, face };
            let p = bid_probability(&candidate, own_dice, total_dice);
            match best {
                Some((_, best_p)) if best_p >= p => {}
                _ => best = Some((candidate, p)),
            }
        }
        best.unwrap_or((
            Bid {
                quantity: bid.quantity.saturating_add(1),
                face: bid.face,
            },
            0.0,
        ))
    }
}

impl Default for OddsStrategy {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Strategy for OddsStrategy {
    fn decide(
        &mut self,
        _rng: &mut SmallRng,
        current_bid: Option<Bid>,
        total_dice: usize,
        own_dice: &[Die],
    ) -> Action {
        let Some(bid) = current_bid else {
            return Action::Bid(Self::opening_bid(own_dice, total_dice));
        };
        let standing = bid_probability(&bid, own_dice, total_dice);
        let (raise, raise_p) = Self::best_raise(&bid, own_dice, total_dice);
        if standing < self.threshold || raise_p <= 0.0 {
            Action::Challenge
        } else {
            Action::Bid(raise)
        }
    }

    fn name(&self) -> &str {
        "odds"
    }
}
