// Bid likelihoods from a player's point of view.
// Only its own dice are known; every other die is an independent fair roll.

use crate::{
    bid::Bid,
    challenge::matching_count,
    config::{FACES, WILD_FACE},
    dice::Die,
};

/// Chance that one unseen die supports a bid on `face`.
pub fn face_probability(face: u8) -> f64 {
    if !(1..=FACES).contains(&face) {
        0.0
    } else if face == WILD_FACE {
        1.0 / FACES as f64
    } else {
        2.0 / FACES as f64
    }
}

/// ln P(X = i) for X ~ Binomial(n, p), with 0 < p < 1.
fn ln_pmf(n: usize, i: usize, p: f64) -> f64 {
    let (n, i) = (n as f64, i as f64);
    libm::lgamma(n + 1.0) - libm::lgamma(i + 1.0) - libm::lgamma(n - i + 1.0)
        + i * libm::log(p)
        + (n - i) * libm::log(1.0 - p)
}

/// P(X >= k) for X ~ Binomial(n, p).
pub fn at_least(n: usize, k: usize, p: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }
    if k > n || p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    // Terms are summed in log space so large tables do not underflow.
    // Below the mean the lower tail is the shorter sum.
    let tail = if (k as f64) <= n as f64 * p {
        1.0 - (0..k).map(|i| libm::exp(ln_pmf(n, i, p))).sum::<f64>()
    } else {
        (k..=n).map(|i| libm::exp(ln_pmf(n, i, p))).sum::<f64>()
    };
    tail.clamp(0.0, 1.0)
}

/// Expected number of dice supporting `face` given the player's hand.
pub fn expected_count(face: u8, own_dice: &[Die], total_dice: usize) -> f64 {
    let unknown = total_dice.saturating_sub(own_dice.len());
    matching_count(face, own_dice) as f64 + unknown as f64 * face_probability(face)
}

/// Chance that `bid` is met, given the player's hand and the dice in play.
pub fn bid_probability(bid: &Bid, own_dice: &[Die], total_dice: usize) -> f64 {
    let known = matching_count(bid.face, own_dice);
    let needed = (bid.quantity as usize).saturating_sub(known);
    let unknown = total_dice.saturating_sub(own_dice.len());
    at_least(unknown, needed, face_probability(bid.face))
}
