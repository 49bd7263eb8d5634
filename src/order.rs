//! Round ordering and previous-bidder lookup.

use crate::common::PlayerId;
use alloc::vec::Vec;
use rand::{seq::SliceRandom, Rng};

/// Seating for one round. `leader`, when given, opens the round and the rest
/// of `active` follows, shuffled if `randomize` is set.
pub fn round_order<R: Rng + ?Sized>(
    rng: &mut R,
    active: &[PlayerId],
    leader: Option<PlayerId>,
    randomize: bool,
) -> Vec<PlayerId> {
    let mut order: Vec<PlayerId> = active
        .iter()
        .copied()
        .filter(|&p| Some(p) != leader)
        .collect();
    if randomize {
        order.shuffle(rng);
    }
    if let Some(l) = leader {
        order.insert(0, l);
    }
    order
}

/// Closest entry before `position` in `order`, wrapping around, for which
/// `is_active` holds. Visits each slot at most once, ending on `position`
/// itself. Returns `None` for an out-of-range position or when no entry is
/// active.
pub fn previous_active<F>(order: &[PlayerId], position: usize, is_active: F) -> Option<PlayerId>
where
    F: Fn(PlayerId) -> bool,
{
    let len = order.len();
    if position >= len {
        return None;
    }
    (1..=len)
        .map(|step| order[(position + len - step) % len])
        .find(|&p| is_active(p))
}
