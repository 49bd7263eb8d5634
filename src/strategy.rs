use crate::{
    bid::{Action, Bid},
    common::PlayerId,
    dice::Die,
};
use alloc::{boxed::Box, collections::BTreeMap};
use rand::rngs::SmallRng;

/// Interface implemented by bidding strategies.
pub trait Strategy {
    /// Choose an action for the current turn.
    ///
    /// `current_bid` is `None` when the round has no standing bid, in which
    /// case the strategy must return a bid. The engine does not check that a
    /// new bid outranks the previous one.
    fn decide(
        &mut self,
        rng: &mut SmallRng,
        current_bid: Option<Bid>,
        total_dice: usize,
        own_dice: &[Die],
    ) -> Action;

    /// Short label used in reports.
    fn name(&self) -> &str {
        "strategy"
    }
}

/// One strategy per seat.
pub type Strategies = BTreeMap<PlayerId, Box<dyn Strategy>>;
