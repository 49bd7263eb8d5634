//! Judging "liar" calls.

use crate::{bid::Bid, common::BidError, config::WILD_FACE, dice::Die};

/// Dice that support a bid on `face`: literal ones for a bid on ones,
/// otherwise ones plus `face`.
pub fn matching_count(face: u8, dice: &[Die]) -> usize {
    dice.iter()
        .filter(|&&d| d == face || (face != WILD_FACE && d == WILD_FACE))
        .count()
}

/// Returns `true` when a challenge against `bid` is correct, i.e. fewer than
/// `bid.quantity` dice support it. Meeting the quantity exactly upholds the bid.
pub fn judge(bid: &Bid, dice: &[Die]) -> Result<bool, BidError> {
    bid.validate()?;
    Ok(bid.quantity as usize > matching_count(bid.face, dice))
}
