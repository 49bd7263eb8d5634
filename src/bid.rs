use crate::common::BidError;
use core::fmt;

/// Claim that at least `quantity` dice in play show `face`, ones being wild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Bid {
    pub quantity: u32,
    pub face: u8,
}

impl Bid {
    /// Build a bid, rejecting a zero quantity. The face is not range checked.
    pub fn new(quantity: u32, face: u8) -> Result<Self, BidError> {
        let bid = Self { quantity, face };
        bid.validate()?;
        Ok(bid)
    }

    pub fn validate(&self) -> Result<(), BidError> {
        if self.quantity == 0 {
            return Err(BidError::ZeroQuantity);
        }
        Ok(())
    }

    /// Standard raising order: more dice, or as many dice of a higher face.
    pub fn outranks(&self, other: &Bid) -> bool {
        self.quantity > other.quantity
            || (self.quantity == other.quantity && self.face > other.face)
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.quantity, self.face)
    }
}

/// What a player does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Replace the standing bid.
    Bid(Bid),
    /// Call "liar" on the standing bid.
    Challenge,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Bid(bid) => write!(f, "bid {}", bid),
            Action::Challenge => write!(f, "liar"),
        }
    }
}
