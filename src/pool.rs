//! Per-player dice pools and the active player set.

use crate::{
    common::{GameError, PlayerId},
    dice::{roll_dice, Die, FaceCounts},
};
use alloc::{collections::BTreeMap, vec::Vec};
use rand::Rng;

/// Result of taking a single die away from a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    /// The player keeps playing with `remaining` dice.
    DieLost { die: Die, remaining: usize },
    /// The last die was removed and the player left the game.
    Eliminated { die: Die },
}

/// Dice held by every player still in the game.
///
/// A player is active exactly while it has an entry here, and entries are
/// never left empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DicePools {
    pools: BTreeMap<PlayerId, Vec<Die>>,
}

impl DicePools {
    /// Roll `num_dice` dice for each of `num_players` players and return the
    /// pools together with the histogram of the opening roll.
    pub fn initialize<R: Rng + ?Sized>(
        rng: &mut R,
        num_players: usize,
        num_dice: usize,
    ) -> (Self, FaceCounts) {
        let mut counts = FaceCounts::new();
        let mut pools = BTreeMap::new();
        for player in 0..num_players {
            let dice = roll_dice(rng, num_dice);
            counts.add(&dice);
            pools.insert(player, dice);
        }
        (Self { pools }, counts)
    }

    /// Build pools from explicit dice, skipping empty hands.
    pub fn from_hands<I>(hands: I) -> Self
    where
        I: IntoIterator<Item = (PlayerId, Vec<Die>)>,
    {
        Self {
            pools: hands.into_iter().filter(|(_, d)| !d.is_empty()).collect(),
        }
    }

    /// Every die held by an active player, in player order.
    pub fn aggregate(&self) -> Vec<Die> {
        self.pools.values().flatten().copied().collect()
    }

    pub fn total_dice(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    /// Dice held by `player`, or an empty slice once eliminated.
    pub fn dice(&self, player: PlayerId) -> &[Die] {
        self.pools.get(&player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_active(&self, player: PlayerId) -> bool {
        self.pools.contains_key(&player)
    }

    /// Active players in ascending id order.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.pools.keys().copied().collect()
    }

    pub fn active_count(&self) -> usize {
        self.pools.len()
    }

    /// Remove `player` from the game, returning the discarded dice.
    pub fn eliminate(&mut self, player: PlayerId) -> Result<Vec<Die>, GameError> {
        self.pools
            .remove(&player)
            .ok_or(GameError::InactivePlayer(player))
    }

    /// Remove one uniformly chosen die from `player`, eliminating the player
    /// when no dice are left.
    pub fn apply_special_penalty<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        player: PlayerId,
    ) -> Result<Penalty, GameError> {
        let dice = self
            .pools
            .get_mut(&player)
            .ok_or(GameError::InactivePlayer(player))?;
        let die = dice.remove(rng.random_range(0..dice.len()));
        if dice.is_empty() {
            self.pools.remove(&player);
            Ok(Penalty::Eliminated { die })
        } else {
            Ok(Penalty::DieLost {
                die,
                remaining: dice.len(),
            })
        }
    }
}
