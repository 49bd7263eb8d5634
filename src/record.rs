//! Bid and challenge logs for a game, plus the cross-game win-rate history.

use crate::{
    bid::{Action, Bid},
    common::PlayerId,
    dice::FaceCounts,
};
use alloc::{collections::BTreeMap, vec::Vec};

/// A single action taken by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BidEvent {
    pub player: PlayerId,
    pub action: Action,
}

/// Outcome of a "liar" call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// The challenged bid was not met.
    Valid,
    /// The challenged bid held.
    Invalid,
}

/// One resolved challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ChallengeOutcome {
    /// 1-based index of the challenge among all actions of the game.
    pub turn: u64,
    pub challenger: PlayerId,
    pub bid: Bid,
    pub verdict: Verdict,
    /// Active players when the challenge was made.
    pub active_players: usize,
    /// Player that paid the penalty.
    pub loser: PlayerId,
    /// Dice the loser kept; zero means it left the game.
    pub loser_dice_left: usize,
}

/// Everything recorded while a game was played.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameRecord {
    pub bids: Vec<BidEvent>,
    pub challenges: Vec<ChallengeOutcome>,
    /// Number of actions taken, challenges included.
    pub total_bids: u64,
    pub rounds: u64,
    pub initial_counts: FaceCounts,
}

impl GameRecord {
    pub fn new(initial_counts: FaceCounts) -> Self {
        Self {
            initial_counts,
            ..Self::default()
        }
    }

    /// Append an action and return its 1-based turn index.
    pub fn push_action(&mut self, player: PlayerId, action: Action) -> u64 {
        self.bids.push(BidEvent { player, action });
        self.total_bids += 1;
        self.total_bids
    }

    pub fn push_challenge(&mut self, outcome: ChallengeOutcome) {
        self.challenges.push(outcome);
    }
}

/// Cumulative win rate of every player after each recorded game.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WinHistory {
    rates: BTreeMap<PlayerId, Vec<f64>>,
}

impl WinHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the rates after game `game_number` (1-based) for players
    /// `0..num_players`: `(previous * (n - 1) + won) / n`.
    pub fn record(&mut self, winner: PlayerId, num_players: usize, game_number: u64) {
        if game_number == 0 {
            return;
        }
        let n = game_number as f64;
        for player in 0..num_players {
            let series = self.rates.entry(player).or_default();
            let previous = if game_number > 1 {
                series.last().copied().unwrap_or(0.0)
            } else {
                0.0
            };
            let won = if player == winner { 1.0 } else { 0.0 };
            series.push((previous * (n - 1.0) + won) / n);
        }
    }

    pub fn series(&self, player: PlayerId) -> &[f64] {
        self.rates.get(&player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn latest(&self, player: PlayerId) -> Option<f64> {
        self.series(player).last().copied()
    }

    /// Number of games recorded for the longest series.
    pub fn games_recorded(&self) -> usize {
        self.rates.values().map(Vec::len).max().unwrap_or(0)
    }
}
