//! Commonly used types and utilities for ease of import.

pub use crate::{
    judge, simulate, Action, Bid, GameConfig, GameError, GameOutcome, NaiveStrategy,
    OddsStrategy, PlayerId, Strategies, Strategy, WinHistory,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_tournament, TournamentConfig, TournamentReport};
