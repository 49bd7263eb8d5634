#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bid;
mod challenge;
mod common;
mod config;
mod dice;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod odds;
mod order;
mod pool;
pub mod prelude;
mod record;
mod strategy;
mod strategy_naive;
mod strategy_odds;
#[cfg(feature = "std")]
pub mod tournament;

pub use bid::*;
pub use challenge::*;
pub use common::*;
pub use config::*;
pub use dice::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use order::*;
pub use pool::*;
pub use record::*;
pub use strategy::*;
pub use strategy_naive::*;
pub use strategy_odds::*;
#[cfg(feature = "std")]
pub use tournament::{run_tournament, TournamentConfig, TournamentReport};
