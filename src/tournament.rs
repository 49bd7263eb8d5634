#![cfg(feature = "std")]

//! Batch runner for many independent games.
//!
//! Game `i` is played with its own `SmallRng` seeded from `seed + i` and a
//! fresh set of strategies, so games can run on any thread. Outcomes are
//! folded in game order on the calling thread, which is the only writer of
//! the win history.

use std::collections::BTreeMap;

use log::info;
use rand::{rngs::SmallRng, SeedableRng};
use rayon::prelude::*;

use crate::{
    common::{GameError, PlayerId},
    config::GameConfig,
    game::{simulate, GameOutcome},
    record::WinHistory,
    strategy::Strategies,
};

/// Parameters for a batch of games.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TournamentConfig {
    pub game: GameConfig,
    pub games: u64,
    pub seed: u64,
    /// Spread games across the rayon thread pool.
    pub parallel: bool,
}

/// Aggregated results of a batch.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct TournamentReport {
    pub games: u64,
    pub wins: BTreeMap<PlayerId, u64>,
    pub first_players: BTreeMap<PlayerId, u64>,
    pub total_bids: u64,
    pub total_challenges: u64,
    pub win_history: WinHistory,
}

impl TournamentReport {
    fn new(num_players: usize) -> Self {
        Self {
            wins: (0..num_players).map(|p| (p, 0)).collect(),
            first_players: (0..num_players).map(|p| (p, 0)).collect(),
            ..Self::default()
        }
    }

    fn absorb(&mut self, summary: GameSummary, num_players: usize) {
        self.games += 1;
        *self.wins.entry(summary.winner).or_default() += 1;
        *self.first_players.entry(summary.first_player).or_default() += 1;
        self.total_bids += summary.total_bids;
        self.total_challenges += summary.challenges;
        self.win_history
            .record(summary.winner, num_players, self.games);
    }

    /// Share of games won by `player`.
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins.get(&player).copied().unwrap_or(0) as f64 / self.games as f64
    }
}

/// The parts of a finished game the report keeps; the action log is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GameSummary {
    winner: PlayerId,
    first_player: PlayerId,
    total_bids: u64,
    challenges: u64,
}

impl From<GameOutcome> for GameSummary {
    fn from(outcome: GameOutcome) -> Self {
        Self {
            winner: outcome.winner,
            first_player: outcome.first_player,
            total_bids: outcome.record.total_bids,
            challenges: outcome.record.challenges.len() as u64,
        }
    }
}

fn play_one<F>(config: &TournamentConfig, index: u64, make_strategies: &F) -> Result<GameSummary, GameError>
where
    F: Fn() -> Strategies,
{
    let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(index));
    let mut strategies = make_strategies();
    simulate(&config.game, &mut strategies, &mut rng, None).map(GameSummary::from)
}

/// Play `config.games` games and aggregate their outcomes.
pub fn run_tournament<F>(config: &TournamentConfig, make_strategies: F) -> Result<TournamentReport, GameError>
where
    F: Fn() -> Strategies + Sync,
{
    config.game.validate()?;
    let num_players = config.game.num_players;
    let mut report = TournamentReport::new(num_players);
    if config.parallel {
        let summaries: Vec<GameSummary> = (0..config.games)
            .into_par_iter()
            .map(|i| play_one(config, i, &make_strategies))
            .collect::<Result<_, _>>()?;
        for summary in summaries {
            report.absorb(summary, num_players);
        }
    } else {
        for i in 0..config.games {
            report.absorb(play_one(config, i, &make_strategies)?, num_players);
        }
    }
    info!(
        "played {} games ({} actions, {} challenges)",
        report.games, report.total_bids, report.total_challenges
    );
    Ok(report)
}
