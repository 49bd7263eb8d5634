//! Turn orchestration: round order, turn dispatch, challenge resolution and `simulate`.

use crate::{
    bid::{Action, Bid},
    challenge::judge,
    common::{BidError, ConfigError, GameError, PlayerId},
    config::GameConfig,
    dice::{Die, FaceCounts},
    order::{previous_active, round_order},
    pool::{DicePools, Penalty},
    record::{ChallengeOutcome, GameRecord, Verdict, WinHistory},
    strategy::Strategies,
};
use alloc::vec::Vec;
use log::{debug, trace};
use rand::rngs::SmallRng;

/// Where the game stands between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No standing bid; the next player must bid.
    AwaitingBid,
    /// A bid stands; the next player may raise or challenge.
    AwaitingBidOrChallenge,
    /// One player is left.
    GameOver,
}

/// How a round came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// A challenge was resolved.
    Challenge(ChallengeOutcome),
    /// Every scheduled player acted without a challenge; the bid still stands.
    Exhausted,
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOutcome {
    pub winner: PlayerId,
    /// Player that took the first turn of the game.
    pub first_player: PlayerId,
    pub record: GameRecord,
}

/// Turn order and elimination state machine for one game.
pub struct GameEngine {
    config: GameConfig,
    pools: DicePools,
    current_bid: Option<Bid>,
    leader: Option<PlayerId>,
    first_player: Option<PlayerId>,
    record: GameRecord,
}

impl GameEngine {
    /// Validate `config` and roll the opening dice.
    pub fn new(config: GameConfig, rng: &mut SmallRng) -> Result<Self, GameError> {
        config.validate()?;
        let (pools, counts) = DicePools::initialize(rng, config.num_players, config.num_dice);
        Ok(Self::with_pools(config, pools, counts))
    }

    /// Start from explicit pools instead of a fresh roll. `config` is used
    /// for its rules; table size and dice count come from `pools`.
    pub fn from_pools(config: GameConfig, pools: DicePools) -> Self {
        let counts = FaceCounts::from_dice(&pools.aggregate());
        Self::with_pools(config, pools, counts)
    }

    fn with_pools(config: GameConfig, pools: DicePools, counts: FaceCounts) -> Self {
        Self {
            leader: config.first_caller,
            config,
            pools,
            current_bid: None,
            first_player: None,
            record: GameRecord::new(counts),
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.pools.active_count() <= 1 {
            GamePhase::GameOver
        } else if self.current_bid.is_some() {
            GamePhase::AwaitingBidOrChallenge
        } else {
            GamePhase::AwaitingBid
        }
    }

    pub fn current_bid(&self) -> Option<Bid> {
        self.current_bid
    }

    pub fn pools(&self) -> &DicePools {
        &self.pools
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Sole remaining player once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.pools.active_players().as_slice() {
            [winner] => Some(*winner),
            _ => None,
        }
    }

    /// Player order for the next round. A fixed leader that has been
    /// eliminated is dropped for good.
    pub fn next_round_order(&mut self, rng: &mut SmallRng) -> Vec<PlayerId> {
        if let Some(l) = self.leader {
            if !self.pools.is_active(l) {
                debug!("first caller {} eliminated, rounds open without a fixed leader", l);
                self.leader = None;
            }
        }
        let active = self.pools.active_players();
        round_order(rng, &active, self.leader, self.config.randomize_order)
    }

    /// Play one round: dispatch turns in a freshly computed order until a
    /// challenge is resolved or every scheduled player has acted.
    pub fn play_round(
        &mut self,
        rng: &mut SmallRng,
        strategies: &mut Strategies,
    ) -> Result<RoundEnd, GameError> {
        let order = self.next_round_order(rng);
        self.record.rounds += 1;
        trace!("round {} order {:?}", self.record.rounds, order);

        for (position, &player) in order.iter().enumerate() {
            if !self.pools.is_active(player) {
                continue;
            }
            if let Some(limit) = self.config.max_turns {
                if self.record.total_bids >= limit {
                    return Err(GameError::TurnLimitExceeded { turns: limit });
                }
            }

            let strategy = strategies
                .get_mut(&player)
                .ok_or(ConfigError::MissingStrategy(player))?;
            let action = strategy.decide(
                rng,
                self.current_bid,
                self.pools.total_dice(),
                self.pools.dice(player),
            );
            let turn = self.record.push_action(player, action);
            self.first_player.get_or_insert(player);
            trace!("turn {}: player {} -> {}", turn, player, action);

            match action {
                Action::Bid(bid) => {
                    bid.validate()?;
                    self.current_bid = Some(bid);
                }
                Action::Challenge => {
                    let previous = previous_active(&order, position, |p| self.pools.is_active(p))
                        .unwrap_or(player);
                    let outcome = self.resolve_challenge(rng, turn, player, previous)?;
                    return Ok(RoundEnd::Challenge(outcome));
                }
            }
        }
        Ok(RoundEnd::Exhausted)
    }

    fn resolve_challenge(
        &mut self,
        rng: &mut SmallRng,
        turn: u64,
        challenger: PlayerId,
        previous: PlayerId,
    ) -> Result<ChallengeOutcome, GameError> {
        let bid = self
            .current_bid
            .ok_or(BidError::NothingToChallenge { player: challenger })?;
        let dice: Vec<Die> = self.pools.aggregate();
        let active_players = self.pools.active_count();
        let lie = judge(&bid, &dice)?;
        let (verdict, loser) = if lie {
            (Verdict::Valid, previous)
        } else {
            (Verdict::Invalid, challenger)
        };

        let loser_dice_left = if self.config.special_rule {
            match self.pools.apply_special_penalty(rng, loser)? {
                Penalty::DieLost { remaining, .. } => remaining,
                Penalty::Eliminated { .. } => 0,
            }
        } else {
            self.pools.eliminate(loser)?;
            0
        };
        self.current_bid = None;

        let outcome = ChallengeOutcome {
            turn,
            challenger,
            bid,
            verdict,
            active_players,
            loser,
            loser_dice_left,
        };
        debug!(
            "player {} challenged {} from player {}: {:?}, player {} keeps {} dice",
            challenger, bid, previous, verdict, loser, loser_dice_left
        );
        self.record.push_challenge(outcome);
        Ok(outcome)
    }

    /// Play rounds until a single player remains. A player without a
    /// strategy fails with `MissingStrategy` on its first turn.
    pub fn run(
        mut self,
        rng: &mut SmallRng,
        strategies: &mut Strategies,
    ) -> Result<GameOutcome, GameError> {
        while self.phase() != GamePhase::GameOver {
            self.play_round(rng, strategies)?;
        }
        let winner = self
            .winner()
            .ok_or(ConfigError::TooFewPlayers(self.pools.active_count()))?;
        debug!(
            "player {} wins after {} actions and {} challenges",
            winner,
            self.record.total_bids,
            self.record.challenges.len()
        );
        Ok(GameOutcome {
            winner,
            first_player: self.first_player.unwrap_or(winner),
            record: self.record,
        })
    }
}

/// Simulate one game from the opening roll to a single winner.
///
/// When `win_history` is given and `config.game_number` is positive, every
/// player's cumulative win rate is updated with the result.
pub fn simulate(
    config: &GameConfig,
    strategies: &mut Strategies,
    rng: &mut SmallRng,
    win_history: Option<&mut WinHistory>,
) -> Result<GameOutcome, GameError> {
    config.validate()?;
    for player in 0..config.num_players {
        if !strategies.contains_key(&player) {
            return Err(ConfigError::MissingStrategy(player).into());
        }
    }
    let (pools, counts) = DicePools::initialize(rng, config.num_players, config.num_dice);
    let engine = GameEngine::with_pools(config.clone(), pools, counts);
    let outcome = engine.run(rng, strategies)?;
    if let Some(history) = win_history {
        if config.game_number > 0 {
            history.record(outcome.winner, config.num_players, config.game_number);
        }
    }
    Ok(outcome)
}
