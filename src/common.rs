//! Common types for Liar's Dice: player identifiers and engine errors.

/// Identifier of a seat at the table. Players are numbered `0..num_players`.
pub type PlayerId = usize;

/// Reasons a bid cannot be accepted or judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidError {
    /// Bid quantity must be at least one die.
    ZeroQuantity,
    /// A player called "liar" while no bid was standing.
    NothingToChallenge { player: PlayerId },
}

/// Reasons a game cannot be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// At least two players are needed.
    TooFewPlayers(usize),
    /// Every player must start with at least one die.
    NoDice,
    /// No strategy was supplied for this player.
    MissingStrategy(PlayerId),
    /// The fixed first caller is not seated at the table.
    UnknownFirstCaller(PlayerId),
}

/// Errors returned by the simulation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Rejected before any dice were rolled.
    InvalidConfiguration(ConfigError),
    /// A strategy produced a malformed bid or an illegal challenge.
    InvalidBid(BidError),
    /// The optional turn guard was hit before a winner emerged.
    TurnLimitExceeded { turns: u64 },
    /// A pool operation targeted a player that is no longer in the game.
    InactivePlayer(PlayerId),
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::InvalidConfiguration(err)
    }
}

impl From<BidError> for GameError {
    fn from(err: BidError) -> Self {
        GameError::InvalidBid(err)
    }
}

impl core::fmt::Display for BidError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BidError::ZeroQuantity => write!(f, "bid quantity must be positive"),
            BidError::NothingToChallenge { player } => {
                write!(f, "player {} challenged with no bid standing", player)
            }
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::TooFewPlayers(n) => {
                write!(f, "number of players must be at least 2, got {}", n)
            }
            ConfigError::NoDice => write!(f, "number of dice must be greater than 0"),
            ConfigError::MissingStrategy(p) => write!(f, "no strategy for player {}", p),
            ConfigError::UnknownFirstCaller(p) => {
                write!(f, "first caller {} is not seated at the table", p)
            }
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidConfiguration(e) => write!(f, "invalid configuration: {}", e),
            GameError::InvalidBid(e) => write!(f, "invalid bid: {}", e),
            GameError::TurnLimitExceeded { turns } => {
                write!(f, "no winner after {} turns", turns)
            }
            GameError::InactivePlayer(p) => write!(f, "player {} is not active", p),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
