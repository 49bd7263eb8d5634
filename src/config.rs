use crate::common::{ConfigError, PlayerId};

/// Number of faces on a die.
pub const FACES: u8 = 6;
/// Face that counts toward every other face.
pub const WILD_FACE: u8 = 1;

pub const DEFAULT_PLAYERS: usize = 5;
pub const DEFAULT_DICE: usize = 5;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV: &str = "LIARS_DICE_LOG";

/// Parameters of a single simulated game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub num_players: usize,
    pub num_dice: usize,
    /// Losers drop one die instead of leaving the game.
    pub special_rule: bool,
    /// Player forced to open every round while still active.
    pub first_caller: Option<PlayerId>,
    /// Shuffle the round order each round.
    pub randomize_order: bool,
    /// 1-based index used when updating a win history. Zero skips the update.
    pub game_number: u64,
    /// Abort after this many actions. `None` runs until a winner emerges.
    pub max_turns: Option<u64>,
}

impl GameConfig {
    pub fn new(num_players: usize, num_dice: usize) -> Self {
        Self {
            num_players,
            num_dice,
            special_rule: false,
            first_caller: None,
            randomize_order: true,
            game_number: 0,
            max_turns: None,
        }
    }

    pub fn with_special_rule(mut self, special_rule: bool) -> Self {
        self.special_rule = special_rule;
        self
    }

    pub fn with_first_caller(mut self, first_caller: Option<PlayerId>) -> Self {
        self.first_caller = first_caller;
        self
    }

    pub fn with_randomize_order(mut self, randomize_order: bool) -> Self {
        self.randomize_order = randomize_order;
        self
    }

    pub fn with_game_number(mut self, game_number: u64) -> Self {
        self.game_number = game_number;
        self
    }

    pub fn with_max_turns(mut self, max_turns: Option<u64>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Check table size, dice count and first caller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_players < 2 {
            return Err(ConfigError::TooFewPlayers(self.num_players));
        }
        if self.num_dice == 0 {
            return Err(ConfigError::NoDice);
        }
        match self.first_caller {
            Some(p) if p >= self.num_players => Err(ConfigError::UnknownFirstCaller(p)),
            _ => Ok(()),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYERS, DEFAULT_DICE)
    }
}
