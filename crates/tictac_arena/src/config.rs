//! Arena configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_oracle::Player;
use tracing::{debug, info, instrument};

/// Which player opens each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayer {
    /// Coin flip before every game.
    #[default]
    Random,
    /// Player A always opens.
    PlayerA,
    /// Player B always opens.
    PlayerB,
}

impl FirstPlayer {
    /// Resolves to a concrete player, flipping a coin for `Random`.
    pub fn resolve<R: rand::Rng + ?Sized>(self, rng: &mut R) -> Player {
        match self {
            Self::Random => {
                if rng.gen_bool(0.5) {
                    Player::A
                } else {
                    Player::B
                }
            }
            Self::PlayerA => Player::A,
            Self::PlayerB => Player::B,
        }
    }
}

/// Which side the bot plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum BotSeat {
    /// Bot plays A.
    PlayerA,
    /// Bot plays B.
    #[default]
    PlayerB,
    /// No bot; both sides are human.
    None,
}

impl BotSeat {
    /// The bot's player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Self::PlayerA => Some(Player::A),
            Self::PlayerB => Some(Player::B),
            Self::None => None,
        }
    }
}

/// Settings for matches.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Who opens each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Seat taken by the bot in interactive play.
    #[serde(default)]
    bot_seat: BotSeat,

    /// Score at which both tallies reset before the next game.
    #[serde(default = "default_winning_score")]
    winning_score: u32,

    /// Seed for bot moves and coin flips; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause after each move, in milliseconds.
    #[serde(default)]
    move_delay_ms: u64,
}

fn default_winning_score() -> u32 {
    10
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            bot_seat: BotSeat::default(),
            winning_score: default_winning_score(),
            seed: None,
            move_delay_ms: 0,
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.winning_score == 0 {
            return Err(ConfigError::new("winning_score must be at least 1"));
        }
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the opener.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Overrides the bot seat.
    pub fn with_bot_seat(mut self, bot_seat: BotSeat) -> Self {
        self.bot_seat = bot_seat;
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the per-move delay.
    pub fn with_move_delay_ms(mut self, move_delay_ms: u64) -> Self {
        self.move_delay_ms = move_delay_ms;
        self
    }

    /// Seed for the bot playing `player`, offset from the base seed so the
    /// two sides draw different sequences. Wraps at `u64::MAX`.
    pub fn bot_seed(&self, player: Player) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(u64::from(player.value())))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
