//! Command-line interface for tictac.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictac_arena::{BotSeat, FirstPlayer};

/// Tic-tac-toe position oracle and headless arena
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Classify tic-tac-toe positions and play the oracle bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if missing)
    #[arg(long, global = true, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Opener choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstArg {
    /// Coin flip per game
    Random,
    /// Player A (X) opens
    A,
    /// Player B (O) opens
    B,
}

impl From<FirstArg> for FirstPlayer {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Random => FirstPlayer::Random,
            FirstArg::A => FirstPlayer::PlayerA,
            FirstArg::B => FirstPlayer::PlayerB,
        }
    }
}

/// Bot seat choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeatArg {
    /// Bot plays A (X)
    A,
    /// Bot plays B (O)
    B,
    /// Two humans share the keyboard
    None,
}

impl From<SeatArg> for BotSeat {
    fn from(arg: SeatArg) -> Self {
        match arg {
            SeatArg::A => BotSeat::PlayerA,
            SeatArg::B => BotSeat::PlayerB,
            SeatArg::None => BotSeat::None,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the classification of an encoded state
    Classify {
        /// Encoded state in [0, 19683)
        #[arg(allow_negative_numbers = true)]
        state: i64,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render the board of an encoded state with its classification
    Show {
        /// Encoded state in [0, 19683)
        #[arg(allow_negative_numbers = true)]
        state: i64,
    },

    /// Summarize the whole classification table
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play interactively on stdin
    Play {
        /// Who opens each game
        #[arg(long, value_enum)]
        first: Option<FirstArg>,

        /// Which side the bot takes
        #[arg(long, value_enum)]
        bot: Option<SeatArg>,

        /// RNG seed for the bot
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Bot versus bot
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Who opens each game
        #[arg(long, value_enum)]
        first: Option<FirstArg>,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
}
