//! Headless tic-tac-toe matches on top of the position oracle.
//!
//! # Architecture
//!
//! - **Arena**: board state, turn order and running score ([`Match`])
//! - **Selector**: randomized bot moves from the oracle's key cells
//! - **Players**: bot and line-input human behind one async trait
//! - **Orchestrator**: drives a game between two players and emits events
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tictac_arena::Match;
//! use tictac_oracle::{GameStatus, Player, Position, StateClassifier};
//!
//! let mut game = Match::new(Arc::new(StateClassifier::new()), 10);
//! game.start(Player::A);
//! game.play(Position::TopLeft)?;
//! game.play(Position::Center)?;
//! let info = game.play(Position::TopCenter)?;
//! assert_eq!(info.status(), GameStatus::GamePoint);
//! # Ok::<(), tictac_arena::MatchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod config;
mod orchestrator;
mod players;
mod selector;

pub use arena::{Match, MatchError, Outcome, Score};
pub use config::{ArenaConfig, BotSeat, ConfigError, FirstPlayer};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{BotPlayer, HumanPlayer, Player};
pub use selector::pick_move;
