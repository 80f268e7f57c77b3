//! Player trait and implementations.

mod bot;
mod human;

pub use bot::BotPlayer;
pub use human::HumanPlayer;

use crate::arena::Match;
use anyhow::Result;
use tictac_oracle::Position;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses the next cell to mark in the current game.
    async fn choose_cell(&mut self, game: &Match) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
