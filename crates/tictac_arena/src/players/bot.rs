//! Oracle-driven bot player.

use super::Player;
use crate::arena::Match;
use crate::selector::pick_move;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tictac_oracle::Position;
use tracing::debug;

/// Bot that reads the oracle's key cells and picks among them at random.
pub struct BotPlayer {
    name: String,
    rng: StdRng,
    delay: Duration,
}

impl BotPlayer {
    /// Creates a bot; a seed makes its choices reproducible.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            name: name.into(),
            rng,
            delay: Duration::ZERO,
        }
    }

    /// Pauses before each move.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl Player for BotPlayer {
    async fn choose_cell(&mut self, game: &Match) -> Result<Position> {
        debug!(bot = %self.name, "Bot choosing cell");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let me = *game.to_move();
        let pos = pick_move(game.classifier(), *game.state(), me, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(bot = %self.name, position = %pos, "Bot chose cell");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
