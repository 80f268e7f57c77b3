//! Human player fed by text input lines.

use super::Player;
use crate::arena::Match;
use anyhow::Result;
use std::sync::Arc;
use tictac_oracle::Position;
use tokio::sync::{Mutex, mpsc};
use tracing::warn;

/// Input stream that several human players can take turns reading.
pub type InputLines = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Human player reading keypad numbers (1-9) or cell labels.
pub struct HumanPlayer {
    name: String,
    input_rx: InputLines,
}

impl HumanPlayer {
    /// Creates a new human player with its own input stream.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self::sharing(name, Arc::new(Mutex::new(input_rx)))
    }

    /// Creates a human player reading from a shared input stream.
    ///
    /// Only the player to move awaits input, so two players at one
    /// keyboard never race for a line.
    pub fn sharing(name: impl Into<String>, input_rx: InputLines) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn choose_cell(&mut self, game: &Match) -> Result<Position> {
        let board = game.board();
        let mut input = self.input_rx.lock().await;
        while let Some(line) = input.recv().await {
            match Position::from_keypad_or_label(&line) {
                Some(pos) if board.is_empty(pos) => return Ok(pos),
                Some(pos) => warn!(player = %self.name, %pos, "Cell already taken"),
                None => warn!(player = %self.name, input = %line.trim(), "Unrecognized cell"),
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
