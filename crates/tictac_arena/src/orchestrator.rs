//! Game orchestration between players.

use crate::arena::{Match, Outcome, Score};
use crate::players::Player;
use anyhow::Result;
use tictac_oracle::{Player as Mark, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game began.
    GameStarted {
        /// Player who opens.
        first: Mark,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the mover.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Cell marked.
        position: Position,
    },
    /// Board text after a move.
    BoardChanged(String),
    /// Game ended.
    GameOver {
        /// How it ended.
        outcome: Outcome,
        /// Tally after this game.
        score: Score,
    },
}

/// Orchestrates games between two players over one match.
pub struct Orchestrator {
    game: Match,
    player_a: Box<dyn Player>,
    player_b: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        game: Match,
        player_a: Box<dyn Player>,
        player_b: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game,
            player_a,
            player_b,
            event_tx,
        }
    }

    /// The underlying match.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Plays one game to completion.
    #[instrument(skip(self))]
    pub async fn run_game(&mut self, first: Mark) -> Result<Outcome> {
        info!("Starting game");
        self.game.start(first);
        self.event_tx.send(GameEvent::GameStarted { first })?;
        self.event_tx
            .send(GameEvent::BoardChanged(self.game.board().display()))?;

        loop {
            if let Some(outcome) = self.game.outcome() {
                info!(?outcome, score = %self.game.score(), "Game finished");
                self.event_tx.send(GameEvent::GameOver {
                    outcome,
                    score: *self.game.score(),
                })?;
                return Ok(outcome);
            }

            let mark = *self.game.to_move();
            let player = match mark {
                Mark::A => &mut self.player_a,
                Mark::B => &mut self.player_b,
            };
            let player_name = player.name().to_string();

            debug!(player = %player_name, %mark, "Waiting for move");
            let position = player.choose_cell(&self.game).await?;
            self.game.play(position)?;

            self.event_tx.send(GameEvent::MoveMade {
                player: player_name,
                mark,
                position,
            })?;
            self.event_tx
                .send(GameEvent::BoardChanged(self.game.board().display()))?;
        }
    }
}
