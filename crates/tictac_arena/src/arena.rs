//! Match bookkeeping: board state, turn order and running score.

use derive_getters::Getters;
use derive_more::{Display, Error};
use std::sync::Arc;
use tictac_oracle::{
    Board, ChessStateInfo, GameStatus, LeadingPlayer, OracleError, Player, Position,
    StateClassifier, StateCode,
};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed the given line.
    Won(Player, [Position; 3]),
    /// Board filled without a line.
    Draw,
}

/// Why a move was refused.
#[derive(Debug, Clone, Display, Error)]
pub enum MatchError {
    /// The current game already ended.
    #[display("Game is already over")]
    GameFinished,
    /// The oracle rejected the cell.
    #[display("{}", _0)]
    Oracle(OracleError),
}

impl From<OracleError> for MatchError {
    fn from(err: OracleError) -> Self {
        MatchError::Oracle(err)
    }
}

/// Running per-player tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Score {
    /// Games won by player A.
    player_a: u32,
    /// Games won by player B.
    player_b: u32,
}

impl Score {
    /// Wins for `player`.
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }

    fn record(&mut self, player: Player) {
        match player {
            Player::A => self.player_a += 1,
            Player::B => self.player_b += 1,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.player_a, self.player_b)
    }
}

/// A series of games scored until one side reaches the target.
#[derive(Debug, Clone, Getters)]
pub struct Match {
    #[getter(skip)]
    classifier: Arc<StateClassifier>,
    /// Encoded board of the current game.
    state: StateCode,
    /// Player to move.
    to_move: Player,
    /// Games won so far.
    score: Score,
    /// Score at which the tallies reset.
    winning_score: u32,
    /// Cells played in the current game, in order.
    history: Vec<Position>,
}

impl Match {
    /// Creates a match; call [`Match::start`] before the first move.
    #[instrument(skip(classifier))]
    pub fn new(classifier: Arc<StateClassifier>, winning_score: u32) -> Self {
        Self {
            classifier,
            state: StateCode::EMPTY,
            to_move: Player::A,
            score: Score::default(),
            winning_score,
            history: Vec::new(),
        }
    }

    /// Clears the board for a new game opened by `first`.
    ///
    /// Once either side has reached the winning score, both tallies reset.
    #[instrument(skip(self))]
    pub fn start(&mut self, first: Player) {
        if self.score.player_a >= self.winning_score || self.score.player_b >= self.winning_score
        {
            info!(score = %self.score, "Winning score reached, resetting tallies");
            self.score = Score::default();
        }
        self.state = StateCode::EMPTY;
        self.history.clear();
        self.to_move = first;
        debug!(%first, "New game started");
    }

    /// Classification of the current board.
    pub fn info(&self) -> &ChessStateInfo {
        self.classifier.get(self.state)
    }

    /// Decoded current board.
    pub fn board(&self) -> Board {
        Board::from_state(self.state)
    }

    /// Shared classifier.
    pub fn classifier(&self) -> &StateClassifier {
        &self.classifier
    }

    /// Checks whether the current game has ended.
    pub fn is_over(&self) -> bool {
        self.info().status().is_terminal()
    }

    /// Marks `pos` for the player to move.
    ///
    /// Scores a win, or passes the turn when the game goes on.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<&ChessStateInfo, MatchError> {
        if self.is_over() {
            return Err(MatchError::GameFinished);
        }

        let player = self.to_move;
        self.state = self.state.place(pos, player)?;
        self.history.push(pos);

        let info = self.classifier.get(self.state);
        match info.status() {
            GameStatus::GameOver => {
                self.score.record(player);
                info!(winner = %player, score = %self.score, "Game won");
            }
            GameStatus::Draw => info!(score = %self.score, "Game drawn"),
            GameStatus::Normal | GameStatus::GamePoint => {
                self.to_move = player.opponent();
            }
        }
        debug!(state = %self.state, %info, "Move applied");
        Ok(info)
    }

    /// Result of the current game, once it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        let info = self.info();
        match info.status() {
            GameStatus::Draw => Some(Outcome::Draw),
            GameStatus::GameOver => {
                let winner = match info.leading_player() {
                    LeadingPlayer::PlayerA => Player::A,
                    LeadingPlayer::PlayerB => Player::B,
                    LeadingPlayer::None | LeadingPlayer::Either => {
                        unreachable!("completed line without a single owner")
                    }
                };
                let mut line = [Position::TopLeft; 3];
                for (slot, idx) in line.iter_mut().zip(info.key_indices()) {
                    *slot = Position::from_index(*idx)?;
                }
                Some(Outcome::Won(winner, line))
            }
            GameStatus::Normal | GameStatus::GamePoint => None,
        }
    }
}
