//! Core domain types for the position oracle.

use serde::{Deserialize, Serialize};
use std::ops::BitOr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Player {
    /// First player, encoded as trit value 1.
    #[serde(rename = "player_a")]
    A,
    /// Second player, encoded as trit value 2.
    #[serde(rename = "player_b")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Trit value used in the state encoding.
    pub fn value(self) -> u32 {
        match self {
            Player::A => 1,
            Player::B => 2,
        }
    }

    /// Single-character mark for text rendering.
    pub fn mark(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "PlayerA"),
            Player::B => write!(f, "PlayerB"),
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// Empty cell (trit 0).
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Occupant {
    /// Trit value of this occupant.
    pub fn value(self) -> u32 {
        match self {
            Occupant::Empty => 0,
            Occupant::Occupied(player) => player.value(),
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        Occupant::Occupied(player)
    }
}

/// Classification of a position.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameStatus {
    /// Nobody is one move from winning.
    Normal,
    /// At least one player can complete a line with their next mark.
    GamePoint,
    /// A line has been completed.
    GameOver,
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Checks whether no further moves are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Draw)
    }
}

/// The player (or players) ahead in a position.
///
/// `Either` is produced only when both players independently threaten
/// to complete a line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum LeadingPlayer {
    /// No leader.
    #[default]
    None,
    /// Player A leads.
    PlayerA,
    /// Player B leads.
    PlayerB,
    /// Both players are one move from a line.
    Either,
}

impl LeadingPlayer {
    /// Merges two leaders: any mix of A and B yields `Either`.
    pub fn combine(self, other: LeadingPlayer) -> LeadingPlayer {
        use LeadingPlayer::*;
        match (self, other) {
            (None, x) | (x, None) => x,
            (PlayerA, PlayerA) => PlayerA,
            (PlayerB, PlayerB) => PlayerB,
            _ => Either,
        }
    }

    /// Checks whether the given player is (one of) the leaders.
    pub fn includes(self, player: Player) -> bool {
        matches!(
            (self, player),
            (LeadingPlayer::Either, _)
                | (LeadingPlayer::PlayerA, Player::A)
                | (LeadingPlayer::PlayerB, Player::B)
        )
    }
}

impl From<Player> for LeadingPlayer {
    fn from(player: Player) -> Self {
        match player {
            Player::A => LeadingPlayer::PlayerA,
            Player::B => LeadingPlayer::PlayerB,
        }
    }
}

impl BitOr for LeadingPlayer {
    type Output = LeadingPlayer;

    fn bitor(self, rhs: LeadingPlayer) -> LeadingPlayer {
        self.combine(rhs)
    }
}

impl BitOr<Player> for LeadingPlayer {
    type Output = LeadingPlayer;

    fn bitor(self, rhs: Player) -> LeadingPlayer {
        self.combine(rhs.into())
    }
}

/// Precomputed classification of one encoded state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessStateInfo {
    /// Position status.
    status: GameStatus,
    /// Winner, or player(s) one move from winning.
    leading_player: LeadingPlayer,
    /// Cells relevant to the status, ascending:
    /// Normal - empty cells;
    /// GamePoint - cells completing a line for the leader(s);
    /// GameOver - the completed line;
    /// Draw - none.
    key_indices: Vec<usize>,
}

impl ChessStateInfo {
    pub(crate) fn new(
        status: GameStatus,
        leading_player: LeadingPlayer,
        key_indices: Vec<usize>,
    ) -> Self {
        Self {
            status,
            leading_player,
            key_indices,
        }
    }

    /// Returns the position status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the leading player.
    pub fn leading_player(&self) -> LeadingPlayer {
        self.leading_player
    }

    /// Returns the key cell indices.
    pub fn key_indices(&self) -> &[usize] {
        &self.key_indices
    }
}

impl std::fmt::Display for ChessStateInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "status {}, leading {}, key cells {:?}",
            self.status, self.leading_player, self.key_indices
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_is_or() {
        assert_eq!(LeadingPlayer::None | Player::A, LeadingPlayer::PlayerA);
        assert_eq!(LeadingPlayer::PlayerA | Player::A, LeadingPlayer::PlayerA);
        assert_eq!(LeadingPlayer::PlayerA | Player::B, LeadingPlayer::Either);
        assert_eq!(
            LeadingPlayer::Either | LeadingPlayer::None,
            LeadingPlayer::Either
        );
    }

    #[test]
    fn test_includes() {
        assert!(LeadingPlayer::Either.includes(Player::B));
        assert!(LeadingPlayer::PlayerA.includes(Player::A));
        assert!(!LeadingPlayer::PlayerA.includes(Player::B));
        assert!(!LeadingPlayer::None.includes(Player::A));
    }

    #[test]
    fn test_occupant_values() {
        assert_eq!(Occupant::Empty.value(), 0);
        assert_eq!(Occupant::from(Player::A).value(), 1);
        assert_eq!(Occupant::from(Player::B).value(), 2);
    }
}
