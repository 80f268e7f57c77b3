//! Decoded board view.

use crate::encoding::{NUM_OF_CELLS, StateCode, encode};
use crate::position::Position;
use crate::types::{Occupant, Player};
use serde::{Deserialize, Serialize};

/// 3x3 board with one occupant per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Occupant; NUM_OF_CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Occupant::Empty; NUM_OF_CELLS],
        }
    }

    /// Decodes a state.
    pub fn from_state(code: StateCode) -> Self {
        Self {
            cells: code.occupants(),
        }
    }

    /// Re-encodes the board.
    pub fn state(&self) -> StateCode {
        encode(&self.cells)
    }

    /// Gets the occupant at the given position.
    pub fn get(&self, pos: Position) -> Occupant {
        self.cells[pos.to_index()]
    }

    /// Sets the occupant at the given position.
    pub fn set(&mut self, pos: Position, occupant: Occupant) {
        self.cells[pos.to_index()] = occupant;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Occupant; NUM_OF_CELLS] {
        &self.cells
    }

    /// Empty cell indices, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        Position::ALL
            .iter()
            .filter(|pos| self.is_empty(**pos))
            .map(|pos| pos.to_index())
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based keypad number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.cells[idx] {
                    Occupant::Empty => char::from(b'1' + idx as u8),
                    Occupant::Occupied(player) => player.mark(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<StateCode> for Board {
    fn from(code: StateCode) -> Self {
        Self::from_state(code)
    }
}

impl FromIterator<(Position, Player)> for Board {
    fn from_iter<I: IntoIterator<Item = (Position, Player)>>(iter: I) -> Self {
        let mut board = Board::new();
        for (pos, player) in iter {
            board.set(pos, Occupant::Occupied(player));
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_layout() {
        let board: Board = [(Position::TopLeft, Player::A), (Position::Center, Player::B)]
            .into_iter()
            .collect();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_state_round_trip() {
        let board: Board = [
            (Position::TopRight, Player::B),
            (Position::BottomLeft, Player::A),
        ]
        .into_iter()
        .collect();
        let code = board.state();
        assert_eq!(code.value(), 2 * 9 + 729);
        assert_eq!(Board::from_state(code), board);
    }

    #[test]
    fn test_empty_indices() {
        let board: Board = [(Position::TopCenter, Player::A)].into_iter().collect();
        assert_eq!(board.empty_indices(), vec![0, 2, 3, 4, 5, 6, 7, 8]);
    }
}
