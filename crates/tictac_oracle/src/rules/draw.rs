//! Full-board detection.

use crate::{Board, Occupant};

/// Checks if every cell is occupied.
///
/// A full board with no completed line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Occupant::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::completed_line;
    use super::*;
    use crate::{Player, Position};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && completed_line(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = [(Position::Center, Player::A)].into_iter().collect();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X O / O X O
        let marks = [
            Player::A,
            Player::B,
            Player::A,
            Player::B,
            Player::A,
            Player::B,
            Player::B,
            Player::A,
            Player::B,
        ];
        let board: Board = Position::ALL.into_iter().zip(marks).collect();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = Position::ALL.into_iter().map(|p| (p, Player::A)).collect();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
