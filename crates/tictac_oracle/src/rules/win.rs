//! Win detection logic.

use crate::{Board, Occupant, Player, Position};
use tracing::instrument;

/// The eight lines, in the order they are checked.
pub const WIN_CONDITIONS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its owner.
///
/// Lines are scanned in [`WIN_CONDITIONS`] order, so on boards where both
/// players hold a line the earlier line decides.
#[instrument(level = "trace")]
pub fn completed_line(board: &Board) -> Option<(Player, [Position; 3])> {
    WIN_CONDITIONS.into_iter().find_map(|line @ [a, b, c]| {
        match (board.get(a), board.get(b), board.get(c)) {
            (Occupant::Occupied(p), Occupant::Occupied(q), Occupant::Occupied(r))
                if p == q && q == r =>
            {
                Some((p, line))
            }
            _ => None,
        }
    })
}
