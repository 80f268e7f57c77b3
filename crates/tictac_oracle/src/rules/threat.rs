//! Game-point detection: lines one mark away from completion.

use super::win::WIN_CONDITIONS;
use crate::{Board, LeadingPlayer, Occupant, Player, Position};
use std::collections::BTreeSet;
use tracing::instrument;

/// Open threats on a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Threats {
    /// Player(s) holding at least one threat.
    pub leader: LeadingPlayer,
    /// Cells that complete a threatened line, deduplicated and ascending.
    pub cells: BTreeSet<usize>,
}

impl Threats {
    /// Checks if no line is one mark away.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Collects every line holding two marks of one player and one empty cell.
#[instrument(level = "trace")]
pub fn find_threats(board: &Board) -> Threats {
    let mut threats = Threats::default();
    for line in WIN_CONDITIONS {
        if let Some((player, gap)) = open_cell(board, line) {
            threats.leader = threats.leader | player;
            threats.cells.insert(gap.to_index());
        }
    }
    threats
}

/// Matches `(_, P, P)`, `(P, _, P)` and `(P, P, _)`.
fn open_cell(board: &Board, [a, b, c]: [Position; 3]) -> Option<(Player, Position)> {
    use Occupant::{Empty, Occupied};
    match (board.get(a), board.get(b), board.get(c)) {
        (Empty, Occupied(p), Occupied(q)) if p == q => Some((p, a)),
        (Occupied(p), Empty, Occupied(q)) if p == q => Some((p, b)),
        (Occupied(p), Occupied(q), Empty) if p == q => Some((p, c)),
        _ => None,
    }
}
