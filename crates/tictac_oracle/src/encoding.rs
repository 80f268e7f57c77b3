//! Base-3 board encoding.
//!
//! A board is an integer in `[0, 3^9)`; cell `i` holds the trit at weight
//! `3^i` (0 = empty, 1 = player A, 2 = player B).

use crate::error::{OracleError, OracleErrorKind};
use crate::position::Position;
use crate::types::{Occupant, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const NUM_OF_CELLS: usize = 9;

/// Number of distinct encodings, `3^9`.
pub const NUM_OF_STATES: usize = 19683;

/// Per-cell weight, `POW[i] = 3^i`.
pub const POW: [u32; NUM_OF_CELLS] = {
    let mut pow = [1u32; NUM_OF_CELLS];
    let mut i = 1;
    while i < NUM_OF_CELLS {
        pow[i] = pow[i - 1] * 3;
        i += 1;
    }
    pow
};

/// A validated encoded state.
///
/// Holding a `StateCode` proves the value lies in `[0, NUM_OF_STATES)`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u32")]
pub struct StateCode(u16);

impl StateCode {
    /// The empty board.
    pub const EMPTY: StateCode = StateCode(0);

    /// Validates a raw integer.
    #[track_caller]
    pub fn new(state: i64) -> Result<Self, OracleError> {
        if (0..NUM_OF_STATES as i64).contains(&state) {
            Ok(Self(state as u16))
        } else {
            Err(OracleError::new(OracleErrorKind::InvalidState(state)))
        }
    }

    /// Raw integer value.
    pub fn value(self) -> u32 {
        u32::from(self.0)
    }

    /// Table index.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Occupant of a cell.
    pub fn occupant(self, pos: Position) -> Occupant {
        trit_to_occupant(self.value() / POW[pos.to_index()] % 3)
    }

    /// Decodes all nine cells.
    pub fn occupants(self) -> [Occupant; NUM_OF_CELLS] {
        let mut cells = [Occupant::Empty; NUM_OF_CELLS];
        for pos in Position::ALL {
            cells[pos.to_index()] = self.occupant(pos);
        }
        cells
    }

    /// State after `player` marks `pos`.
    ///
    /// Fails if the cell is already occupied.
    #[instrument]
    pub fn place(self, pos: Position, player: Player) -> Result<StateCode, OracleError> {
        if !self.occupant(pos).is_empty() {
            return Err(OracleError::new(OracleErrorKind::CellOccupied(
                pos.to_index(),
            )));
        }
        let next = self.value() + POW[pos.to_index()] * player.value();
        Ok(Self(next as u16))
    }

    /// Iterates every valid state in ascending order.
    pub fn all() -> impl Iterator<Item = StateCode> {
        (0..NUM_OF_STATES as u16).map(StateCode)
    }
}

impl TryFrom<i64> for StateCode {
    type Error = OracleError;

    #[track_caller]
    fn try_from(state: i64) -> Result<Self, Self::Error> {
        Self::new(state)
    }
}

impl From<StateCode> for u32 {
    fn from(code: StateCode) -> u32 {
        code.value()
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a raw cell index.
#[track_caller]
pub fn cell(cell_index: i64) -> Result<Position, OracleError> {
    usize::try_from(cell_index)
        .ok()
        .and_then(Position::from_index)
        .ok_or_else(|| OracleError::new(OracleErrorKind::InvalidCell(cell_index)))
}

/// Returns the occupant of `cell_index` in `state`.
///
/// Both arguments are validated; out-of-domain values are rejected.
#[track_caller]
pub fn occupant_at(state: i64, cell_index: i64) -> Result<Occupant, OracleError> {
    let pos = cell(cell_index)?;
    let code = StateCode::new(state)?;
    Ok(code.occupant(pos))
}

/// Decodes every cell of `state`.
#[track_caller]
pub fn decode(state: i64) -> Result<[Occupant; NUM_OF_CELLS], OracleError> {
    Ok(StateCode::new(state)?.occupants())
}

/// Encodes nine occupants as `sum(occupant[i] * POW[i])`.
pub fn encode(cells: &[Occupant; NUM_OF_CELLS]) -> StateCode {
    let value: u32 = cells
        .iter()
        .zip(POW)
        .map(|(occupant, weight)| occupant.value() * weight)
        .sum();
    StateCode(value as u16)
}

/// Applies a move to a raw state.
#[track_caller]
pub fn place(state: i64, cell_index: i64, player: Player) -> Result<StateCode, OracleError> {
    let pos = cell(cell_index)?;
    StateCode::new(state)?.place(pos, player)
}

fn trit_to_occupant(trit: u32) -> Occupant {
    match trit {
        0 => Occupant::Empty,
        1 => Occupant::Occupied(Player::A),
        2 => Occupant::Occupied(Player::B),
        other => unreachable!("base-3 digit out of range: {other}"),
    }
}
