//! Oracle error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong when calling into the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OracleErrorKind {
    /// Encoded state outside `[0, NUM_OF_STATES)`.
    #[display("state {} is outside [0, 19683)", _0)]
    InvalidState(i64),
    /// Cell index outside `[0, NUM_OF_CELLS)`.
    #[display("cell index {} is outside [0, 9)", _0)]
    InvalidCell(i64),
    /// Tried to place a mark on a cell that already holds one.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(usize),
}

impl OracleErrorKind {
    /// Returns true for caller-supplied values outside the valid domain.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidState(_) | Self::InvalidCell(_))
    }
}

/// Oracle error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Oracle error: {} at {}:{}", kind, file, line)]
pub struct OracleError {
    /// Error kind.
    pub kind: OracleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl OracleError {
    /// Creates a new oracle error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: OracleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> OracleErrorKind {
        self.kind
    }
}

impl From<OracleErrorKind> for OracleError {
    #[track_caller]
    fn from(kind: OracleErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_kind_and_location() {
        let err = OracleError::new(OracleErrorKind::InvalidState(-1));
        let text = err.to_string();
        assert!(text.contains("state -1"));
        assert!(text.contains("error.rs"));
    }

    #[test]
    fn test_invalid_argument_category() {
        assert!(OracleErrorKind::InvalidState(19683).is_invalid_argument());
        assert!(OracleErrorKind::InvalidCell(9).is_invalid_argument());
        assert!(!OracleErrorKind::CellOccupied(4).is_invalid_argument());
    }
}
