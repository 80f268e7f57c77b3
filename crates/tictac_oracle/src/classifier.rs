//! Precomputed classification table.
//!
//! [`StateClassifier`] classifies all `3^9` encodings once and afterwards
//! answers every query with a table lookup. The table is immutable, so a
//! classifier can be shared across threads by reference or `Arc`.

use crate::board::Board;
use crate::encoding::{NUM_OF_STATES, StateCode};
use crate::error::OracleError;
use crate::rules::{completed_line, find_threats, is_full};
use crate::types::{ChessStateInfo, GameStatus, LeadingPlayer};
use std::sync::OnceLock;
use std::thread::JoinHandle;
use tracing::{debug, info, instrument};

/// Lookup table from encoded state to classification.
#[derive(Clone, PartialEq, Eq)]
pub struct StateClassifier {
    table: Box<[ChessStateInfo]>,
}

impl std::fmt::Debug for StateClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateClassifier")
            .field("states", &self.table.len())
            .finish()
    }
}

static SHARED: OnceLock<StateClassifier> = OnceLock::new();

impl StateClassifier {
    /// Builds the full table.
    #[instrument]
    pub fn new() -> Self {
        info!(states = NUM_OF_STATES, "Building state classification table");
        let table: Box<[ChessStateInfo]> = StateCode::all().map(classify).collect();
        debug_assert_eq!(table.len(), NUM_OF_STATES);
        info!("State classification table ready");
        Self { table }
    }

    /// Process-wide classifier, built on first access.
    ///
    /// Concurrent first callers block until the single build finishes.
    pub fn shared() -> &'static StateClassifier {
        SHARED.get_or_init(StateClassifier::new)
    }

    /// Starts the build on a background thread.
    ///
    /// The returned gate is the only way to reach the classifier, so
    /// queries cannot run before the table exists.
    #[instrument]
    pub fn build_in_background() -> PendingClassifier {
        debug!("Spawning classifier build thread");
        PendingClassifier {
            handle: std::thread::spawn(StateClassifier::new),
        }
    }

    /// Classification of a validated state.
    pub fn get(&self, code: StateCode) -> &ChessStateInfo {
        &self.table[code.index()]
    }

    /// Classification of a raw state.
    ///
    /// Fails if `state` is outside `[0, NUM_OF_STATES)`.
    #[track_caller]
    pub fn state_info(&self, state: i64) -> Result<&ChessStateInfo, OracleError> {
        let code = StateCode::new(state)?;
        Ok(self.get(code))
    }

    /// Iterates `(state, classification)` pairs in ascending state order.
    pub fn iter(&self) -> impl Iterator<Item = (StateCode, &ChessStateInfo)> {
        StateCode::all().zip(self.table.iter())
    }

    /// Number of entries, always `NUM_OF_STATES`.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Checks if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for StateClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot readiness gate for a classifier built off-thread.
#[derive(Debug)]
pub struct PendingClassifier {
    handle: JoinHandle<StateClassifier>,
}

impl PendingClassifier {
    /// Checks whether the build has finished.
    pub fn is_ready(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the table is built.
    ///
    /// A panic inside the build is resumed on the caller.
    pub fn wait(self) -> StateClassifier {
        match self.handle.join() {
            Ok(classifier) => classifier,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

/// Classifies one state.
///
/// Precedence: completed line, then full board, then open threats, then
/// the normal fallback listing empty cells.
pub fn classify(code: StateCode) -> ChessStateInfo {
    let board = Board::from_state(code);

    if let Some((winner, line)) = completed_line(&board) {
        return ChessStateInfo::new(
            GameStatus::GameOver,
            winner.into(),
            line.iter().map(|pos| pos.to_index()).collect(),
        );
    }

    if is_full(&board) {
        return ChessStateInfo::new(GameStatus::Draw, LeadingPlayer::None, Vec::new());
    }

    let threats = find_threats(&board);
    if !threats.is_empty() {
        return ChessStateInfo::new(
            GameStatus::GamePoint,
            threats.leader,
            threats.cells.into_iter().collect(),
        );
    }

    ChessStateInfo::new(
        GameStatus::Normal,
        LeadingPlayer::None,
        board.empty_indices(),
    )
}
