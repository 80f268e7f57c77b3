//! Tic-tac-toe position oracle.
//!
//! Every 3x3 board is encoded as a base-3 integer (one trit per cell), and
//! all `3^9 = 19683` encodings are classified once into a lookup table.
//! Afterwards, "what is the status of this position" and "which cells
//! matter" are answered in constant time.
//!
//! # Example
//!
//! ```
//! use tictac_oracle::{GameStatus, LeadingPlayer, StateClassifier};
//!
//! let classifier = StateClassifier::new();
//! // Player A holds cells 0 and 1: 1*3^0 + 1*3^1 = 4
//! let info = classifier.state_info(4)?;
//! assert_eq!(info.status(), GameStatus::GamePoint);
//! assert_eq!(info.leading_player(), LeadingPlayer::PlayerA);
//! assert_eq!(info.key_indices(), &[2]);
//! # Ok::<(), tictac_oracle::OracleError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod classifier;
mod encoding;
mod error;
mod position;
pub mod rules;
mod stats;
mod types;

pub use board::Board;
pub use classifier::{PendingClassifier, StateClassifier, classify};
pub use encoding::{
    NUM_OF_CELLS, NUM_OF_STATES, POW, StateCode, cell, decode, encode, occupant_at, place,
};
pub use error::{OracleError, OracleErrorKind};
pub use position::Position;
pub use stats::TableStats;
pub use types::{ChessStateInfo, GameStatus, LeadingPlayer, Occupant, Player};
