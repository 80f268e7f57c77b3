//! Randomized move selection driven by the oracle's key cells.

use rand::Rng;
use rand::seq::SliceRandom;
use tictac_oracle::{GameStatus, LeadingPlayer, Player, Position, StateClassifier, StateCode};
use tracing::{debug, instrument};

/// Picks a cell for `me` to mark.
///
/// - Normal: any empty cell.
/// - Game point for one side: any key cell, which wins for `me` or blocks
///   the opponent.
/// - Game point for both sides: the first key cell that wins for `me`.
///
/// Returns `None` once the game is over or drawn.
#[instrument(skip(classifier, rng))]
pub fn pick_move<R: Rng + ?Sized>(
    classifier: &StateClassifier,
    state: StateCode,
    me: Player,
    rng: &mut R,
) -> Option<Position> {
    let info = classifier.get(state);
    let keys = info.key_indices();

    let choice = match info.status() {
        GameStatus::GameOver | GameStatus::Draw => return None,
        GameStatus::Normal => {
            debug!("No threats on the board, picking a random empty cell");
            keys.choose(rng).copied()
        }
        GameStatus::GamePoint if info.leading_player() == LeadingPlayer::Either => {
            winning_cell(classifier, state, me, keys).or_else(|| {
                debug!("No winning key cell for this side, picking any key cell");
                keys.choose(rng).copied()
            })
        }
        GameStatus::GamePoint => {
            debug!(leader = %info.leading_player(), "Single-sided game point");
            keys.choose(rng).copied()
        }
    };

    choice.and_then(Position::from_index)
}

/// First key cell that completes a line for `me`.
fn winning_cell(
    classifier: &StateClassifier,
    state: StateCode,
    me: Player,
    keys: &[usize],
) -> Option<usize> {
    keys.iter().copied().find(|&idx| {
        Position::from_index(idx)
            .and_then(|pos| state.place(pos, me).ok())
            .is_some_and(|next| {
                let info = classifier.get(next);
                info.status() == GameStatus::GameOver
                    && info.leading_player() == LeadingPlayer::from(me)
            })
    })
}
