//! Whole-table properties of the state classifier.

use tictac_oracle::rules::WIN_CONDITIONS;
use tictac_oracle::{
    Board, GameStatus, LeadingPlayer, NUM_OF_CELLS, NUM_OF_STATES, Occupant, OracleErrorKind, POW,
    Player, Position, StateClassifier, StateCode, decode, encode, occupant_at,
};

fn encode_trits(trits: [u32; 9]) -> i64 {
    trits.iter().zip(POW).map(|(t, w)| i64::from(t * w)).sum()
}

#[test]
fn test_table_covers_every_state() {
    let classifier = StateClassifier::shared();
    assert_eq!(classifier.len(), NUM_OF_STATES);
    assert_eq!(classifier.iter().count(), NUM_OF_STATES);
}

#[test]
fn test_decode_encode_round_trip() {
    for state in 0..NUM_OF_STATES as i64 {
        let cells = decode(state).unwrap();
        let mut sum = 0i64;
        for (i, weight) in POW.iter().enumerate() {
            let occupant = occupant_at(state, i as i64).unwrap();
            assert_eq!(occupant, cells[i]);
            sum += i64::from(occupant.value() * weight);
        }
        assert_eq!(sum, state);
        assert_eq!(i64::from(encode(&cells).value()), state);
    }
}

#[test]
fn test_win_precedence_top_row() {
    let classifier = StateClassifier::shared();
    let info = classifier.state_info(1 + 3 + 9).unwrap();
    assert_eq!(info.status(), GameStatus::GameOver);
    assert_eq!(info.leading_player(), LeadingPlayer::PlayerA);
    assert_eq!(info.key_indices(), &[0, 1, 2]);

    // Other cells never override the top row.
    for rest in 0..729i64 {
        let state = 13 + rest * 27;
        let info = classifier.state_info(state).unwrap();
        assert_eq!(info.status(), GameStatus::GameOver);
        assert_eq!(info.leading_player(), LeadingPlayer::PlayerA);
        assert_eq!(info.key_indices(), &[0, 1, 2]);
    }
}

#[test]
fn test_draw_detection() {
    let state = encode_trits([1, 2, 1, 2, 1, 2, 2, 1, 2]);
    let info = StateClassifier::shared().state_info(state).unwrap();
    assert_eq!(info.status(), GameStatus::Draw);
    assert_eq!(info.leading_player(), LeadingPlayer::None);
    assert!(info.key_indices().is_empty());
}

#[test]
fn test_single_game_point() {
    let info = StateClassifier::shared().state_info(4).unwrap();
    assert_eq!(info.status(), GameStatus::GamePoint);
    assert_eq!(info.leading_player(), LeadingPlayer::PlayerA);
    assert_eq!(info.key_indices(), &[2]);
}

#[test]
fn test_both_sides_game_point() {
    // A on 0,1 (needs 2); B on 6,7 (needs 8).
    let state = encode_trits([1, 1, 0, 0, 0, 0, 2, 2, 0]);
    let info = StateClassifier::shared().state_info(state).unwrap();
    assert_eq!(info.status(), GameStatus::GamePoint);
    assert_eq!(info.leading_player(), LeadingPlayer::Either);
    assert!(info.key_indices().contains(&2));
    assert!(info.key_indices().contains(&8));
}

#[test]
fn test_normal_keys_are_empty_cells() {
    for (code, info) in StateClassifier::shared().iter() {
        if info.status() != GameStatus::Normal {
            continue;
        }
        let board = Board::from_state(code);
        assert_eq!(info.key_indices(), board.empty_indices().as_slice());
        assert_eq!(info.leading_player(), LeadingPlayer::None);
    }
}

#[test]
fn test_per_status_invariants() {
    for (code, info) in StateClassifier::shared().iter() {
        let board = Board::from_state(code);
        let keys = info.key_indices();
        assert!(keys.windows(2).all(|w| w[0] < w[1]) || info.status() == GameStatus::GameOver);
        assert!(keys.iter().all(|k| *k < NUM_OF_CELLS));

        match info.status() {
            GameStatus::GameOver => {
                let line: Vec<usize> = keys.to_vec();
                assert!(
                    WIN_CONDITIONS
                        .iter()
                        .any(|w| w.iter().map(|p| p.to_index()).eq(line.iter().copied()))
                );
                let winner = match info.leading_player() {
                    LeadingPlayer::PlayerA => Player::A,
                    LeadingPlayer::PlayerB => Player::B,
                    other => panic!("game over without a single winner: {other}"),
                };
                assert!(keys.iter().all(|k| {
                    board.get(Position::from_index(*k).unwrap()) == Occupant::Occupied(winner)
                }));
            }
            GameStatus::Draw => {
                assert!(keys.is_empty());
                assert!(board.empty_indices().is_empty());
            }
            GameStatus::GamePoint => {
                assert!(!keys.is_empty());
                assert_ne!(info.leading_player(), LeadingPlayer::None);
                for k in keys {
                    let pos = Position::from_index(*k).unwrap();
                    assert!(board.is_empty(pos));
                    // Some leader completes a line by taking the key cell.
                    let completes = [Player::A, Player::B].into_iter().any(|p| {
                        info.leading_player().includes(p) && {
                            let next = code.place(pos, p).unwrap();
                            let after = StateClassifier::shared().get(next);
                            after.status() == GameStatus::GameOver
                                && after.leading_player() == LeadingPlayer::from(p)
                        }
                    });
                    assert!(completes, "state {code}: key cell {k} completes nothing");
                }
            }
            GameStatus::Normal => {}
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let classifier = StateClassifier::shared();
    for state in [0, 4, 13, 5000, 19682] {
        let first = classifier.state_info(state).unwrap().clone();
        let second = classifier.state_info(state).unwrap().clone();
        assert_eq!(first, second);
    }
}

#[test]
fn test_out_of_range_rejected() {
    let classifier = StateClassifier::shared();
    for state in [-1, 19683] {
        let err = classifier.state_info(state).unwrap_err();
        assert!(err.kind().is_invalid_argument());
    }
    for cell in [-1, 9] {
        let err = occupant_at(0, cell).unwrap_err();
        assert_eq!(err.kind(), OracleErrorKind::InvalidCell(cell));
    }
    assert!(StateCode::new(19683).is_err());
}

#[test]
fn test_independent_builds_agree() {
    assert_eq!(&StateClassifier::new(), StateClassifier::shared());
}

#[test]
fn test_record_serializes() {
    let info = StateClassifier::shared().state_info(4).unwrap();
    let json = serde_json::to_value(info).unwrap();
    assert_eq!(json["status"], "GamePoint");
    assert_eq!(json["leading_player"], "PlayerA");
    assert_eq!(json["key_indices"], serde_json::json!([2]));
}

#[test]
fn test_concurrent_first_access_shares_one_table() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(StateClassifier::shared))
        .collect();
    let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for table in &tables {
        assert!(std::ptr::eq(*table, tables[0]));
        assert_eq!(table.len(), NUM_OF_STATES);
    }
}

#[test]
fn test_background_build_becomes_ready() {
    let pending = StateClassifier::build_in_background();
    while !pending.is_ready() {
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert!(pending.is_ready());
    let classifier = pending.wait();
    assert_eq!(classifier.len(), NUM_OF_STATES);
    assert_eq!(classifier.state_info(4).unwrap().status(), GameStatus::GamePoint);
}
