//! Tests for oracle-driven move selection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac_arena::pick_move;
use tictac_oracle::{Board, Player, Position, StateClassifier, StateCode};

fn state(marks: &[(Position, Player)]) -> StateCode {
    marks.iter().copied().collect::<Board>().state()
}

#[test]
fn test_completes_own_line() {
    let classifier = StateClassifier::shared();
    let code = state(&[(Position::TopLeft, Player::A), (Position::TopCenter, Player::A)]);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(
            pick_move(classifier, code, Player::A, &mut rng),
            Some(Position::TopRight)
        );
    }
}

#[test]
fn test_blocks_single_threat() {
    let classifier = StateClassifier::shared();
    let code = state(&[
        (Position::BottomLeft, Player::B),
        (Position::BottomCenter, Player::B),
        (Position::Center, Player::A),
    ]);
    // A in the center threatens nothing alone; B needs cell 8.
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(
            pick_move(classifier, code, Player::A, &mut rng),
            Some(Position::BottomRight)
        );
    }
}

#[test]
fn test_prefers_own_win_when_both_threaten() {
    // For B, cell 2 blocks A and opens the anti-diagonal, but only cell 8 wins.
    let classifier = StateClassifier::shared();
    let code = state(&[
        (Position::TopLeft, Player::A),
        (Position::TopCenter, Player::A),
        (Position::BottomLeft, Player::B),
        (Position::BottomCenter, Player::B),
    ]);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(
            pick_move(classifier, code, Player::B, &mut rng),
            Some(Position::BottomRight)
        );
        assert_eq!(
            pick_move(classifier, code, Player::A, &mut rng),
            Some(Position::TopRight)
        );
    }
}

#[test]
fn test_normal_move_is_an_empty_cell() {
    let classifier = StateClassifier::shared();
    let code = state(&[(Position::Center, Player::A), (Position::TopLeft, Player::B)]);
    let board = Board::from_state(code);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let pos = pick_move(classifier, code, Player::A, &mut rng).unwrap();
        assert!(board.is_empty(pos));
    }
}

#[test]
fn test_no_move_after_draw() {
    let classifier = StateClassifier::shared();
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
    let code: StateCode = Position::ALL
        .into_iter()
        .zip(marks)
        .collect::<Board>()
        .state();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(pick_move(classifier, code, Player::A, &mut rng), None);
}
