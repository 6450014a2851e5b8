//! Game tests - frame advancement and the finished state

use tenpin::core::{Game, RollError};
use tenpin::types::{BONUS_FRAME_NUMBER, FRAMES_IN_GAME};

/// Nine regulation frames with no bonus left pending.
const NINE_FRAMES: [u8; 17] = [1, 0, 2, 0, 3, 0, 10, 5, 0, 6, 0, 7, 3, 8, 0, 9, 0];

/// Roll every ball, returning whether the last one was accepted.
fn roll_all(game: &mut Game, rolls: &[u8]) -> bool {
    let mut accepted = false;
    for &pins in rolls {
        accepted = game.roll(pins);
    }
    accepted
}

fn nine_then(tail: &[u8]) -> Vec<u8> {
    NINE_FRAMES.iter().chain(tail).copied().collect()
}

#[test]
fn test_starts_with_frame_1() {
    let game = Game::new();
    assert_eq!(game.current_frame_number(), 1);
}

#[test]
fn test_stays_in_same_frame_after_one_pin() {
    let mut game = Game::new();
    game.roll(1);
    assert_eq!(game.current_frame_number(), 1);
}

#[test]
fn test_moves_to_second_frame_after_two_rolls() {
    let mut game = Game::new();
    roll_all(&mut game, &[1, 5]);
    assert_eq!(game.current_frame_number(), 2);
}

#[test]
fn test_moves_to_second_frame_after_strike() {
    let mut game = Game::new();
    game.roll(10);
    assert_eq!(game.current_frame_number(), 2);
}

#[test]
fn test_nine_frames_leave_game_in_tenth() {
    let mut game = Game::new();
    assert!(roll_all(&mut game, &NINE_FRAMES));
    assert_eq!(game.current_frame_number(), FRAMES_IN_GAME);
    assert!(!game.has_finished());
}

#[test]
fn test_finishes_after_open_tenth_frame() {
    let mut game = Game::new();
    let rolled_last = roll_all(&mut game, &nine_then(&[1, 0, 1]));
    assert!(!rolled_last);
    assert!(game.has_finished());
    assert_eq!(game.pending_bonus_rolls(), 0);
}

#[test]
fn test_two_bonus_rolls_after_tenth_strike() {
    let mut game = Game::new();
    let rolled_last = roll_all(&mut game, &nine_then(&[10, 1, 2]));
    assert!(rolled_last);
    assert!(game.has_finished());
    assert!(!game.roll(1));
}

#[test]
fn test_one_bonus_roll_after_tenth_spare() {
    let mut game = Game::new();
    let rolled_last = roll_all(&mut game, &nine_then(&[1, 9, 1]));
    assert!(rolled_last);
    assert!(!game.roll(1));
}

#[test]
fn test_bonus_slot_is_frame_eleven_while_pending() {
    let mut game = Game::new();
    roll_all(&mut game, &nine_then(&[10]));
    assert_eq!(game.current_frame_number(), BONUS_FRAME_NUMBER);
    assert_eq!(game.pending_bonus_rolls(), 2);
    assert!(!game.has_finished());

    game.roll(1);
    assert_eq!(game.pending_bonus_rolls(), 1);
    assert!(!game.has_finished());
}

#[test]
fn test_end_to_end_example_rejects_after_bonus() {
    let rolls = [1, 0, 2, 0, 3, 0, 10, 5, 0, 6, 0, 7, 3, 8, 0, 9, 0, 10, 1, 2];
    let mut game = Game::new();
    for pins in rolls {
        assert!(game.roll(pins), "roll {pins} should be accepted");
    }
    assert!(game.has_finished());
    assert_eq!(game.try_roll(0), Err(RollError::GameFinished));
    assert_eq!(game.rolls().count(), rolls.len());
}

#[test]
fn test_finished_game_still_answers_score_queries() {
    let mut game = Game::new();
    roll_all(&mut game, &nine_then(&[1, 0]));
    let score = game.score();
    assert!(!game.roll(5));
    assert_eq!(game.score(), score);
    assert_eq!(game.score(), score);
}

#[test]
fn test_invalid_pins_are_rejected_distinctly() {
    let mut game = Game::new();
    assert_eq!(game.try_roll(11), Err(RollError::InvalidPins { pins: 11 }));
    game.roll(8);
    assert_eq!(
        game.try_roll(3),
        Err(RollError::TooManyPins {
            pins: 3,
            standing: 2
        })
    );
    assert_ne!(
        RollError::InvalidPins { pins: 11 }.code(),
        RollError::GameFinished.code()
    );
    assert_eq!(game.current_frame_number(), 1);
    assert_eq!(game.rolls().collect::<Vec<_>>(), vec![8]);
}

#[test]
fn test_bonus_rolls_after_strike_allow_a_fresh_rack() {
    let mut game = Game::new();
    roll_all(&mut game, &nine_then(&[10, 10]));
    assert!(game.roll(10));
    assert!(game.has_finished());
}

#[test]
fn test_debug_dump_lists_bonus_slot() {
    let mut game = Game::new();
    roll_all(&mut game, &[0; 18]);
    roll_all(&mut game, &[7, 3, 5]);
    let dump = game.to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[9], "10 [ 7, 3 ]");
    assert_eq!(lines[10], "11 [ 5 ]");
}
