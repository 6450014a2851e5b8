//! Scoring module - ten-pin score with spare and strike look-ahead
//!
//! Frames are addressed by 1-indexed position in an append-only slice. A spare
//! borrows the next roll, a strike the next two, and both lookups simply read
//! forward through the slice. The bonus slot after the tenth frame is just the
//! eleventh entry, so the tenth frame resolves its bonus like any other.
//!
//! Policy for unresolved bonuses: a roll that has not been thrown yet counts as
//! zero in [`total_score`], which therefore is a lower bound until the game
//! finishes. [`running_totals`] instead reports `None` for such frames.

use arrayvec::ArrayVec;

use crate::frame::Frame;
use crate::types::FRAMES_IN_GAME;

/// Breakdown of a single frame's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameScore {
    /// Pins knocked down in the frame itself.
    pub pins: u32,
    /// Bonus pins borrowed from later rolls (missing rolls count as zero).
    pub bonus: u32,
    /// Whether every roll this frame depends on has been thrown.
    pub resolved: bool,
}

impl FrameScore {
    pub fn total(&self) -> u32 {
        self.pins + self.bonus
    }
}

fn frame_at(frames: &[Frame], frame_number: usize) -> Option<&Frame> {
    frame_number.checked_sub(1).and_then(|i| frames.get(i))
}

/// First roll of the frame after `frame_number`.
pub fn next_roll(frames: &[Frame], frame_number: usize) -> Option<u8> {
    frame_at(frames, frame_number + 1).and_then(|f| f.roll(1))
}

/// The roll after [`next_roll`]: the next frame's second ball if it has one,
/// otherwise the first ball of the frame after that.
pub fn roll_after_next(frames: &[Frame], frame_number: usize) -> Option<u8> {
    let next = frame_at(frames, frame_number + 1)?;
    if next.rolled_twice() {
        return next.roll(2);
    }
    frame_at(frames, frame_number + 2).and_then(|f| f.roll(1))
}

/// Score a single regulation frame (1-indexed).
pub fn frame_score(frames: &[Frame], frame_number: usize) -> FrameScore {
    let Some(frame) = frame_at(frames, frame_number) else {
        return FrameScore::default();
    };

    let pins = frame.total_pins();
    if frame.is_strike() {
        let first = next_roll(frames, frame_number);
        let second = roll_after_next(frames, frame_number);
        FrameScore {
            pins,
            bonus: pins_or_zero(first) + pins_or_zero(second),
            resolved: first.is_some() && second.is_some(),
        }
    } else if frame.is_spare() {
        let first = next_roll(frames, frame_number);
        FrameScore {
            pins,
            bonus: pins_or_zero(first),
            resolved: first.is_some(),
        }
    } else {
        FrameScore {
            pins,
            bonus: 0,
            resolved: frame.is_complete(),
        }
    }
}

/// Cumulative score over frames 1..=10. The bonus slot is never scored itself.
pub fn total_score(frames: &[Frame]) -> u32 {
    (1..=FRAMES_IN_GAME.min(frames.len()))
        .map(|n| frame_score(frames, n).total())
        .sum()
}

/// Running total after each regulation frame, as written on a score sheet.
///
/// Entries stay `None` from the first frame that cannot be settled yet.
pub fn running_totals(frames: &[Frame]) -> ArrayVec<Option<u32>, FRAMES_IN_GAME> {
    let mut totals = ArrayVec::new();
    let mut acc = Some(0u32);
    for n in 1..=FRAMES_IN_GAME {
        let score = frame_score(frames, n);
        acc = match acc {
            Some(sum) if score.resolved => Some(sum + score.total()),
            _ => None,
        };
        totals.push(acc);
    }
    totals
}

fn pins_or_zero(roll: Option<u8>) -> u32 {
    roll.map(u32::from).unwrap_or(0)
}
