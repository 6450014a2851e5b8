//! Game module - roll-by-roll frame state machine
//!
//! The game is an append-only list of frames. The last frame is always the one
//! accepting rolls. Once it is complete (and it is one of the ten regulation
//! frames) a new empty frame is appended. Completing the tenth frame therefore
//! creates an eleventh slot, which only ever receives the bonus balls owed for
//! a tenth-frame strike (two) or spare (one).

use std::fmt;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::RollError;
use crate::frame::Frame;
use crate::scoring;
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::{BONUS_FRAME_NUMBER, FRAMES_IN_GAME};

/// A single player's game of ten-pin bowling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: ArrayVec<Frame, BONUS_FRAME_NUMBER>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a new game waiting for the first ball of frame 1
    pub fn new() -> Self {
        let mut frames = ArrayVec::new();
        frames.push(Frame::new());
        Self { frames }
    }

    /// Roll a ball. Returns `false` if the roll was refused.
    ///
    /// A refused roll leaves the game untouched; use [`Game::try_roll`] to
    /// learn why.
    pub fn roll(&mut self, pins: u8) -> bool {
        self.try_roll(pins).is_ok()
    }

    /// Roll a ball, reporting why it was refused.
    pub fn try_roll(&mut self, pins: u8) -> Result<(), RollError> {
        if self.has_finished() {
            debug!(pins, "roll rejected: game finished");
            return Err(RollError::GameFinished);
        }

        let frame_number = self.current_frame_number();
        if let Err(err) = self.current_frame_mut().record(pins) {
            debug!(frame = frame_number, pins, code = err.code(), "roll rejected");
            return Err(err);
        }
        debug!(frame = frame_number, pins, "roll recorded");

        self.advance_if_needed();
        if self.has_finished() {
            debug!(score = self.score(), "game finished");
        }
        Ok(())
    }

    fn advance_if_needed(&mut self) {
        if self.current_frame_number() <= FRAMES_IN_GAME && self.current_frame().is_complete() {
            self.frames.push(Frame::new());
            debug!(frame = self.current_frame_number(), "advanced to next frame");
        }
    }

    /// Whether the game has ended (no regulation frame or bonus ball left).
    pub fn has_finished(&self) -> bool {
        self.current_frame_number() > FRAMES_IN_GAME && self.pending_bonus_rolls() == 0
    }

    /// Bonus balls still owed for the tenth frame.
    ///
    /// Always zero until the tenth frame is complete.
    pub fn pending_bonus_rolls(&self) -> u8 {
        let (Some(tenth), Some(bonus)) = (
            self.frame(FRAMES_IN_GAME),
            self.frame(BONUS_FRAME_NUMBER),
        ) else {
            return 0;
        };
        let owed = tenth.mark().bonus_rolls() as usize;
        owed.saturating_sub(bonus.rolls().len()) as u8
    }

    /// 1-indexed number of the frame accepting rolls.
    ///
    /// Reads 11 while bonus balls are being thrown and after the game ends.
    pub fn current_frame_number(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> &Frame {
        // Never empty: `new` seeds the first frame and frames are only appended.
        &self.frames[self.frames.len() - 1]
    }

    fn current_frame_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Get a frame by 1-indexed position (11 is the bonus slot).
    pub fn frame(&self, frame_number: usize) -> Option<&Frame> {
        frame_number
            .checked_sub(1)
            .and_then(|i| self.frames.get(i))
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Every accepted roll in the order it was thrown.
    pub fn rolls(&self) -> impl Iterator<Item = u8> + '_ {
        self.frames.iter().flat_map(|f| f.rolls().iter().copied())
    }

    /// Cumulative score so far.
    ///
    /// Mid-game this is a lower bound: bonus balls not yet thrown count as zero.
    pub fn score(&self) -> u32 {
        scoring::total_score(&self.frames)
    }

    /// Score-sheet running totals for frames 1..=10 (`None` until settled).
    pub fn running_totals(&self) -> ArrayVec<Option<u32>, FRAMES_IN_GAME> {
        scoring::running_totals(&self.frames)
    }

    /// Capture a read-only view of the game for rendering or serialization.
    pub fn snapshot(&self) -> GameSnapshot {
        let totals = self.running_totals();
        let frames = self
            .frames
            .iter()
            .take(FRAMES_IN_GAME)
            .zip(totals.iter())
            .enumerate()
            .map(|(i, (frame, total))| FrameSnapshot {
                number: (i + 1) as u8,
                rolls: frame.rolls().iter().copied().collect(),
                mark: frame.mark(),
                running_total: *total,
            })
            .collect();
        let bonus_rolls = self
            .frame(BONUS_FRAME_NUMBER)
            .map(|f| f.rolls().iter().copied().collect())
            .unwrap_or_default();

        GameSnapshot {
            frames,
            bonus_rolls,
            current_frame: self.current_frame_number() as u8,
            score: self.score(),
            pending_bonus_rolls: self.pending_bonus_rolls(),
            finished: self.has_finished(),
        }
    }
}

/// Debug dump: one line per frame slot, e.g. `4 [ 10 ]`.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} [ ", i + 1)?;
            for (j, pins) in frame.rolls().iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{pins}")?;
            }
            write!(f, " ]")?;
        }
        Ok(())
    }
}
