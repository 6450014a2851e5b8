//! Frame module - the rolls thrown at one rack of pins
//!
//! A frame holds one or two rolls. A strike completes the frame after a single
//! ball; otherwise the frame is complete after two. The same type is reused for
//! the bonus slot after the tenth frame, where a first-ball strike resets the
//! rack and a second ball may follow.

use arrayvec::ArrayVec;

use crate::error::RollError;
use crate::types::{FrameMark, PINS_PER_RACK, ROLLS_PER_FRAME};

/// One frame of a game (or the bonus slot).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    rolls: ArrayVec<u8, ROLLS_PER_FRAME>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self {
            rolls: ArrayVec::new(),
        }
    }

    /// Check that `pins` could be the next roll in this frame.
    pub fn check(&self, pins: u8) -> Result<(), RollError> {
        if pins > PINS_PER_RACK {
            return Err(RollError::InvalidPins { pins });
        }
        if self.rolls.is_full() {
            return Err(RollError::FrameFull);
        }
        let standing = self.pins_standing();
        if pins > standing {
            return Err(RollError::TooManyPins { pins, standing });
        }
        Ok(())
    }

    /// Record a roll, validating it first.
    pub fn record(&mut self, pins: u8) -> Result<(), RollError> {
        self.check(pins)?;
        self.rolls
            .try_push(pins)
            .map_err(|_| RollError::FrameFull)
    }

    /// Pins available to the next ball.
    ///
    /// A first-ball strike leaves a fresh rack (only reachable in the bonus slot).
    pub fn pins_standing(&self) -> u8 {
        match self.rolls.as_slice() {
            [] => PINS_PER_RACK,
            [first] if *first >= PINS_PER_RACK => PINS_PER_RACK,
            [first] => PINS_PER_RACK - first,
            _ => 0,
        }
    }

    pub fn is_strike(&self) -> bool {
        self.rolled_once() && self.total_pins() == u32::from(PINS_PER_RACK)
    }

    pub fn is_spare(&self) -> bool {
        self.rolled_twice() && self.total_pins() == u32::from(PINS_PER_RACK)
    }

    pub fn is_complete(&self) -> bool {
        self.is_strike() || self.rolled_twice()
    }

    pub fn rolled_once(&self) -> bool {
        self.rolls.len() == 1
    }

    pub fn rolled_twice(&self) -> bool {
        self.rolls.len() == 2
    }

    /// Sum of the first two rolls; missing rolls count as zero.
    pub fn total_pins(&self) -> u32 {
        self.rolls.iter().take(2).map(|&p| u32::from(p)).sum()
    }

    /// Get the n-th roll (1-indexed), or `None` if it has not been thrown.
    pub fn roll(&self, n: usize) -> Option<u8> {
        n.checked_sub(1).and_then(|i| self.rolls.get(i).copied())
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Score-sheet classification of this frame.
    pub fn mark(&self) -> FrameMark {
        if self.is_strike() {
            FrameMark::Strike
        } else if self.is_spare() {
            FrameMark::Spare
        } else if self.rolled_twice() {
            FrameMark::Open
        } else if self.rolled_once() {
            FrameMark::InProgress
        } else {
            FrameMark::NotStarted
        }
    }
}
