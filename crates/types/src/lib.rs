//! Core types module - shared constants and frame classification
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the scoring core, the terminal scoreboard, and the CLI alike.
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMES_IN_GAME` | 10 | Regulation frames that are scored |
//! | `BONUS_FRAME_NUMBER` | 11 | Slot holding the tenth frame's bonus rolls |
//! | `PINS_PER_RACK` | 10 | Pins standing at the start of a rack |
//! | `ROLLS_PER_FRAME` | 2 | Most rolls any single slot ever holds |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{FrameMark, BONUS_FRAME_NUMBER, FRAMES_IN_GAME};
//!
//! assert_eq!(BONUS_FRAME_NUMBER, FRAMES_IN_GAME + 1);
//! assert_eq!(FrameMark::from_str("STRIKE"), Some(FrameMark::Strike));
//! assert_eq!(FrameMark::Spare.as_str(), "spare");
//! ```

/// Number of regulation frames in a game.
pub const FRAMES_IN_GAME: usize = 10;

/// 1-indexed position of the slot that stores the tenth frame's bonus rolls.
///
/// It is never scored as a frame of its own.
pub const BONUS_FRAME_NUMBER: usize = FRAMES_IN_GAME + 1;

/// Pins standing at the start of every rack.
pub const PINS_PER_RACK: u8 = 10;

/// Capacity of a single frame slot.
///
/// The tenth frame's third ball lives in the bonus slot, so two is enough.
pub const ROLLS_PER_FRAME: usize = 2;

/// Highest possible score (twelve strikes in a row).
pub const PERFECT_GAME: u32 = 300;

/// Classification of a frame as shown on a score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameMark {
    /// No ball thrown yet
    NotStarted,
    /// One non-strike ball thrown
    InProgress,
    /// Two balls, fewer than ten pins
    Open,
    /// Ten pins across two balls
    Spare,
    /// Ten pins on the first ball
    Strike,
}

impl FrameMark {
    /// Parse a mark from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::FrameMark;
    ///
    /// assert_eq!(FrameMark::from_str("open"), Some(FrameMark::Open));
    /// assert_eq!(FrameMark::from_str("in_progress"), Some(FrameMark::InProgress));
    /// assert_eq!(FrameMark::from_str("gutter"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "not_started" => Some(FrameMark::NotStarted),
            "in_progress" => Some(FrameMark::InProgress),
            "open" => Some(FrameMark::Open),
            "spare" => Some(FrameMark::Spare),
            "strike" => Some(FrameMark::Strike),
            _ => None,
        }
    }

    /// Convert to snake_case string (used by the JSON snapshot)
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameMark::NotStarted => "not_started",
            FrameMark::InProgress => "in_progress",
            FrameMark::Open => "open",
            FrameMark::Spare => "spare",
            FrameMark::Strike => "strike",
        }
    }

    /// Whether the frame earns bonus pins from later rolls.
    pub fn earns_bonus(&self) -> bool {
        matches!(self, FrameMark::Spare | FrameMark::Strike)
    }

    /// Number of following rolls that count toward this frame's bonus.
    pub fn bonus_rolls(&self) -> u8 {
        match self {
            FrameMark::Strike => 2,
            FrameMark::Spare => 1,
            _ => 0,
        }
    }
}
