//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate holds the ten-pin rules: frames, the roll-by-roll game state
//! machine, and the look-ahead scoring algorithm. It performs no I/O and keeps
//! every game in fixed-capacity storage (at most eleven frame slots).
//!
//! # Module Structure
//!
//! - [`frame`]: rolls for one rack with strike/spare/complete predicates
//! - [`game`]: frame advancement, tenth-frame bonus balls, and the finished state
//! - [`scoring`]: spare and strike bonus resolution by forward lookup
//! - [`snapshot`]: serializable view used by the scoreboard and the CLI
//! - [`error`]: reasons a roll is refused
//!
//! # Example
//!
//! ```
//! use tenpin_core::Game;
//!
//! let mut game = Game::new();
//! for pins in [10, 7, 3, 9, 0] {
//!     assert!(game.roll(pins));
//! }
//! // 10 + (7 + 3) = 20, 10 + 9 = 19, 9
//! assert_eq!(game.score(), 48);
//! assert_eq!(game.current_frame_number(), 4);
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use error::RollError;
pub use frame::Frame;
pub use game::Game;
pub use scoring::{frame_score, running_totals, total_score, FrameScore};
pub use snapshot::{FrameSnapshot, GameSnapshot};
