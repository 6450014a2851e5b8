//! Terminal score sheet.
//!
//! Renders a game snapshot into a small framebuffer laid out like a printed
//! bowling score sheet, then encodes it with crossterm for inline printing.
//!
//! Keeps `core` free of any I/O: this crate only ever reads a
//! [`GameSnapshot`](crate::core::GameSnapshot).

pub mod fb;
pub mod renderer;
pub mod scoreboard;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_lines_into, write_lines};
pub use scoreboard::{roll_symbols, ScoreboardView};
