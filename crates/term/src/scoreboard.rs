//! ScoreboardView: maps a `GameSnapshot` onto the classic ten-box score sheet.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//! ┌─────┬─────┬ ... ┬───────┐
//! │  1  │  2  │     │  10   │
//! ├─────┼─────┼ ... ┼───────┤
//! │   X │ 7 / │     │ X X X │
//! │  20 │  39 │     │   300 │
//! └─────┴─────┴ ... ┴───────┘
//! SCORE 300  FINAL
//! ```

use arrayvec::ArrayVec;

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{FRAMES_IN_GAME, PINS_PER_RACK};

/// Inner width of boxes 1-9.
const BOX_W: u16 = 5;
/// Inner width of the tenth box (three marks).
const TENTH_BOX_W: u16 = 7;

const BORDER: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160));
const HEADER: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160)).dim();
const PLAIN: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const STRIKE: CellStyle = CellStyle::fg(Rgb::new(255, 200, 60)).bold();
const SPARE: CellStyle = CellStyle::fg(Rgb::new(90, 200, 230)).bold();
const TOTAL: CellStyle = CellStyle::fg(Rgb::new(240, 240, 240)).bold();

/// Score-sheet symbols for a run of balls sharing racks.
///
/// `X` strike, `/` spare, `-` gutter, digits otherwise. A strike resets the
/// rack, so the same function handles the tenth box's bonus balls.
pub fn roll_symbols(rolls: &[u8]) -> ArrayVec<char, 3> {
    let mut out = ArrayVec::new();
    let mut standing = PINS_PER_RACK;
    let mut first_ball = true;

    for &pins in rolls.iter().take(3) {
        let symbol = if first_ball && pins == PINS_PER_RACK {
            'X'
        } else if !first_ball && pins == standing {
            '/'
        } else if pins == 0 {
            '-'
        } else {
            char::from_digit(u32::from(pins), 10).unwrap_or('?')
        };
        out.push(symbol);

        if first_ball && pins < PINS_PER_RACK {
            standing = PINS_PER_RACK - pins;
            first_ball = false;
        } else {
            standing = PINS_PER_RACK;
            first_ball = true;
        }
    }
    out
}

fn symbol_style(symbol: char) -> CellStyle {
    match symbol {
        'X' => STRIKE,
        '/' => SPARE,
        _ => PLAIN,
    }
}

/// Renders the score sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreboardView;

impl ScoreboardView {
    /// Total width in columns.
    pub fn width(&self) -> u16 {
        1 + (FRAMES_IN_GAME as u16 - 1) * (BOX_W + 1) + TENTH_BOX_W + 1
    }

    /// Total height in rows, footer included.
    pub fn height(&self) -> u16 {
        7
    }

    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width(), self.height());
        self.render_into(snap, &mut fb);
        fb
    }

    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        self.draw_grid(fb);

        for n in 1..=FRAMES_IN_GAME {
            let x = box_x(n) + 1;
            let w = box_w(n);

            let label = format!("{n:^width$}", width = w as usize);
            fb.put_str(x, 1, &label, HEADER);

            let Some(frame) = snap.frame(n) else {
                continue;
            };

            if n == FRAMES_IN_GAME {
                let rolls = snap.tenth_box_rolls();
                for (i, symbol) in roll_symbols(&rolls).into_iter().enumerate() {
                    fb.put_char(x + 1 + 2 * i as u16, 3, symbol, symbol_style(symbol));
                }
            } else {
                let symbols = roll_symbols(&frame.rolls);
                // A strike is written in the right-hand box.
                let slots: [Option<char>; 2] = match symbols.as_slice() {
                    ['X'] => [None, Some('X')],
                    [a] => [Some(*a), None],
                    [a, b, ..] => [Some(*a), Some(*b)],
                    [] => [None, None],
                };
                for (i, symbol) in slots.into_iter().enumerate() {
                    if let Some(symbol) = symbol {
                        fb.put_char(x + 1 + 2 * i as u16, 3, symbol, symbol_style(symbol));
                    }
                }
            }

            if let Some(total) = frame.running_total {
                let text = format!("{total:>width$} ", width = w as usize - 1);
                fb.put_str(x, 4, &text, TOTAL);
            }
        }

        let status = if snap.finished {
            "FINAL".to_string()
        } else if snap.pending_bonus_rolls > 0 {
            format!("BONUS BALLS {}", snap.pending_bonus_rolls)
        } else {
            format!("FRAME {}", snap.current_frame)
        };
        fb.put_str(0, 6, &format!("SCORE {}  ", snap.score), TOTAL);
        let status_x = fb.row_text(6).trim_end().chars().count() as u16 + 2;
        fb.put_str(status_x, 6, &status, HEADER);
    }

    fn draw_grid(&self, fb: &mut FrameBuffer) {
        let right = self.width() - 1;
        for y in 0..6 {
            fb.hline(0, y, self.width(), ' ', BORDER);
        }
        for y in [0u16, 2, 5] {
            fb.hline(1, y, right - 1, '─', BORDER);
        }

        for n in 1..=FRAMES_IN_GAME + 1 {
            let x = if n > FRAMES_IN_GAME { right } else { box_x(n) };
            let (top, mid, bottom) = if n == 1 {
                ('┌', '├', '└')
            } else if n > FRAMES_IN_GAME {
                ('┐', '┤', '┘')
            } else {
                ('┬', '┼', '┴')
            };
            fb.put_char(x, 0, top, BORDER);
            fb.put_char(x, 2, mid, BORDER);
            fb.put_char(x, 5, bottom, BORDER);
            for y in [1u16, 3, 4] {
                fb.put_char(x, y, '│', BORDER);
            }
        }
    }
}

/// Column of the left border of box `n` (1-indexed).
fn box_x(n: usize) -> u16 {
    (n as u16 - 1) * (BOX_W + 1)
}

fn box_w(n: usize) -> u16 {
    if n == FRAMES_IN_GAME {
        TENTH_BOX_W
    } else {
        BOX_W
    }
}
