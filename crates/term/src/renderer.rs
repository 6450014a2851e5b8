//! Encodes a framebuffer into bytes for printing inline on a terminal.
//!
//! Unlike a full-screen game renderer this never enters the alternate screen:
//! the score sheet is printed once, row by row, so it stays in the scrollback.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Encode every row of `fb` into `out`, newline-terminated.
///
/// With `color` off the output is the bare characters, suitable for pipes.
pub fn encode_lines_into(fb: &FrameBuffer, out: &mut Vec<u8>, color: bool) -> Result<()> {
    for y in 0..fb.height() {
        if !color {
            out.extend_from_slice(fb.row_text(y).trim_end().as_bytes());
            out.push(b'\n');
            continue;
        }

        let mut current_style: Option<CellStyle> = None;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

/// Encode `fb` and write it to `w` in one go.
pub fn write_lines(fb: &FrameBuffer, w: &mut impl Write, color: bool) -> Result<()> {
    let mut buf = Vec::with_capacity(fb.width() as usize * fb.height() as usize * 4);
    encode_lines_into(fb, &mut buf, color)?;
    w.write_all(&buf)?;
    w.flush()?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
