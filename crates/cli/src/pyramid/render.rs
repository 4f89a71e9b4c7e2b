// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::iter;

use super::{rows, Height, Orientation, Strategy, Style};

/// Write the pattern for `height` in `style`, one row per line.
pub fn render<W: Write + ?Sized>(out: &mut W, height: Height, style: Style) -> io::Result<()> {
    let h = height.get();
    let mut line = String::with_capacity(h as usize + 1);
    for col in rows(height, style.strategy) {
        line.clear();
        if style.orientation == Orientation::Inverse {
            line.extend(iter::repeat(' ').take((h - col) as usize));
        }
        line.extend(iter::repeat('*').take(col as usize));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Left-aligned pattern.
pub fn render_upright<W: Write + ?Sized>(
    out: &mut W,
    height: Height,
    strategy: Strategy,
) -> io::Result<()> {
    render(out, height, Style::new(Orientation::Upright, strategy))
}

/// Right-aligned pattern, every row padded to `height` columns.
pub fn render_upright_inverse<W: Write + ?Sized>(
    out: &mut W,
    height: Height,
    strategy: Strategy,
) -> io::Result<()> {
    render(out, height, Style::new(Orientation::Inverse, strategy))
}

/// Render into a `String`.
pub fn render_to_string(height: Height, style: Style) -> String {
    let mut buf = Vec::with_capacity(height.row_count() as usize * (height.get() as usize + 1));
    // Writing into a Vec cannot fail.
    let _ = render(&mut buf, height, style);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
