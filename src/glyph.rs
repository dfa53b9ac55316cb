/// Glyph rasterizer.
///
/// Turns one character code into pixel writes on a [`Canvas`]. The two font
/// variants are walked differently: classic cells column by column with the
/// least significant bit on top, glyph fonts row by row through a bitstream
/// that is not byte aligned per row.

use crate::font::{classic, Font, GfxFont};
use crate::framebuffer::Canvas;
use crate::style::TextStyle;

/// Draw `code` with its cell (classic) or cursor origin (glyph font) at
/// `(x, y)`.
///
/// Glyph-font codes must already be in range; the layout engine filters
/// them. An out-of-range code draws nothing.
pub fn draw_char<C: Canvas + ?Sized>(
    canvas: &mut C,
    font: Font<'_>,
    x: i32,
    y: i32,
    code: u8,
    style: &TextStyle,
) {
    match font {
        Font::Classic => draw_classic(canvas, x, y, code, style),
        Font::Gfx(font) => draw_gfx(canvas, font, x, y, code, style),
    }
}

/// One font pixel, magnified to a `size_x` x `size_y` block when scaled.
#[inline]
fn plot<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    col: i32,
    row: i32,
    style: &TextStyle,
    color: u16,
) {
    // Coordinates wrap instead of overflowing; a wrapped pixel lands far off
    // the canvas and is discarded there.
    if style.is_unscaled() {
        canvas.draw_pixel(x.wrapping_add(col), y.wrapping_add(row), color);
    } else {
        let (sx, sy) = (style.size_x as i32, style.size_y as i32);
        canvas.fill_rect(
            x.wrapping_add(col * sx),
            y.wrapping_add(row * sy),
            sx,
            sy,
            color,
        );
    }
}

fn draw_classic<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, code: u8, style: &TextStyle) {
    let (sx, sy) = (style.size_x as i32, style.size_y as i32);
    let pitch = classic::CELL_PITCH as i32;
    let rows = classic::CHAR_HEIGHT as i32;

    if x >= canvas.width()
        || y >= canvas.height()
        || x.saturating_add(pitch * sx - 1) < 0
        || y.saturating_add(rows * sy - 1) < 0
    {
        return;
    }

    for col in 0..classic::CHAR_WIDTH {
        let mut line = classic::column(code, col);
        for row in 0..rows {
            if line & 1 != 0 {
                plot(canvas, x, y, col as i32, row, style, style.fg);
            } else if style.is_opaque() {
                plot(canvas, x, y, col as i32, row, style, style.bg);
            }
            line >>= 1;
        }
    }

    // Gap column, so opaque text fully overwrites earlier text at the same pitch.
    if style.is_opaque() {
        let gap_x = x.wrapping_add(classic::CHAR_WIDTH as i32 * sx);
        if style.is_unscaled() {
            canvas.draw_vline(gap_x, y, rows, style.bg);
        } else {
            canvas.fill_rect(gap_x, y, sx, rows * sy, style.bg);
        }
    }
}

// No background pass: proportional glyphs may overlap, so erasing a uniform
// cell would clobber neighbours. Callers clear the text bounds and redraw.
// TODO: skip glyphs whose box lies entirely off the canvas, as the classic
// path does; today every bit is walked and off-panel writes are discarded.
fn draw_gfx<C: Canvas + ?Sized>(
    canvas: &mut C,
    font: &GfxFont<'_>,
    x: i32,
    y: i32,
    code: u8,
    style: &TextStyle,
) {
    let Some(glyph) = font.glyph(code) else {
        log::trace!("code {} outside glyph range {}..={}", code, font.first, font.last);
        return;
    };

    let (xo, yo) = (glyph.x_offset as i32, glyph.y_offset as i32);
    let mut offset = glyph.bitmap_offset as usize;
    let mut bits = 0u8;
    let mut bit = 0u8;

    for row in 0..glyph.height as i32 {
        for col in 0..glyph.width as i32 {
            if bit & 7 == 0 {
                bits = font.bitmap.get(offset).copied().unwrap_or(0);
                offset += 1;
            }
            bit = bit.wrapping_add(1);
            if bits & 0x80 != 0 {
                plot(canvas, x, y, xo + col, yo + row, style, style.fg);
            }
            bits <<= 1;
        }
    }
}
