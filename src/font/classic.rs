/// Built-in 5x8 bitmap font.
///
/// 256 glyphs in Code Page 437 order, 5 bytes each. Every byte is one bitmap
/// column; bit 0 is the top row.

const FONT_DATA: &[u8; 256 * CHAR_WIDTH] = include_bytes!("classic_5x8.bin");

pub const CHAR_WIDTH: usize = 5;
pub const CHAR_HEIGHT: usize = 8;
/// Horizontal distance between cells: the glyph plus one gap column.
pub const CELL_PITCH: usize = CHAR_WIDTH + 1;

/// One bitmap column of `code`. `column` must be below [`CHAR_WIDTH`].
#[inline]
pub fn column(code: u8, column: usize) -> u8 {
    FONT_DATA[code as usize * CHAR_WIDTH + column]
}

pub fn columns(code: u8) -> &'static [u8] {
    let start = code as usize * CHAR_WIDTH;
    &FONT_DATA[start..start + CHAR_WIDTH]
}
