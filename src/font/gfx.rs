/// Proportional glyph fonts.
///
/// Layout follows the widely used GFX font format: a metrics table indexed
/// by `code - first`, and one bitmap blob in which every glyph's rows are
/// packed back to back, MSB first, without padding between rows.

/// Placement metrics of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Byte offset of the first bitmap row in [`GfxFont::bitmap`].
    pub bitmap_offset: u16,
    pub width: u8,
    pub height: u8,
    /// Cursor advance after drawing.
    pub x_advance: u8,
    /// Distance from the cursor to the bitmap's upper-left corner.
    pub x_offset: i8,
    pub y_offset: i8,
}

impl Glyph {
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }

    /// Zero-area glyphs (spaces) advance the cursor but draw nothing.
    pub fn has_bitmap(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug)]
pub struct GfxFont<'a> {
    pub bitmap: &'a [u8],
    pub glyphs: &'a [Glyph],
    pub first: u8,
    pub last: u8,
    /// Line height, applied once per line break.
    pub y_advance: u8,
}

impl<'a> GfxFont<'a> {
    pub fn contains(&self, code: u8) -> bool {
        code >= self.first && code <= self.last
    }

    /// Metrics for `code`, or `None` outside `first..=last`.
    pub fn glyph(&self, code: u8) -> Option<&'a Glyph> {
        if !self.contains(code) {
            return None;
        }
        self.glyphs.get((code - self.first) as usize)
    }
}
