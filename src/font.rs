/// Font selection.
///
/// Two immutable font representations share one interface: the built-in
/// classic 5x8 table, which covers all 256 codes with a uniform cell, and
/// proportional glyph fonts with per-character metrics over a shared bitmap.

pub mod classic;
pub mod gfx;
pub mod tiny;

pub use gfx::{GfxFont, Glyph};

/// The font active on a writer. Exactly one variant is in use at a time.
#[derive(Debug, Clone, Copy, Default)]
pub enum Font<'a> {
    #[default]
    Classic,
    Gfx(&'a GfxFont<'a>),
}

impl<'a> Font<'a> {
    /// `None` selects the built-in classic font.
    pub fn from_option(font: Option<&'a GfxFont<'a>>) -> Self {
        match font {
            Some(font) => Font::Gfx(font),
            None => Font::Classic,
        }
    }

    pub fn is_classic(&self) -> bool {
        matches!(self, Font::Classic)
    }

    /// Whether `code` has something to look up. Every code has a classic cell,
    /// even when it renders blank.
    pub fn is_printable(&self, code: u8) -> bool {
        match self {
            Font::Classic => true,
            Font::Gfx(font) => font.contains(code),
        }
    }

    /// Vertical step of one line break at the given vertical magnification.
    pub fn line_advance(&self, size_y: u8) -> i32 {
        let line = match self {
            Font::Classic => classic::CHAR_HEIGHT as i32,
            Font::Gfx(font) => font.y_advance as i32,
        };
        line * size_y as i32
    }
}
