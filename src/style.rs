/// Text style: colors, magnification and wrapping.

/// Colors carry 1-bit meaning: any nonzero value is foreground ink.
/// When `fg == bg` classic glyphs draw with a transparent background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: u16,
    pub bg: u16,
    pub size_x: u8,
    pub size_y: u8,
    pub wrap: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fg: 0x0000,
            bg: 0xFFFF,
            size_x: 1,
            size_y: 1,
            wrap: true,
        }
    }
}

impl TextStyle {
    pub fn with_colors(mut self, fg: u16, bg: u16) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    /// Same foreground and background: only set bits are drawn.
    pub fn transparent(mut self, fg: u16) -> Self {
        self.fg = fg;
        self.bg = fg;
        self
    }

    /// Magnification below 1 is raised to 1.
    pub fn with_size(mut self, size_x: u8, size_y: u8) -> Self {
        self.size_x = size_x.max(1);
        self.size_y = size_y.max(1);
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn is_opaque(&self) -> bool {
        self.fg != self.bg
    }

    pub fn is_unscaled(&self) -> bool {
        self.size_x == 1 && self.size_y == 1
    }
}
