/// Text writer for the e-ink framebuffer.
///
/// Keeps the cursor, text style and active font, decides per character
/// whether to break the line before drawing, and advances the cursor by the
/// character's pitch afterwards. Output is also available through
/// `core::fmt::Write` and the crate's `print!`/`println!` macros.

use core::fmt::{self, Write as _};
use spin::Mutex;

use crate::encoding;
use crate::error::Error;
use crate::font::{classic, Font, GfxFont};
use crate::framebuffer::{Canvas, MonoFramebuffer, Rotation};
use crate::glyph;
use crate::style::TextStyle;

/// Staging buffer size of [`Writer::print_fmt`]. One byte is held back, so
/// formatted output must stay strictly below this length.
pub const FORMAT_CAPACITY: usize = 1024;

/// Smallest rectangle covering laid-out text. Empty text has zero size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

pub struct Writer<'a> {
    fb: MonoFramebuffer<'a>,
    font: Font<'a>,
    style: TextStyle,
    cursor_x: i32,
    cursor_y: i32,
}

pub static WRITER: Mutex<Option<Writer<'static>>> = Mutex::new(None);

impl<'a> Writer<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Result<Self, Error> {
        Ok(Self::with_framebuffer(MonoFramebuffer::new(buffer)?))
    }

    pub fn with_framebuffer(fb: MonoFramebuffer<'a>) -> Self {
        Self {
            fb,
            font: Font::Classic,
            style: TextStyle::default(),
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn framebuffer(&self) -> &MonoFramebuffer<'a> {
        &self.fb
    }

    /// Packed frame bytes for the display driver.
    pub fn buffer(&self) -> &[u8] {
        self.fb.buffer()
    }

    /// Logical width under the current rotation.
    pub fn width(&self) -> i32 {
        self.fb.width()
    }

    pub fn height(&self) -> i32 {
        self.fb.height()
    }

    pub fn rotation(&self) -> u8 {
        self.fb.rotation().bits()
    }

    /// Only the low two bits of `rotation` are used.
    pub fn set_rotation(&mut self, rotation: u8) {
        self.fb.set_rotation(Rotation::from_bits(rotation));
    }

    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    /// Foreground only; the background becomes transparent.
    pub fn set_text_color(&mut self, color: u16) {
        self.style = self.style.transparent(color);
    }

    pub fn set_text_colors(&mut self, fg: u16, bg: u16) {
        self.style = self.style.with_colors(fg, bg);
    }

    pub fn set_text_size(&mut self, size: u8) {
        self.set_text_size_xy(size, size);
    }

    pub fn set_text_size_xy(&mut self, size_x: u8, size_y: u8) {
        self.style = self.style.with_size(size_x, size_y);
    }

    pub fn set_text_wrap(&mut self, wrap: bool) {
        self.style.wrap = wrap;
    }

    pub fn font(&self) -> Font<'a> {
        self.font
    }

    /// `None` switches back to the built-in classic font.
    pub fn set_font(&mut self, font: Option<&'a GfxFont<'a>>) {
        self.font = Font::from_option(font);
        match font {
            Some(f) => log::debug!("glyph font {}..={} selected", f.first, f.last),
            None => log::debug!("classic font selected"),
        }
    }

    pub fn fill_screen(&mut self, color: u16) {
        self.fb.fill(color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u16) {
        self.fb.fill_rect(x, y, w, h, color);
    }

    /// Rasterize one code at an explicit position with the current style.
    /// Does not move the cursor.
    pub fn draw_char(&mut self, x: i32, y: i32, code: u8) {
        glyph::draw_char(&mut self.fb, self.font, x, y, code, &self.style);
    }

    /// Lay out one character code at the cursor: line breaks, carriage
    /// returns, wrapping and drawing. Returns the number of codes consumed.
    pub fn write_code(&mut self, code: u8) -> usize {
        let mut cursor = (self.cursor_x, self.cursor_y);
        if let Some((x, y)) = self.place(&mut cursor, code) {
            glyph::draw_char(&mut self.fb, self.font, x, y, code, &self.style);
        }
        (self.cursor_x, self.cursor_y) = cursor;
        1
    }

    /// Write codes as-is, without lead-byte filtering.
    pub fn write_codes(&mut self, codes: &[u8]) -> usize {
        codes.iter().map(|&c| self.write_code(c)).sum()
    }

    /// Print UTF-8 text, collapsing Latin-1 supplement pairs to single codes.
    pub fn print(&mut self, text: &str) {
        self.print_bytes(text.as_bytes());
    }

    pub fn print_bytes(&mut self, bytes: &[u8]) {
        for code in encoding::codes(bytes) {
            self.write_code(code);
        }
    }

    /// One raw code, no normalisation.
    pub fn print_char(&mut self, code: u8) {
        self.write_code(code);
    }

    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.write_code(b'\n');
    }

    /// Format into a bounded staging buffer, then print. Output of
    /// [`FORMAT_CAPACITY`] bytes or more is discarded whole.
    pub fn print_fmt(&mut self, args: fmt::Arguments) -> Result<(), Error> {
        let mut staged: heapless::String<FORMAT_CAPACITY> = heapless::String::new();
        if staged.write_fmt(args).is_err() || staged.len() >= FORMAT_CAPACITY {
            log::warn!("formatted text exceeds {} bytes, discarded", FORMAT_CAPACITY);
            return Err(Error::FormatOverflow {
                capacity: FORMAT_CAPACITY,
            });
        }
        self.print(&staged);
        Ok(())
    }

    /// Bounds of `text` printed from `(x, y)` with the current font, size and
    /// wrap setting. Nothing is drawn and the cursor does not move.
    pub fn text_bounds(&self, text: &str, x: i32, y: i32) -> Bounds {
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
        let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
        let (sx, sy) = (self.style.size_x as i32, self.style.size_y as i32);
        let mut cursor = (x, y);

        for code in encoding::codes(text.as_bytes()) {
            let Some((gx, gy)) = self.place(&mut cursor, code) else {
                continue;
            };
            let (x1, y1, w, h) = match self.font {
                Font::Classic => (
                    gx,
                    gy,
                    classic::CELL_PITCH as i32 * sx,
                    classic::CHAR_HEIGHT as i32 * sy,
                ),
                Font::Gfx(font) => match font.glyph(code) {
                    Some(g) => (
                        gx.wrapping_add(g.x_offset as i32 * sx),
                        gy.wrapping_add(g.y_offset as i32 * sy),
                        g.width as i32 * sx,
                        g.height as i32 * sy,
                    ),
                    None => continue,
                },
            };
            min_x = min_x.min(x1);
            min_y = min_y.min(y1);
            max_x = max_x.max(x1.saturating_add(w - 1));
            max_y = max_y.max(y1.saturating_add(h - 1));
        }

        if max_x < min_x || max_y < min_y {
            return Bounds {
                x,
                y,
                ..Bounds::default()
            };
        }
        Bounds {
            x: min_x,
            y: min_y,
            w: max_x.saturating_sub(min_x).saturating_add(1),
            h: max_y.saturating_sub(min_y).saturating_add(1),
        }
    }

    /// Advance `cursor` past `code` and return where its glyph should be
    /// drawn, if anywhere.
    ///
    /// The cursor wraps around at the ends of `i32` instead of panicking; the
    /// wrap test saturates so a cursor near the end still breaks the line.
    fn place(&self, cursor: &mut (i32, i32), code: u8) -> Option<(i32, i32)> {
        let (sx, sy) = (self.style.size_x as i32, self.style.size_y as i32);
        let width = self.fb.width();

        if code == b'\n' {
            *cursor = (0, cursor.1.wrapping_add(self.font.line_advance(self.style.size_y)));
            return None;
        }
        if code == b'\r' {
            return None;
        }

        match self.font {
            Font::Classic => {
                let pitch = classic::CELL_PITCH as i32 * sx;
                if self.style.wrap && cursor.0.saturating_add(pitch) > width {
                    let advance = self.font.line_advance(self.style.size_y);
                    *cursor = (0, cursor.1.wrapping_add(advance));
                }
                let at = *cursor;
                cursor.0 = cursor.0.wrapping_add(pitch);
                Some(at)
            }
            Font::Gfx(font) => {
                // Out-of-range codes vanish without moving the cursor, unlike
                // the classic font which renders every code.
                let Some(glyph) = font.glyph(code) else {
                    log::trace!("dropped code {} outside {}..={}", code, font.first, font.last);
                    return None;
                };
                let mut at = None;
                if glyph.has_bitmap() {
                    let extent = sx * (glyph.x_offset as i32 + glyph.width as i32);
                    if self.style.wrap && cursor.0.saturating_add(extent) > width {
                        *cursor = (0, cursor.1.wrapping_add(font.y_advance as i32 * sy));
                    }
                    at = Some(*cursor);
                }
                cursor.0 = cursor.0.wrapping_add(glyph.x_advance as i32 * sx);
                at
            }
        }
    }
}

impl fmt::Write for Writer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}

/// Attach the global writer to a static frame buffer.
pub fn init(buffer: &'static mut [u8]) -> Result<(), Error> {
    let writer = Writer::new(buffer)?;
    *WRITER.lock() = Some(writer);
    Ok(())
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::writer::_print(::core::format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", ::core::format_args!($($arg)*)));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    if let Some(writer) = WRITER.lock().as_mut() {
        let _ = writer.print_fmt(args);
    }
}
