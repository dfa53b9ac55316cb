/// Packed 1-bit framebuffer for e-ink panels.
///
/// Wraps caller-owned memory holding one bit per physical pixel, row-major at
/// the raw (unrotated) width, 8 pixels per byte with the leftmost pixel in the
/// most significant bit. Drawing happens in logical coordinates; the active
/// rotation maps them onto the raw layout before each bit is touched.

use crate::error::Error;

/// Raw panel width in pixels.
pub const WIDTH: usize = 176;
/// Raw panel height in pixels.
pub const HEIGHT: usize = 264;
/// Bytes needed for one full frame at [`WIDTH`] x [`HEIGHT`].
pub const BUFFER_LEN: usize = WIDTH * HEIGHT / 8;

/// One of the four cardinal display orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Any integer maps onto a rotation; only the low two bits count.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Odd rotations swap the logical width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Map a logical coordinate onto the raw panel grid.
    #[inline]
    pub fn transform(self, x: i32, y: i32, raw_width: i32, raw_height: i32) -> (i32, i32) {
        match self {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => ((raw_width - 1).wrapping_sub(y), x),
            Rotation::Deg180 => (
                (raw_width - 1).wrapping_sub(x),
                (raw_height - 1).wrapping_sub(y),
            ),
            Rotation::Deg270 => (y, (raw_height - 1).wrapping_sub(x)),
        }
    }
}

/// Drawing surface used by the glyph rasterizer.
///
/// Coordinates are logical: `width()`/`height()` already reflect rotation.
pub trait Canvas {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Write one pixel. A nonzero `color` is foreground, zero is background.
    fn draw_pixel(&mut self, x: i32, y: i32, color: u16);

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u16) {
        for dy in 0..h {
            for dx in 0..w {
                self.draw_pixel(x.wrapping_add(dx), y.wrapping_add(dy), color);
            }
        }
    }

    fn draw_vline(&mut self, x: i32, y: i32, h: i32, color: u16) {
        self.fill_rect(x, y, 1, h, color);
    }
}

pub struct MonoFramebuffer<'a> {
    buffer: &'a mut [u8],
    raw_width: usize,
    raw_height: usize,
    rotation: Rotation,
}

impl<'a> MonoFramebuffer<'a> {
    /// Attach to a buffer sized for the built-in [`WIDTH`] x [`HEIGHT`] panel.
    pub fn new(buffer: &'a mut [u8]) -> Result<Self, Error> {
        Self::with_dimensions(buffer, WIDTH, HEIGHT)
    }

    pub fn with_dimensions(
        buffer: &'a mut [u8],
        raw_width: usize,
        raw_height: usize,
    ) -> Result<Self, Error> {
        if raw_width % 8 != 0 {
            return Err(Error::UnalignedWidth(raw_width));
        }
        let required = raw_width * raw_height / 8;
        if buffer.len() < required {
            return Err(Error::BufferTooSmall {
                len: buffer.len(),
                required,
            });
        }
        log::debug!("framebuffer attached: {}x{} ({} bytes)", raw_width, raw_height, required);
        Ok(Self {
            buffer,
            raw_width,
            raw_height,
            rotation: Rotation::Deg0,
        })
    }

    pub fn raw_width(&self) -> usize {
        self.raw_width
    }

    pub fn raw_height(&self) -> usize {
        self.raw_height
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        if rotation != self.rotation {
            log::debug!("rotation {} -> {}", self.rotation.bits(), rotation.bits());
        }
        self.rotation = rotation;
    }

    /// Packed frame bytes, ready to be shipped to the panel controller.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..self.raw_width * self.raw_height / 8]
    }

    /// Byte index and bit mask of a logical pixel, if it lands on the panel.
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let (x, y) = self
            .rotation
            .transform(x, y, self.raw_width as i32, self.raw_height as i32);
        if x < 0 || y < 0 || x >= self.raw_width as i32 || y >= self.raw_height as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let index = x / 8 + y * self.raw_width / 8;
        Some((index, 1 << (7 - x % 8)))
    }

    /// Set or clear one bit. Foreground (nonzero) clears the stored bit,
    /// background (zero) sets it, matching the panel's white-is-one memory.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u16) {
        let Some((index, mask)) = self.locate(x, y) else {
            log::trace!("pixel ({}, {}) off panel under rotation {}", x, y, self.rotation.bits());
            return;
        };
        if color != 0 {
            self.buffer[index] &= !mask;
        } else {
            self.buffer[index] |= mask;
        }
    }

    /// Stored bit behind a logical pixel; `None` when off panel.
    pub fn stored_bit(&self, x: i32, y: i32) -> Option<bool> {
        self.locate(x, y)
            .map(|(index, mask)| self.buffer[index] & mask != 0)
    }

    /// Paint the whole frame with one color.
    pub fn fill(&mut self, color: u16) {
        let byte = if color != 0 { 0x00 } else { 0xFF };
        let len = self.raw_width * self.raw_height / 8;
        self.buffer[..len].fill(byte);
    }
}

impl Canvas for MonoFramebuffer<'_> {
    fn width(&self) -> i32 {
        if self.rotation.swaps_axes() {
            self.raw_height as i32
        } else {
            self.raw_width as i32
        }
    }

    fn height(&self) -> i32 {
        if self.rotation.swaps_axes() {
            self.raw_width as i32
        } else {
            self.raw_height as i32
        }
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: u16) {
        self.set_pixel(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    #[test]
    fn rejects_short_and_unaligned_buffers() {
        let mut short = [0u8; 10];
        assert_eq!(
            MonoFramebuffer::new(&mut short).err(),
            Some(Error::BufferTooSmall { len: 10, required: BUFFER_LEN })
        );
        let mut buf = [0u8; 64];
        assert_eq!(
            MonoFramebuffer::with_dimensions(&mut buf, 12, 8).err(),
            Some(Error::UnalignedWidth(12))
        );
    }

    #[test]
    fn from_bits_masks_to_two_bits() {
        assert_eq!(Rotation::from_bits(5), Rotation::Deg90);
        assert_eq!(Rotation::from_bits(255), Rotation::Deg270);
        for r in ROTATIONS {
            assert_eq!(Rotation::from_bits(r.bits()), r);
        }
    }

    #[test]
    fn polarity_holds_under_every_rotation() {
        let mut buf = [0u8; BUFFER_LEN];
        let mut fb = MonoFramebuffer::new(&mut buf).unwrap();
        for r in ROTATIONS {
            fb.set_rotation(r);
            let (w, h) = (fb.width(), fb.height());
            for &(x, y) in &[(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1), (37, 91)] {
                fb.set_pixel(x, y, 0);
                assert_eq!(fb.stored_bit(x, y), Some(true));
                fb.set_pixel(x, y, 1);
                assert_eq!(fb.stored_bit(x, y), Some(false));
                fb.set_pixel(x, y, 0xFFFF);
                assert_eq!(fb.stored_bit(x, y), Some(false));
            }
        }
    }

    #[test]
    fn packs_msb_first_at_raw_width() {
        let mut buf = [0xFFu8; BUFFER_LEN];
        let mut fb = MonoFramebuffer::new(&mut buf).unwrap();
        fb.set_pixel(0, 0, 1);
        fb.set_pixel(9, 0, 1);
        fb.set_pixel(7, 2, 1);
        let bytes = fb.buffer();
        assert_eq!(bytes[0], 0x7F);
        assert_eq!(bytes[1], 0xBF);
        assert_eq!(bytes[2 * WIDTH / 8], 0xFE);
    }

    #[test]
    fn rotations_land_on_expected_raw_bits() {
        let (w, h) = (WIDTH as i32, HEIGHT as i32);
        assert_eq!(Rotation::Deg0.transform(3, 5, w, h), (3, 5));
        assert_eq!(Rotation::Deg90.transform(3, 5, w, h), (w - 6, 3));
        assert_eq!(Rotation::Deg180.transform(3, 5, w, h), (w - 4, h - 6));
        assert_eq!(Rotation::Deg270.transform(3, 5, w, h), (5, h - 4));

        let mut buf = [0u8; BUFFER_LEN];
        let mut fb = MonoFramebuffer::new(&mut buf).unwrap();
        fb.set_rotation(Rotation::Deg90);
        fb.set_pixel(0, 0, 0);
        // Logical origin sits in the raw top-right corner.
        assert_eq!(fb.buffer()[WIDTH / 8 - 1], 0x01);
    }

    #[test]
    fn half_turn_is_an_involution() {
        let (w, h) = (WIDTH as i32, HEIGHT as i32);
        for &(x, y) in &[(0, 0), (17, 200), (w - 1, h - 1), (100, 3)] {
            let (rx, ry) = Rotation::Deg180.transform(x, y, w, h);
            assert_eq!(Rotation::Deg180.transform(rx, ry, w, h), (x, y));
        }
    }

    #[test]
    fn quarter_turns_are_bijections() {
        let (w, h) = (16, 24);
        let mut buf = [0u8; 16 * 24 / 8];
        let mut fb = MonoFramebuffer::with_dimensions(&mut buf, 16, 24).unwrap();
        for r in [Rotation::Deg90, Rotation::Deg270] {
            fb.set_rotation(r);
            assert_eq!((fb.width(), fb.height()), (h, w));
            fb.fill(1);
            for y in 0..fb.height() {
                for x in 0..fb.width() {
                    fb.set_pixel(x, y, 0);
                }
            }
            assert!(fb.buffer().iter().all(|&b| b == 0xFF));
        }
    }

    #[test]
    fn quarter_turns_invert_each_other() {
        // Deg270 on the transposed grid undoes Deg90, and the other way round.
        let (w, h) = (WIDTH as i32, HEIGHT as i32);
        for y in (0..w).step_by(7) {
            for x in (0..h).step_by(5) {
                let (rx, ry) = Rotation::Deg90.transform(x, y, w, h);
                assert!((0..w).contains(&rx) && (0..h).contains(&ry));
                assert_eq!(Rotation::Deg270.transform(rx, ry, h, w), (x, y));

                let (rx, ry) = Rotation::Deg270.transform(x, y, w, h);
                assert_eq!(Rotation::Deg90.transform(rx, ry, h, w), (x, y));
            }
        }
    }

    #[test]
    fn extreme_coordinates_fall_off_panel() {
        let mut buf = [0u8; BUFFER_LEN];
        let mut fb = MonoFramebuffer::new(&mut buf).unwrap();
        for r in ROTATIONS {
            fb.set_rotation(r);
            for &(x, y) in &[(i32::MIN, i32::MIN), (i32::MAX, i32::MAX), (i32::MIN, 0), (0, i32::MAX)] {
                fb.set_pixel(x, y, 0);
                assert_eq!(fb.stored_bit(x, y), None);
            }
            fb.fill_rect(i32::MAX - 1, i32::MAX - 1, 4, 4, 0);
        }
        assert!(fb.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn off_panel_pixels_are_discarded() {
        let mut buf = [0u8; BUFFER_LEN];
        let mut fb = MonoFramebuffer::new(&mut buf).unwrap();
        fb.set_pixel(-1, 0, 0);
        fb.set_pixel(WIDTH as i32, 0, 0);
        fb.set_pixel(0, HEIGHT as i32, 0);
        assert!(fb.buffer().iter().all(|&b| b == 0));
        assert_eq!(fb.stored_bit(-1, 0), None);
    }

    #[test]
    fn fill_uses_inverted_polarity() {
        let mut buf = [0x5Au8; BUFFER_LEN];
        let mut fb = MonoFramebuffer::new(&mut buf).unwrap();
        fb.fill(0);
        assert!(fb.buffer().iter().all(|&b| b == 0xFF));
        fb.fill(1);
        assert!(fb.buffer().iter().all(|&b| b == 0x00));
    }
}
