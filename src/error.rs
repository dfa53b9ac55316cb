/// Errors reported while attaching a framebuffer or staging formatted text.
///
/// Rendering itself has no error channel: out-of-range glyph codes are
/// dropped and off-panel pixels are discarded.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The caller's byte slice cannot hold one bit per physical pixel.
    BufferTooSmall { len: usize, required: usize },
    /// Raw panel widths must pack into whole bytes per row.
    UnalignedWidth(usize),
    /// Formatted output did not fit the staging buffer and was discarded.
    FormatOverflow { capacity: usize },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BufferTooSmall { len, required } => {
                write!(f, "framebuffer too small: {} bytes, need {}", len, required)
            }
            Error::UnalignedWidth(width) => {
                write!(f, "raw width {} is not a multiple of 8", width)
            }
            Error::FormatOverflow { capacity } => {
                write!(f, "formatted text exceeds {} bytes", capacity)
            }
        }
    }
}
