//! Text rendering for 1-bit e-ink framebuffers.
//!
//! Characters are laid out with a cursor, rasterized from either the built-in
//! 5x8 font or a proportional glyph font, and written as packed bits into a
//! caller-owned frame buffer under one of four display rotations. Moving the
//! buffer to the panel is left to the display driver.

#![cfg_attr(not(test), no_std)]

pub mod encoding;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod glyph;
pub mod style;
pub mod writer;

pub use error::Error;
pub use font::{Font, GfxFont, Glyph};
pub use framebuffer::{Canvas, MonoFramebuffer, Rotation, BUFFER_LEN, HEIGHT, WIDTH};
pub use style::TextStyle;
pub use writer::{init, Bounds, Writer, WRITER};
