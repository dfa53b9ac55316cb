/// Proportional 5x8 glyph font.
///
/// Glyph shapes of the classic table trimmed to their inked extent, so
/// narrow characters advance less than wide ones. The cursor y names the
/// cell's bottom row, which only descenders reach.

use super::gfx::{GfxFont, Glyph};

static TINY_BITMAPS: [u8; 379] = [
    0xFA, 0xB6, 0x80, 0x52, 0xBE, 0xAF, 0xA9, 0x40, 0x23, 0xE8, 0xE2, 0xF8,
    0x80, 0xC6, 0x44, 0x44, 0x4C, 0x60, 0x45, 0x28, 0x8A, 0xC9, 0xA0, 0x6D,
    0x40, 0x2A, 0x48, 0x88, 0x88, 0x92, 0xA0, 0x25, 0x5D, 0xF7, 0x54, 0x80,
    0x21, 0x3E, 0x42, 0x00, 0x6D, 0x40, 0xF8, 0xF0, 0x08, 0x88, 0x88, 0x00,
    0x74, 0x67, 0x5C, 0xC5, 0xC0, 0x59, 0x24, 0xB8, 0x74, 0x42, 0xE8, 0x43,
    0xE0, 0xF8, 0x44, 0x60, 0xC5, 0xC0, 0x11, 0x95, 0x2F, 0x88, 0x40, 0xFC,
    0x3C, 0x10, 0xC5, 0xC0, 0x3A, 0x21, 0xE8, 0xC5, 0xC0, 0xF8, 0x42, 0x22,
    0x22, 0x00, 0x74, 0x62, 0xE8, 0xC5, 0xC0, 0x74, 0x62, 0xF0, 0x8B, 0x80,
    0xA0, 0x45, 0x80, 0x12, 0x48, 0x42, 0x10, 0xF8, 0x3E, 0x84, 0x21, 0x24,
    0x80, 0x74, 0x42, 0x62, 0x00, 0x80, 0x74, 0x6B, 0x7B, 0x41, 0xE0, 0x22,
    0xA3, 0x1F, 0xC6, 0x20, 0xF4, 0x63, 0xE8, 0xC7, 0xC0, 0x74, 0x61, 0x08,
    0x45, 0xC0, 0xF4, 0x63, 0x18, 0xC7, 0xC0, 0xFC, 0x21, 0xE8, 0x43, 0xE0,
    0xFC, 0x21, 0xE8, 0x42, 0x00, 0x7C, 0x61, 0x09, 0xC5, 0xE0, 0x8C, 0x63,
    0xF8, 0xC6, 0x20, 0xE9, 0x24, 0xB8, 0x38, 0x84, 0x21, 0x49, 0x80, 0x8C,
    0xA9, 0x8A, 0x4A, 0x20, 0x84, 0x21, 0x08, 0x43, 0xE0, 0x8E, 0xEB, 0x5A,
    0xC6, 0x20, 0x8C, 0x73, 0x59, 0xC6, 0x20, 0x74, 0x63, 0x18, 0xC5, 0xC0,
    0xF4, 0x63, 0xE8, 0x42, 0x00, 0x74, 0x63, 0x1A, 0xC9, 0xA0, 0xF4, 0x63,
    0xEA, 0x4A, 0x20, 0x74, 0x60, 0xE0, 0xC5, 0xC0, 0xFD, 0x48, 0x42, 0x10,
    0x80, 0x8C, 0x63, 0x18, 0xC5, 0xC0, 0x8C, 0x63, 0x18, 0xA8, 0x80, 0x8C,
    0x63, 0x5A, 0xD5, 0x40, 0x8C, 0x54, 0x45, 0x46, 0x20, 0x8C, 0x54, 0x42,
    0x10, 0x80, 0xF8, 0x44, 0xE4, 0x43, 0xE0, 0xF8, 0x88, 0x88, 0xF0, 0x82,
    0x08, 0x20, 0x80, 0xF1, 0x11, 0x11, 0xF0, 0x22, 0xA2, 0xF8, 0xD9, 0x10,
    0x60, 0x9D, 0x27, 0x80, 0x84, 0x2D, 0x98, 0xE6, 0xC0, 0x74, 0x61, 0x17,
    0x00, 0x08, 0x5B, 0x38, 0xCD, 0xA0, 0x74, 0x7F, 0x07, 0x00, 0x25, 0x4E,
    0x44, 0x40, 0x74, 0xE6, 0xD0, 0xB8, 0x84, 0x2D, 0x98, 0xC6, 0x20, 0x43,
    0x24, 0xB8, 0x10, 0x11, 0x19, 0x60, 0x88, 0x9A, 0xCA, 0x90, 0xC9, 0x24,
    0xB8, 0xD5, 0x6B, 0x5A, 0x80, 0xB6, 0x63, 0x18, 0x80, 0x74, 0x63, 0x17,
    0x00, 0xB6, 0x73, 0x68, 0x40, 0x6C, 0xE6, 0xD0, 0x84, 0xB6, 0x61, 0x08,
    0x00, 0x7C, 0x1C, 0x1F, 0x00, 0x21, 0x3E, 0x42, 0x14, 0x40, 0x8C, 0x63,
    0x36, 0x80, 0x8C, 0x62, 0xA2, 0x00, 0x8C, 0x6B, 0x55, 0x00, 0x8A, 0x88,
    0xA8, 0x80, 0x8C, 0x5E, 0x18, 0xB8, 0xF8, 0x88, 0x8F, 0x80, 0x29, 0x44,
    0x88, 0xEE, 0x89, 0x14, 0xA0, 0x45, 0x44,
];

static TINY_GLYPHS: [Glyph; 95] = [
    Glyph::new(0, 0, 0, 3, 0, 0), // 0x20 ' '
    Glyph::new(0, 1, 7, 2, 0, -7), // 0x21 '!'
    Glyph::new(1, 3, 3, 4, 0, -7), // 0x22 '"'
    Glyph::new(3, 5, 7, 6, 0, -7), // 0x23 '#'
    Glyph::new(8, 5, 7, 6, 0, -7), // 0x24 '$'
    Glyph::new(13, 5, 7, 6, 0, -7), // 0x25 '%'
    Glyph::new(18, 5, 7, 6, 0, -7), // 0x26 '&'
    Glyph::new(23, 3, 4, 4, 0, -7), // 0x27 '\''
    Glyph::new(25, 3, 7, 4, 0, -7), // 0x28 '('
    Glyph::new(28, 3, 7, 4, 0, -7), // 0x29 ')'
    Glyph::new(31, 5, 7, 6, 0, -7), // 0x2A '*'
    Glyph::new(36, 5, 5, 6, 0, -6), // 0x2B '+'
    Glyph::new(40, 3, 4, 4, 0, -3), // 0x2C ','
    Glyph::new(42, 5, 1, 6, 0, -4), // 0x2D '-'
    Glyph::new(43, 2, 2, 3, 0, -2), // 0x2E '.'
    Glyph::new(44, 5, 5, 6, 0, -6), // 0x2F '/'
    Glyph::new(48, 5, 7, 6, 0, -7), // 0x30 '0'
    Glyph::new(53, 3, 7, 4, 0, -7), // 0x31 '1'
    Glyph::new(56, 5, 7, 6, 0, -7), // 0x32 '2'
    Glyph::new(61, 5, 7, 6, 0, -7), // 0x33 '3'
    Glyph::new(66, 5, 7, 6, 0, -7), // 0x34 '4'
    Glyph::new(71, 5, 7, 6, 0, -7), // 0x35 '5'
    Glyph::new(76, 5, 7, 6, 0, -7), // 0x36 '6'
    Glyph::new(81, 5, 7, 6, 0, -7), // 0x37 '7'
    Glyph::new(86, 5, 7, 6, 0, -7), // 0x38 '8'
    Glyph::new(91, 5, 7, 6, 0, -7), // 0x39 '9'
    Glyph::new(96, 1, 3, 2, 0, -5), // 0x3A ':'
    Glyph::new(97, 2, 5, 3, 0, -5), // 0x3B ';'
    Glyph::new(99, 4, 7, 5, 0, -7), // 0x3C '<'
    Glyph::new(103, 5, 3, 6, 0, -5), // 0x3D '='
    Glyph::new(105, 4, 7, 5, 0, -7), // 0x3E '>'
    Glyph::new(109, 5, 7, 6, 0, -7), // 0x3F '?'
    Glyph::new(114, 5, 7, 6, 0, -7), // 0x40 '@'
    Glyph::new(119, 5, 7, 6, 0, -7), // 0x41 'A'
    Glyph::new(124, 5, 7, 6, 0, -7), // 0x42 'B'
    Glyph::new(129, 5, 7, 6, 0, -7), // 0x43 'C'
    Glyph::new(134, 5, 7, 6, 0, -7), // 0x44 'D'
    Glyph::new(139, 5, 7, 6, 0, -7), // 0x45 'E'
    Glyph::new(144, 5, 7, 6, 0, -7), // 0x46 'F'
    Glyph::new(149, 5, 7, 6, 0, -7), // 0x47 'G'
    Glyph::new(154, 5, 7, 6, 0, -7), // 0x48 'H'
    Glyph::new(159, 3, 7, 4, 0, -7), // 0x49 'I'
    Glyph::new(162, 5, 7, 6, 0, -7), // 0x4A 'J'
    Glyph::new(167, 5, 7, 6, 0, -7), // 0x4B 'K'
    Glyph::new(172, 5, 7, 6, 0, -7), // 0x4C 'L'
    Glyph::new(177, 5, 7, 6, 0, -7), // 0x4D 'M'
    Glyph::new(182, 5, 7, 6, 0, -7), // 0x4E 'N'
    Glyph::new(187, 5, 7, 6, 0, -7), // 0x4F 'O'
    Glyph::new(192, 5, 7, 6, 0, -7), // 0x50 'P'
    Glyph::new(197, 5, 7, 6, 0, -7), // 0x51 'Q'
    Glyph::new(202, 5, 7, 6, 0, -7), // 0x52 'R'
    Glyph::new(207, 5, 7, 6, 0, -7), // 0x53 'S'
    Glyph::new(212, 5, 7, 6, 0, -7), // 0x54 'T'
    Glyph::new(217, 5, 7, 6, 0, -7), // 0x55 'U'
    Glyph::new(222, 5, 7, 6, 0, -7), // 0x56 'V'
    Glyph::new(227, 5, 7, 6, 0, -7), // 0x57 'W'
    Glyph::new(232, 5, 7, 6, 0, -7), // 0x58 'X'
    Glyph::new(237, 5, 7, 6, 0, -7), // 0x59 'Y'
    Glyph::new(242, 5, 7, 6, 0, -7), // 0x5A 'Z'
    Glyph::new(247, 4, 7, 5, 0, -7), // 0x5B '['
    Glyph::new(251, 5, 5, 6, 0, -6), // 0x5C '\\'
    Glyph::new(255, 4, 7, 5, 0, -7), // 0x5D ']'
    Glyph::new(259, 5, 3, 6, 0, -7), // 0x5E '^'
    Glyph::new(261, 5, 1, 6, 0, -1), // 0x5F '_'
    Glyph::new(262, 3, 4, 4, 0, -7), // 0x60 '`'
    Glyph::new(264, 5, 5, 6, 0, -5), // 0x61 'a'
    Glyph::new(268, 5, 7, 6, 0, -7), // 0x62 'b'
    Glyph::new(273, 5, 5, 6, 0, -5), // 0x63 'c'
    Glyph::new(277, 5, 7, 6, 0, -7), // 0x64 'd'
    Glyph::new(282, 5, 5, 6, 0, -5), // 0x65 'e'
    Glyph::new(286, 4, 7, 5, 0, -7), // 0x66 'f'
    Glyph::new(290, 5, 6, 6, 0, -5), // 0x67 'g'
    Glyph::new(294, 5, 7, 6, 0, -7), // 0x68 'h'
    Glyph::new(299, 3, 7, 4, 0, -7), // 0x69 'i'
    Glyph::new(302, 4, 7, 5, 0, -7), // 0x6A 'j'
    Glyph::new(306, 4, 7, 5, 0, -7), // 0x6B 'k'
    Glyph::new(310, 3, 7, 4, 0, -7), // 0x6C 'l'
    Glyph::new(313, 5, 5, 6, 0, -5), // 0x6D 'm'
    Glyph::new(317, 5, 5, 6, 0, -5), // 0x6E 'n'
    Glyph::new(321, 5, 5, 6, 0, -5), // 0x6F 'o'
    Glyph::new(325, 5, 6, 6, 0, -5), // 0x70 'p'
    Glyph::new(329, 5, 6, 6, 0, -5), // 0x71 'q'
    Glyph::new(333, 5, 5, 6, 0, -5), // 0x72 'r'
    Glyph::new(337, 5, 5, 6, 0, -5), // 0x73 's'
    Glyph::new(341, 5, 7, 6, 0, -7), // 0x74 't'
    Glyph::new(346, 5, 5, 6, 0, -5), // 0x75 'u'
    Glyph::new(350, 5, 5, 6, 0, -5), // 0x76 'v'
    Glyph::new(354, 5, 5, 6, 0, -5), // 0x77 'w'
    Glyph::new(358, 5, 5, 6, 0, -5), // 0x78 'x'
    Glyph::new(362, 5, 6, 6, 0, -5), // 0x79 'y'
    Glyph::new(366, 5, 5, 6, 0, -5), // 0x7A 'z'
    Glyph::new(370, 3, 7, 4, 0, -7), // 0x7B '{'
    Glyph::new(373, 1, 7, 2, 0, -7), // 0x7C '|'
    Glyph::new(374, 3, 7, 4, 0, -7), // 0x7D '}'
    Glyph::new(377, 5, 3, 6, 0, -7), // 0x7E '~'
];

pub static TINY_5X8: GfxFont<'static> = GfxFont {
    bitmap: &TINY_BITMAPS,
    glyphs: &TINY_GLYPHS,
    first: 0x20,
    last: 0x7E,
    y_advance: 9,
};
