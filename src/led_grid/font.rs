use std::collections::HashMap;

use super::color::Color;
use super::decode;
use super::error::Result;
use super::io::GRID_WIDTH;

/// The characters supported by `show_message` and `show_letter`, in the
/// order their glyphs appear in the packed font image.
pub const SUPPORTED_CHARS: &str =
    r##" +-*/!"#$><0123456789.=)(ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz?,;:|@%[&_']\~"##;

// The font image is rotated right through 90 degrees so that each 5x8
// character occupies one contiguous block of 40 pixels: every run of 8
// pixels is one column of the glyph. The text renderer compensates by
// pushing its frames through a left-rotated transform.
static FONT_IMAGE: &[u8] = include_bytes!("font.png");

pub const GLYPH_HEIGHT: usize = GRID_WIDTH;
pub const GLYPH_WIDTH: usize = 5;
const GLYPH_PIXELS: usize = GLYPH_WIDTH * GLYPH_HEIGHT;

/// The character to pixel-block mapping built from the packed font image.
pub struct GlyphTable {
    glyphs: HashMap<char, Vec<Color>>,
}

impl GlyphTable {
    pub fn new() -> Result<Self> {
        let pixels = decode::decode_rgb(FONT_IMAGE)?;
        let mut glyphs = HashMap::new();
        for (block, character) in pixels.chunks_exact(GLYPH_PIXELS)
                                        .zip(SUPPORTED_CHARS.chars()) {
            glyphs.insert(character, block.to_vec());
        }
        Ok(Self { glyphs })
    }

    /// The glyph for a character, or the one for '?' if the character is
    /// not supported.
    pub fn glyph_for(&self, character: char) -> &[Color] {
        self.glyphs.get(&character)
            .unwrap_or_else(|| &self.glyphs[&'?'])
    }
}

/// Strip blank leading and trailing columns from a glyph.
///
/// A glyph with no content at all is returned unchanged, otherwise the
/// trimming would strip it to nothing.
pub fn trim_whitespace(mut glyph: &[Color]) -> &[Color] {
    if glyph.iter().all(|pixel| pixel.is_off()) {
        return glyph;
    }
    while is_blank(&glyph[..GLYPH_HEIGHT]) {
        glyph = &glyph[GLYPH_HEIGHT..];
    }
    while is_blank(&glyph[glyph.len() - GLYPH_HEIGHT..]) {
        glyph = &glyph[..glyph.len() - GLYPH_HEIGHT];
    }
    glyph
}

fn is_blank(column: &[Color]) -> bool {
    column.iter().all(|pixel| pixel.is_off())
}
