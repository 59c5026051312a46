// SPDX-FileCopyrightText: 2025 Felix Gruber
//
// SPDX-License-Identifier: GPL-3.0-or-later

use super::color::{Color, WHITE};
use super::font::{GlyphTable, GLYPH_HEIGHT, trim_whitespace};
use super::error::Result;
use super::io::{GRID_WIDTH, NUM_PIXELS};

/// Turns strings into full-grid frames using the packed font asset.
///
/// The frames produced here are in the font's native orientation; the
/// grid pushes them through a left-rotated transform to compensate.
pub struct TextRenderer {
    glyphs: GlyphTable,
}

impl TextRenderer {
    pub fn new() -> Result<Self> {
        Ok(Self { glyphs: GlyphTable::new()? })
    }

    /// A single static frame: one blank column, the untrimmed glyph,
    /// and blank columns padding out to the full grid.
    ///
    /// Lit font pixels become `text_color`, everything else
    /// `back_color`.
    pub fn letter_frame(&self, character: char, text_color: Color,
                        back_color: Color) -> [Color; NUM_PIXELS] {
        let glyph = self.glyphs.glyph_for(character);
        let mut frame = [back_color; NUM_PIXELS];
        for (cell, pixel) in frame[GLYPH_HEIGHT..].iter_mut().zip(glyph) {
            if *pixel == WHITE {
                *cell = text_color;
            }
        }
        frame
    }

    /// The scrolling frames for a message.
    ///
    /// The underlying scroll sequence is 8 blank columns, then each
    /// character's trimmed glyph followed by one blank column, then 8
    /// more blank columns, so the text enters from one edge and leaves
    /// over the other.
    pub fn message_frames(&self, text: &str, text_color: Color,
                          back_color: Color) -> MessageFrames {
        let mut lit = vec![false; NUM_PIXELS];
        for character in text.chars() {
            let glyph = trim_whitespace(self.glyphs.glyph_for(character));
            lit.extend(glyph.iter().map(|pixel| *pixel == WHITE));
            lit.extend([false; GLYPH_HEIGHT]);
        }
        lit.extend([false; NUM_PIXELS]);
        MessageFrames {
            lit,
            offset: 0,
            text_color,
            back_color,
        }
    }
}

/// A sliding window over a scroll sequence, advancing one column per
/// frame.
pub struct MessageFrames {
    lit: Vec<bool>,
    offset: usize,
    text_color: Color,
    back_color: Color,
}

impl MessageFrames {
    pub fn num_frames(&self) -> usize {
        (self.lit.len() / GLYPH_HEIGHT).saturating_sub(GRID_WIDTH)
    }
}

impl Iterator for MessageFrames {
    type Item = [Color; NUM_PIXELS];

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.num_frames() {
            return None;
        }
        let start = self.offset * GLYPH_HEIGHT;
        let mut frame = [self.back_color; NUM_PIXELS];
        for (cell, lit) in frame.iter_mut()
                                .zip(&self.lit[start..start + NUM_PIXELS]) {
            if *lit {
                *cell = self.text_color;
            }
        }
        self.offset += 1;
        Some(frame)
    }
}
