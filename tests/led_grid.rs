use std::time::Duration;

use ledgrid_rs::led_grid::LEDGrid;
use ledgrid_rs::led_grid::animation::ColorCycler;
use ledgrid_rs::led_grid::color::{self, Color};
use ledgrid_rs::led_grid::error::Error;
use ledgrid_rs::led_grid::io::{IO, NUM_PIXELS};
use ledgrid_rs::led_grid::rotation::Rotation;

struct TestWindow {
    cells: Vec<(Color, bool)>,
    presents: usize,
}

impl Default for TestWindow {
    fn default() -> Self {
        Self {
            cells: vec![(color::OFF, false); NUM_PIXELS],
            presents: 0,
        }
    }
}

impl IO for TestWindow {
    fn draw_cell(&mut self, index: usize, color: Color, lit: bool) {
        self.cells[index] = (color, lit);
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn is_esc_pressed(&self) -> bool {
        false
    }
}

fn test_grid() -> LEDGrid<TestWindow> {
    LEDGrid::builder().use_window(TestWindow::default()).build()
}

/// 64 distinct colors, so misplaced pixels are detectable.
fn gradient() -> Vec<Color> {
    (0..NUM_PIXELS as u8).map(|i| Color::new(i, 255 - i, i / 2)).collect()
}

const ROTATIONS: [Rotation; 4] = [
    Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270,
];

#[test]
fn set_pixels_round_trips_under_every_rotation() {
    let mut grid = test_grid();
    let pixels = gradient();
    for rotation in ROTATIONS {
        grid.set_rotation(rotation, false);
        grid.set_pixels(&pixels).unwrap();
        assert_eq!(grid.get_pixels().to_vec(), pixels);
    }
}

#[test]
fn physical_index_is_a_bijection() {
    for rotation in ROTATIONS {
        let mut targets: Vec<usize> = (0..NUM_PIXELS)
            .map(|i| rotation.physical_index(i))
            .collect();
        targets.sort();
        assert_eq!(targets, (0..NUM_PIXELS).collect::<Vec<_>>());
    }
}

#[test]
fn physical_index_matches_the_device_layout() {
    // Index 10 is row 1, column 2.
    assert_eq!(Rotation::R0.physical_index(10), 17);
    assert_eq!(Rotation::R90.physical_index(0), 56);
    assert_eq!(Rotation::R180.physical_index(0), 63);
    assert_eq!(Rotation::R270.physical_index(0), 7);
}

#[test]
fn flips_are_involutions() {
    let mut grid = test_grid();
    grid.set_pixels(&gradient()).unwrap();
    let original = grid.get_pixels();
    grid.flip_h(true);
    grid.flip_h(true);
    assert_eq!(grid.get_pixels(), original);
    grid.flip_v(true);
    grid.flip_v(true);
    assert_eq!(grid.get_pixels(), original);
}

#[test]
fn flip_h_reverses_each_row() {
    let mut grid = test_grid();
    grid.set_pixel(0, 0, color::RED).unwrap();
    let flipped = grid.flip_h(true);
    assert_eq!(flipped[7], color::RED);
    assert_eq!(grid.get_pixel(7, 0).unwrap(), color::RED);
    assert_eq!(grid.get_pixel(0, 0).unwrap(), color::OFF);
}

#[test]
fn flip_v_reverses_row_order() {
    let mut grid = test_grid();
    grid.set_pixel(2, 0, color::GREEN).unwrap();
    let flipped = grid.flip_v(true);
    assert_eq!(flipped[7 * 8 + 2], color::GREEN);
    assert_eq!(grid.get_pixel(2, 7).unwrap(), color::GREEN);
}

#[test]
fn flip_without_redraw_leaves_the_buffer_alone() {
    let mut grid = test_grid();
    grid.set_pixel(0, 0, color::RED).unwrap();
    let flipped = grid.flip_h(false);
    assert_eq!(flipped[7], color::RED);
    assert_eq!(grid.get_pixel(0, 0).unwrap(), color::RED);
    assert_eq!(grid.get_pixel(7, 0).unwrap(), color::OFF);
}

#[test]
fn set_pixel_changes_exactly_one_cell() {
    let mut grid = test_grid();
    let pixels = gradient();
    grid.set_pixels(&pixels).unwrap();
    grid.set_pixel(3, 4, color::CYAN).unwrap();
    assert_eq!(grid.get_pixel(3, 4).unwrap(), color::CYAN);
    for (index, pixel) in grid.get_pixels().into_iter().enumerate() {
        if index != 4 * 8 + 3 {
            assert_eq!(pixel, pixels[index]);
        }
    }
}

#[test]
fn set_pixel_redraws_through_the_current_rotation() {
    let mut grid = test_grid();
    grid.set_rotation(Rotation::R90, false);
    let presents_before = grid.window().presents;
    grid.set_pixel(0, 0, color::RED).unwrap();
    assert_eq!(grid.window().cells[56], (color::RED, true));
    assert_eq!(grid.window().presents, presents_before + 1);
}

#[test]
fn set_pixels_rejects_wrong_lengths() {
    let mut grid = test_grid();
    grid.set_pixel(1, 1, color::YELLOW).unwrap();
    let before = grid.get_pixels();
    for len in [63, 65] {
        let pixels = vec![color::RED; len];
        assert!(matches!(grid.set_pixels(&pixels),
                         Err(Error::Validation(_))));
        assert_eq!(grid.get_pixels(), before);
    }
}

#[test]
fn coordinates_out_of_range_are_rejected() {
    let mut grid = test_grid();
    assert!(matches!(grid.set_pixel(8, 0, color::RED),
                     Err(Error::Validation(_))));
    assert!(matches!(grid.set_pixel(0, 8, color::RED),
                     Err(Error::Validation(_))));
    assert!(matches!(grid.get_pixel(8, 0), Err(Error::Validation(_))));
    assert!(matches!(grid.get_pixel(0, 8), Err(Error::Validation(_))));
}

#[test]
fn color_channels_out_of_range_do_not_parse() {
    assert_eq!("255, 128, 0".parse::<Color>().unwrap(), color::ORANGE);
    for s in ["256,0,0", "-1,0,0", "0,0", "0,0,0,0", "a,b,c"] {
        assert!(matches!(s.parse::<Color>(), Err(Error::Validation(_))));
    }
}

#[test]
fn only_quarter_turn_rotations_are_valid() {
    for degrees in [0, 90, 180, 270] {
        assert_eq!(Rotation::from_degrees(degrees).unwrap().degrees(),
                   degrees);
    }
    for degrees in [45, 360, 1] {
        assert!(matches!(Rotation::from_degrees(degrees),
                         Err(Error::Validation(_))));
    }
}

#[test]
fn clear_fills_every_cell() {
    let mut grid = test_grid();
    grid.clear(color::PURPLE);
    assert!(grid.get_pixels().into_iter().all(|p| p == color::PURPLE));
    grid.clear(color::OFF);
    assert!(grid.get_pixels().into_iter().all(|p| p == color::OFF));
}

#[test]
fn unlit_cells_light_up_with_black_is_color() {
    let grid = test_grid();
    assert!(grid.window().cells.iter().all(|&(_, lit)| !lit));
    let grid = LEDGrid::builder()
        .use_window(TestWindow::default())
        .black_is_color(true)
        .build();
    assert!(grid.window().cells.iter().all(|&(_, lit)| lit));
}

#[test]
fn color_cycler_returns_to_its_start_after_a_full_period() {
    let mut cycler = ColorCycler::new();
    let start = cycler.color();
    for _ in 0..6 * 255 {
        cycler.advance();
    }
    assert_eq!(cycler.color(), start);
}

#[test]
fn color_cycler_stays_on_the_hue_edge() {
    let mut cycler = ColorCycler::new();
    let mut previous = cycler.color();
    for _ in 0..6 * 255 {
        cycler.advance();
        let current = cycler.color();
        let channels = [current.r, current.g, current.b];
        assert!(channels.contains(&255));
        assert!(channels.contains(&0));
        // Exactly one channel moved, by exactly one.
        let moved: i32 =
            (current.r as i32 - previous.r as i32).abs()
            + (current.g as i32 - previous.g as i32).abs()
            + (current.b as i32 - previous.b as i32).abs();
        assert_eq!(moved, 1);
        previous = current;
    }
}

#[cfg(feature = "image")]
mod text {
    use super::*;

    use ledgrid_rs::led_grid::color::WHITE;
    use ledgrid_rs::led_grid::font::{GlyphTable, trim_whitespace};
    use ledgrid_rs::led_grid::text::TextRenderer;

    #[test]
    fn glyph_lookup_is_idempotent() {
        let glyphs = GlyphTable::new().unwrap();
        assert_eq!(glyphs.glyph_for('Z'), glyphs.glyph_for('Z'));
        assert_eq!(glyphs.glyph_for('Z').len(), 40);
    }

    #[test]
    fn unsupported_characters_fall_back_to_the_question_mark() {
        let glyphs = GlyphTable::new().unwrap();
        assert_eq!(glyphs.glyph_for('€'), glyphs.glyph_for('?'));
        assert_ne!(glyphs.glyph_for('€'), glyphs.glyph_for('A'));
    }

    fn synthetic_glyph(columns: &[bool]) -> Vec<Color> {
        let mut glyph = Vec::new();
        for &lit in columns {
            glyph.extend([if lit { WHITE } else { color::OFF }; 8]);
        }
        glyph
    }

    #[test]
    fn trimming_strips_exactly_the_blank_edge_columns() {
        let glyph = synthetic_glyph(&[false, false, true, true, false]);
        assert_eq!(trim_whitespace(&glyph),
                   &synthetic_glyph(&[true, true])[..]);
        // Blank columns in the middle survive.
        let glyph = synthetic_glyph(&[false, true, false, true, false]);
        assert_eq!(trim_whitespace(&glyph),
                   &synthetic_glyph(&[true, false, true])[..]);
    }

    #[test]
    fn trimming_leaves_an_all_blank_glyph_unchanged() {
        let glyph = synthetic_glyph(&[false; 5]);
        assert_eq!(trim_whitespace(&glyph), &glyph[..]);
    }

    #[test]
    fn letter_frames_pad_the_glyph_to_a_full_grid() {
        let text = TextRenderer::new().unwrap();
        let fg = color::YELLOW;
        let bg = color::PURPLE;
        let frame = text.letter_frame('A', fg, bg);
        let glyphs = GlyphTable::new().unwrap();
        let glyph = glyphs.glyph_for('A');
        assert!(frame[..8].iter().all(|&p| p == bg));
        for (cell, pixel) in frame[8..48].iter().zip(glyph) {
            assert_eq!(*cell, if *pixel == WHITE { fg } else { bg });
        }
        assert!(frame[48..].iter().all(|&p| p == bg));
    }

    #[test]
    fn message_frames_scan_all_columns_but_the_last_window() {
        let text = TextRenderer::new().unwrap();
        let fg = color::GREEN;
        let bg = color::OFF;
        let glyphs = GlyphTable::new().unwrap();
        let glyph_columns = trim_whitespace(glyphs.glyph_for('A')).len() / 8;
        // 8 columns of padding on each side, plus one after the glyph.
        let total_columns = 8 + glyph_columns + 1 + 8;
        let frames: Vec<_> = text.message_frames("A", fg, bg).collect();
        assert_eq!(frames.len(), total_columns - 8);
        for frame in &frames {
            assert!(frame.iter().all(|&p| p == fg || p == bg));
        }
        // The first window covers only the leading padding; the glyph
        // enters over the right edge one frame later.
        assert!(frames[0].iter().all(|&p| p == bg));
        assert!(frames[1][56..].iter().any(|&p| p == fg));
    }

    #[test]
    fn messages_of_unsupported_characters_render_as_question_marks() {
        let text = TextRenderer::new().unwrap();
        let fg = color::WHITE;
        let bg = color::OFF;
        let fallback: Vec<_> = text.message_frames("€", fg, bg).collect();
        let question: Vec<_> = text.message_frames("?", fg, bg).collect();
        assert_eq!(fallback, question);
    }

    #[test]
    fn show_message_presents_one_frame_per_column_step() {
        let mut grid = test_grid();
        let text = TextRenderer::new().unwrap();
        let expected = text
            .message_frames("A", color::WHITE, color::OFF)
            .num_frames();
        let presents_before = grid.window().presents;
        grid.show_message("A", Duration::ZERO, color::WHITE, color::OFF)
            .unwrap();
        assert_eq!(grid.window().presents, presents_before + expected);
    }

    #[test]
    fn show_letter_does_not_disturb_the_rotation() {
        let mut grid = test_grid();
        grid.set_rotation(Rotation::R180, true);
        grid.show_letter('A', color::WHITE, color::OFF).unwrap();
        assert_eq!(grid.rotation(), Rotation::R180);
        // The frame itself starts with a column of background.
        assert!(grid.get_pixels()[..8].iter().all(|&p| p == color::OFF));
    }

    #[test]
    fn missing_image_files_are_reported() {
        let mut grid = test_grid();
        let result = grid.load_image(
            std::path::Path::new("/no/such/image.png"), true);
        assert!(matches!(result, Err(Error::ResourceNotFound(_))));
    }
}

#[cfg(not(feature = "image"))]
mod no_image {
    use super::*;

    #[test]
    fn text_and_images_are_unavailable_without_the_image_feature() {
        let mut grid = test_grid();
        assert!(matches!(
            grid.show_letter('A', color::WHITE, color::OFF),
            Err(Error::CapabilityUnavailable(_))));
        assert!(matches!(
            grid.show_message("hi", Duration::ZERO,
                              color::WHITE, color::OFF),
            Err(Error::CapabilityUnavailable(_))));
        assert!(matches!(
            grid.load_image(std::path::Path::new("any.png"), true),
            Err(Error::CapabilityUnavailable(_))));
    }
}
