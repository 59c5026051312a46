pub mod animation;
pub mod color;
pub mod commandline;
pub mod decode;
pub mod error;
pub mod font;
pub mod io;
pub mod rotation;
pub mod text;
pub mod window;

use std::path::Path;
use std::thread;
use std::time::Duration;

use self::color::{Color, OFF};
use self::error::{Error, Result};
use self::io::{GRID_WIDTH, IO, NUM_PIXELS};
use self::rotation::Rotation;
use self::text::TextRenderer;
use self::window::GridWindow;

/// An on-screen representation of an 8x8 RGB LED matrix, as found in
/// the Raspberry Pi Sense HAT and other products such as the Unicorn
/// HAT.
///
/// Logical coordinates have their origin in the top left corner:
/// (0,0) (7,0)
/// (0,7) (7,7)
///
/// Every mutating call validates its input, updates the logical pixel
/// buffer and synchronously redraws the affected cells through the
/// current rotation; there is no dirty-buffering or batching.
pub struct LEDGrid<W: IO> {
    pixels: [Color; NUM_PIXELS],
    rotation: Rotation,
    black_is_color: bool,
    text: Option<TextRenderer>,
    window: W,
}

impl LEDGrid<GridWindow> {
    /// Open a grid in its own little window.
    pub fn new(title: &str) -> Self {
        Self::builder().use_window(GridWindow::new(title)).build()
    }
}

impl<W: IO> LEDGrid<W> {
    pub fn builder() -> LEDGridBuilder<W> {
        LEDGridBuilder::new()
    }

    /// The current rotation of the grid.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Set the matrix rotation for viewing, to adjust for the board
    /// being mounted sideways or upside down.
    pub fn set_rotation(&mut self, rotation: Rotation, redraw: bool) {
        self.rotation = rotation;
        if redraw {
            self.redraw_all(rotation);
        }
    }

    /// Replace the whole matrix with a list of 64 colors.
    pub fn set_pixels(&mut self, pixels: &[Color]) -> Result<()> {
        if pixels.len() != NUM_PIXELS {
            return Err(Error::Validation(
                "Pixel lists must have 64 elements".to_string()));
        }
        self.pixels.copy_from_slice(pixels);
        self.redraw_all(self.rotation);
        Ok(())
    }

    /// The logical (unrotated) contents of the matrix.
    pub fn get_pixels(&self) -> [Color; NUM_PIXELS] {
        self.pixels
    }

    /// Update the single pixel at (x, y).
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color)
                     -> Result<()> {
        let index = Self::index_of(x, y)?;
        self.pixels[index] = color;
        self.redraw_cell(index, self.rotation);
        Ok(())
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Color> {
        Ok(self.pixels[Self::index_of(x, y)?])
    }

    fn index_of(x: usize, y: usize) -> Result<usize> {
        if x >= GRID_WIDTH {
            return Err(Error::Validation(
                "X position must be between 0 and 7".to_string()));
        }
        if y >= GRID_WIDTH {
            return Err(Error::Validation(
                "Y position must be between 0 and 7".to_string()));
        }
        Ok(y * GRID_WIDTH + x)
    }

    /// Fill the whole matrix with a single color, `OFF` to blank it.
    pub fn clear(&mut self, color: Color) {
        self.pixels = [color; NUM_PIXELS];
        self.redraw_all(self.rotation);
    }

    /// Flip the matrix horizontally, returning the flipped pixel list.
    pub fn flip_h(&mut self, redraw: bool) -> [Color; NUM_PIXELS] {
        let mut flipped = self.pixels;
        for row in flipped.chunks_exact_mut(GRID_WIDTH) {
            row.reverse();
        }
        if redraw {
            self.pixels = flipped;
            self.redraw_all(self.rotation);
        }
        flipped
    }

    /// Flip the matrix vertically, returning the flipped pixel list.
    pub fn flip_v(&mut self, redraw: bool) -> [Color; NUM_PIXELS] {
        let mut flipped = [OFF; NUM_PIXELS];
        for (flipped_row, row) in
                flipped.chunks_exact_mut(GRID_WIDTH)
                       .zip(self.pixels.chunks_exact(GRID_WIDTH).rev()) {
            flipped_row.copy_from_slice(row);
        }
        if redraw {
            self.pixels = flipped;
            self.redraw_all(self.rotation);
        }
        flipped
    }

    /// Load an 8x8 image file onto the matrix.
    ///
    /// Returns the decoded pixel list; with `redraw` false the matrix
    /// itself is left untouched.
    pub fn load_image(&mut self, path: &Path, redraw: bool)
                      -> Result<Vec<Color>> {
        let pixels = decode::load_rgb(path)?;
        if pixels.len() != NUM_PIXELS {
            return Err(Error::Validation(format!(
                "Images must contain exactly 64 pixels, {} has {}",
                path.display(), pixels.len())));
        }
        if redraw {
            self.set_pixels(&pixels)?;
        }
        Ok(pixels)
    }

    /// Display a single character on the matrix.
    pub fn show_letter(&mut self, character: char, text_color: Color,
                       back_color: Color) -> Result<()> {
        let frame = self.text_renderer()?
                        .letter_frame(character, text_color, back_color);
        // Text frames are in the font's native orientation, one quarter
        // turn to the right of the logical one.
        let rotation = self.rotation.rotated_left();
        self.pixels = frame;
        self.redraw_all(rotation);
        Ok(())
    }

    /// Scroll a message across the matrix, pausing `scroll_speed`
    /// between frames.
    ///
    /// Blocks until the whole message has passed.
    pub fn show_message(&mut self, text: &str, scroll_speed: Duration,
                        text_color: Color, back_color: Color) -> Result<()> {
        let frames = self.text_renderer()?
                         .message_frames(text, text_color, back_color);
        let rotation = self.rotation.rotated_left();
        for frame in frames {
            self.pixels = frame;
            self.redraw_all(rotation);
            thread::sleep(scroll_speed);
        }
        Ok(())
    }

    pub fn is_esc_pressed(&self) -> bool {
        self.window.is_esc_pressed()
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    fn text_renderer(&self) -> Result<&TextRenderer> {
        self.text.as_ref()
            .ok_or(Error::CapabilityUnavailable("image decoding"))
    }

    fn redraw_all(&mut self, rotation: Rotation) {
        let black_is_color = self.black_is_color;
        for (index, &pixel) in self.pixels.iter().enumerate() {
            let lit = black_is_color || !pixel.is_off();
            self.window.draw_cell(rotation.physical_index(index), pixel, lit);
        }
        self.window.present();
    }

    fn redraw_cell(&mut self, index: usize, rotation: Rotation) {
        let pixel = self.pixels[index];
        let lit = self.black_is_color || !pixel.is_off();
        self.window.draw_cell(rotation.physical_index(index), pixel, lit);
        self.window.present();
    }
}

pub struct LEDGridBuilder<W: IO> {
    window: Option<W>,
    black_is_color: bool,
}

impl<W: IO> LEDGridBuilder<W> {
    pub fn new() -> Self {
        Self {
            window: None,
            black_is_color: false,
        }
    }

    pub fn use_window(mut self, window: W) -> Self {
        self.window = Some(window);
        self
    }

    /// Treat an explicit (0, 0, 0) as solid black instead of unlit.
    pub fn black_is_color(mut self, black_is_color: bool) -> Self {
        self.black_is_color = black_is_color;
        self
    }

    pub fn build(self) -> LEDGrid<W> {
        let mut grid = LEDGrid {
            pixels: [OFF; NUM_PIXELS],
            rotation: Rotation::default(),
            black_is_color: self.black_is_color,
            text: TextRenderer::new().ok(),
            window: self.window.unwrap(),
        };
        let rotation = grid.rotation;
        grid.redraw_all(rotation);
        grid
    }
}
