use std::thread;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::LEDGrid;
use super::color::{self, Color};
use super::error::Result;
use super::io::{GRID_WIDTH, IO, NUM_PIXELS};
use super::rotation::Rotation;

/// A walk along the edge of the RGB color hexagon.
///
/// Each tick moves exactly one channel by one, so that the state always
/// has one channel at 255 and one at 0 (both at the six corners), and
/// the walk returns to its starting color after 6 * 255 ticks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColorCycler {
    red: u8,
    green: u8,
    blue: u8,
}

impl ColorCycler {
    pub const fn new() -> Self {
        Self { red: 255, green: 0, blue: 0 }
    }

    pub const fn from_color(color: Color) -> Self {
        Self { red: color.r, green: color.g, blue: color.b }
    }

    pub const fn color(&self) -> Color {
        Color::new(self.red, self.green, self.blue)
    }

    /// Advance one tick.
    ///
    /// The conditions are checked in this fixed order; the first that
    /// holds determines the tick's single channel step.
    pub fn advance(&mut self) {
        if self.red == 255 && self.green < 255 && self.blue == 0 {
            self.green += 1;
        } else if self.green == 255 && self.red > 0 && self.blue == 0 {
            self.red -= 1;
        } else if self.green == 255 && self.blue < 255 && self.red == 0 {
            self.blue += 1;
        } else if self.blue == 255 && self.green > 0 && self.red == 0 {
            self.green -= 1;
        } else if self.blue == 255 && self.red < 255 && self.green == 0 {
            self.red += 1;
        } else if self.red == 255 && self.blue > 0 && self.green == 0 {
            self.blue -= 1;
        }
    }
}

/// A demo routine that can be stepped one frame at a time.
pub trait Demo<W: IO> {
    fn tick(&mut self, grid: &mut LEDGrid<W>) -> Result<()>;

    /// Pause between frames.
    fn frame_delay(&self) -> Duration {
        Duration::from_millis(2)
    }
}

/// Run a demo until the given time has elapsed or escape is pressed.
pub fn run_for<W: IO>(demo: &mut dyn Demo<W>, grid: &mut LEDGrid<W>,
                      duration: Duration) -> Result<()> {
    let end = Instant::now() + duration;
    while Instant::now() < end {
        demo.tick(grid)?;
        thread::sleep(demo.frame_delay());
        if grid.is_esc_pressed() {
            break;
        }
    }
    Ok(())
}

/// Run a demo until escape is pressed.
pub fn run_until_escape<W: IO>(demo: &mut dyn Demo<W>,
                               grid: &mut LEDGrid<W>) -> Result<()> {
    loop {
        demo.tick(grid)?;
        thread::sleep(demo.frame_delay());
        if grid.is_esc_pressed() {
            return Ok(());
        }
    }
}

pub const AVAILABLE_DEMOS: [&str; 4] = [
    "cycle",
    "rainbow",
    "question-mark",
    "sparkle",
];

pub fn demo_by_name<W: IO>(name: &str) -> Box<dyn Demo<W>> {
    match name {
        "cycle" => Box::new(ColorCycle::new()),
        "rainbow" => Box::new(Rainbow::new()),
        "question-mark" => Box::new(QuestionMark::new()),
        "sparkle" => Box::new(Sparkle::new()),
        _ => panic!("Unexpected demo: {}", name),
    }
}

/// Wash the whole grid through the color cycle.
pub struct ColorCycle {
    cycler: ColorCycler,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self { cycler: ColorCycler::new() }
    }
}

impl<W: IO> Demo<W> for ColorCycle {
    fn tick(&mut self, grid: &mut LEDGrid<W>) -> Result<()> {
        grid.clear(self.cycler.color());
        self.cycler.advance();
        Ok(())
    }
}

/// A scrolling rainbow: every pixel walks the color hexagon from its
/// own starting point in a diagonal gradient.
pub struct Rainbow {
    pixels: [ColorCycler; NUM_PIXELS],
}

const RAINBOW_SEED: [[u8; 3]; NUM_PIXELS] = [
    [255, 0, 0], [255, 0, 0], [255, 87, 0], [255, 196, 0],
    [205, 255, 0], [95, 255, 0], [0, 255, 13], [0, 255, 122],
    [255, 0, 0], [255, 96, 0], [255, 205, 0], [196, 255, 0],
    [87, 255, 0], [0, 255, 22], [0, 255, 131], [0, 255, 240],
    [255, 105, 0], [255, 214, 0], [187, 255, 0], [78, 255, 0],
    [0, 255, 30], [0, 255, 140], [0, 255, 248], [0, 152, 255],
    [255, 223, 0], [178, 255, 0], [70, 255, 0], [0, 255, 40],
    [0, 255, 148], [0, 253, 255], [0, 144, 255], [0, 34, 255],
    [170, 255, 0], [61, 255, 0], [0, 255, 48], [0, 255, 157],
    [0, 243, 255], [0, 134, 255], [0, 26, 255], [83, 0, 255],
    [52, 255, 0], [0, 255, 57], [0, 255, 166], [0, 235, 255],
    [0, 126, 255], [0, 17, 255], [92, 0, 255], [201, 0, 255],
    [0, 255, 66], [0, 255, 174], [0, 226, 255], [0, 117, 255],
    [0, 8, 255], [100, 0, 255], [210, 0, 255], [255, 0, 192],
    [0, 255, 183], [0, 217, 255], [0, 109, 255], [0, 0, 255],
    [110, 0, 255], [218, 0, 255], [255, 0, 183], [255, 0, 74],
];

impl Rainbow {
    pub fn new() -> Self {
        let mut pixels = [ColorCycler::new(); NUM_PIXELS];
        for (pixel, seed) in pixels.iter_mut().zip(RAINBOW_SEED) {
            *pixel = ColorCycler::from_color(seed.into());
        }
        Self { pixels }
    }
}

impl<W: IO> Demo<W> for Rainbow {
    fn tick(&mut self, grid: &mut LEDGrid<W>) -> Result<()> {
        let mut frame = [color::OFF; NUM_PIXELS];
        for (cell, cycler) in frame.iter_mut().zip(self.pixels.iter_mut()) {
            cycler.advance();
            *cell = cycler.color();
        }
        grid.set_pixels(&frame)
    }
}

/// A static question mark with colored corner pixels, stepped through
/// all four rotations.
pub struct QuestionMark {
    rotation: Rotation,
    drawn: bool,
}

const W: Color = color::WHITE;
const R: Color = color::RED;

const QUESTION_MARK: [Color; NUM_PIXELS] = [
    W, W, W, R, R, W, W, W,
    W, W, R, W, W, R, W, W,
    W, W, W, W, W, R, W, W,
    W, W, W, W, R, W, W, W,
    W, W, W, R, W, W, W, W,
    W, W, W, R, W, W, W, W,
    W, W, W, W, W, W, W, W,
    W, W, W, R, W, W, W, W,
];

impl QuestionMark {
    pub fn new() -> Self {
        Self {
            rotation: Rotation::R0,
            drawn: false,
        }
    }
}

impl<W: IO> Demo<W> for QuestionMark {
    fn tick(&mut self, grid: &mut LEDGrid<W>) -> Result<()> {
        if !self.drawn {
            grid.set_pixels(&QUESTION_MARK)?;
            grid.set_pixel(0, 0, color::RED)?;
            grid.set_pixel(0, 7, color::GREEN)?;
            grid.set_pixel(7, 0, color::BLUE)?;
            grid.set_pixel(7, 7, color::PINK)?;
            self.drawn = true;
        }
        grid.set_rotation(self.rotation, true);
        self.rotation = self.rotation.rotated_right();
        Ok(())
    }

    fn frame_delay(&self) -> Duration {
        Duration::from_millis(300)
    }
}

/// Light a random pixel in a random color each tick.
pub struct Sparkle {
    rng: ChaCha8Rng,
}

impl Sparkle {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl<W: IO> Demo<W> for Sparkle {
    fn tick(&mut self, grid: &mut LEDGrid<W>) -> Result<()> {
        let x = self.rng.random_range(0..GRID_WIDTH);
        let y = self.rng.random_range(0..GRID_WIDTH);
        let color = Color::new(self.rng.random(),
                               self.rng.random(),
                               self.rng.random());
        grid.set_pixel(x, y, color)
    }

    fn frame_delay(&self) -> Duration {
        Duration::from_millis(20)
    }
}

const B: Color = color::BLUE;
const O: Color = color::OFF;

/// The sample image shown at the start of the tour.
pub const EXAMPLE: [Color; NUM_PIXELS] = [
    B, B, B, B, R, O, O, O,
    B, O, R, R, R, O, O, O,
    B, O, B, B, R, O, O, O,
    B, O, B, B, O, O, O, O,
    B, R, B, B, R, O, O, O,
    R, R, R, R, B, O, O, O,
    R, R, B, B, B, O, O, O,
    O, O, O, B, O, O, O, O,
];
