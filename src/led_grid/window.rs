use minifb::{Key, Window, WindowOptions};

use super::color::Color;
use super::io::{GRID_WIDTH, IO};

/// The on-screen rendition of the LED matrix.
///
/// Each cell is drawn as a square+circle pair on a circuit-board green
/// surface: filled with the cell color when lit, a white outline when
/// unlit.
pub struct GridWindow {
    display_buffer: Vec<u32>,
    window: Window,
}

const LED_RADIUS: usize = 20;
const LED_PITCH: usize = 2 * LED_RADIUS + 5;
const MARGINS: (usize, usize) = (10, 10);
const SURFACE_SIZE: usize = 375;
const BOARD_GREEN: u32 = 0x003319;
const WHITE: u32 = 0xFFFFFF;
const REFRESH_RATE: usize = 60;

impl GridWindow {
    pub fn new(title: &str) -> Self {
        let mut window = Window::new(
            title,
            SURFACE_SIZE,
            SURFACE_SIZE,
            WindowOptions::default(),
        ).unwrap();
        use std::time::Duration;
        let wait_time = Duration::from_micros((1000000. / REFRESH_RATE as f64)
                                              as u64);
        window.limit_update_rate(Some(wait_time));
        let mut grid_window = Self {
            display_buffer: vec![BOARD_GREEN; SURFACE_SIZE * SURFACE_SIZE],
            window,
        };
        for index in 0..GRID_WIDTH * GRID_WIDTH {
            grid_window.draw_cell(index, super::color::OFF, false);
        }
        grid_window.present();
        grid_window
    }

    /// The surface position of a cell's center.
    ///
    /// Physical cells are laid out column-major: `index / 8` is the
    /// on-screen column, `index % 8` the on-screen row.
    fn cell_center(index: usize) -> (usize, usize) {
        let x = (index / GRID_WIDTH) * LED_PITCH + LED_RADIUS + MARGINS.0;
        let y = (index % GRID_WIDTH) * LED_PITCH + LED_RADIUS + MARGINS.1;
        (x, y)
    }

    fn fill_square(&mut self, (cx, cy): (usize, usize), argb: u32) {
        for y in cy - LED_RADIUS..cy + LED_RADIUS {
            let line = y * SURFACE_SIZE;
            self.display_buffer[line + cx - LED_RADIUS
                                ..line + cx + LED_RADIUS].fill(argb);
        }
    }

    fn stroke_square(&mut self, (cx, cy): (usize, usize), argb: u32) {
        let top = (cy - LED_RADIUS) * SURFACE_SIZE;
        let bottom = (cy + LED_RADIUS - 1) * SURFACE_SIZE;
        self.display_buffer[top + cx - LED_RADIUS
                            ..top + cx + LED_RADIUS].fill(argb);
        self.display_buffer[bottom + cx - LED_RADIUS
                            ..bottom + cx + LED_RADIUS].fill(argb);
        for y in cy - LED_RADIUS..cy + LED_RADIUS {
            let line = y * SURFACE_SIZE;
            self.display_buffer[line + cx - LED_RADIUS] = argb;
            self.display_buffer[line + cx + LED_RADIUS - 1] = argb;
        }
    }

    fn stroke_circle(&mut self, (cx, cy): (usize, usize), argb: u32) {
        // Midpoint circle algorithm, one pixel per octant step.
        let (cx, cy) = (cx as i32, cy as i32);
        let mut x = LED_RADIUS as i32;
        let mut y = 0;
        let mut err = 1 - x;
        while x >= y {
            for (dx, dy) in [(x, y), (y, x), (-x, y), (-y, x),
                             (x, -y), (y, -x), (-x, -y), (-y, -x)] {
                self.set_surface_pixel(cx + dx, cy + dy, argb);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    fn set_surface_pixel(&mut self, x: i32, y: i32, argb: u32) {
        if (0..SURFACE_SIZE as i32).contains(&x)
            && (0..SURFACE_SIZE as i32).contains(&y) {
            self.display_buffer[y as usize * SURFACE_SIZE + x as usize]
                = argb;
        }
    }
}

fn to_argb(color: Color) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

impl IO for GridWindow {
    fn draw_cell(&mut self, index: usize, color: Color, lit: bool) {
        let center = Self::cell_center(index);
        if lit {
            self.fill_square(center, to_argb(color));
        } else {
            self.fill_square(center, BOARD_GREEN);
            self.stroke_circle(center, WHITE);
            self.stroke_square(center, WHITE);
        }
    }

    fn present(&mut self) {
        self.window
            .update_with_buffer(&self.display_buffer,
                                SURFACE_SIZE,
                                SURFACE_SIZE)
            .unwrap();
    }

    fn is_esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}
