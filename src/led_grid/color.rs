use std::str::FromStr;

use super::error::Error;

/// An RGB color with 8 bits per channel.
///
/// `OFF`, i.e. (0, 0, 0), normally means "unlit"; see the
/// `black_is_color` option on the grid builder.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_off(self) -> bool {
        self == OFF
    }
}

impl From<[u8; 3]> for Color {
    fn from(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Parse a color given as `r,g,b`, e.g. on the commandline.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut channels = [0u8; 3];
        let mut parts = s.split(',');
        for channel in channels.iter_mut() {
            let part = parts.next().ok_or_else(|| Error::Validation(
                "Colors must be given as r,g,b".to_string()))?;
            *channel = part.trim().parse().map_err(|_| Error::Validation(
                format!("Color channel {} must be an integer \
                         between 0 and 255", part.trim())))?;
        }
        if parts.next().is_some() {
            return Err(Error::Validation(
                "Colors must be given as r,g,b".to_string()));
        }
        Ok(channels.into())
    }
}

pub const RED: Color = Color::new(255, 0, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const PURPLE: Color = Color::new(102, 0, 204);
pub const PINK: Color = Color::new(255, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const ORANGE: Color = Color::new(255, 128, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const BLACK: Color = Color::new(0, 0, 0);
pub const OFF: Color = BLACK;
