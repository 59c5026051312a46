use super::error::{Error, Result};
use super::io::GRID_WIDTH;

/// The viewing rotation of the grid.
///
/// Rotating does not change the logical pixel buffer, only where each
/// logical pixel ends up on the display surface.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn from_degrees(degrees: u32) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            _ => Err(Error::Validation(
                "Rotation must be 0, 90, 180 or 270 degrees".to_string())),
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// A quarter turn to the left, wrapping 0 to 270.
    pub fn rotated_left(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R270,
            Rotation::R90 => Rotation::R0,
            Rotation::R180 => Rotation::R90,
            Rotation::R270 => Rotation::R180,
        }
    }

    /// A quarter turn to the right, wrapping 270 to 0.
    pub fn rotated_right(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// Map a logical pixel index to the physical cell index used by the
    /// display surface.
    ///
    /// Physical cells are ordered column-major, so even the seemingly
    /// trivial 0 rotation transposes; the other three cases add the
    /// user-requested quarter turns on top of that baseline correction.
    pub fn physical_index(self, logical: usize) -> usize {
        let row = logical / GRID_WIDTH;
        let col = logical % GRID_WIDTH;
        match self {
            Rotation::R0 => col * GRID_WIDTH + row,
            Rotation::R90 => (7 - row) * GRID_WIDTH + col,
            Rotation::R180 => (7 - col) * GRID_WIDTH + (7 - row),
            Rotation::R270 => row * GRID_WIDTH + (7 - col),
        }
    }
}
