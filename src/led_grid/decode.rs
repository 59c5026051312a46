use std::path::Path;

use super::color::Color;
use super::error::Result;

/// Decode an image into its flat, row-major RGB pixel sequence.
#[cfg(feature = "image")]
pub fn decode_rgb(bytes: &[u8]) -> Result<Vec<Color>> {
    use super::error::Error;
    let image = image::load_from_memory(bytes)
        .map_err(|e| Error::Validation(
            format!("Could not decode image: {}", e)))?
        .to_rgb8();
    Ok(image.pixels().map(|p| Color::new(p.0[0], p.0[1], p.0[2])).collect())
}

#[cfg(not(feature = "image"))]
pub fn decode_rgb(_bytes: &[u8]) -> Result<Vec<Color>> {
    use super::error::Error;
    Err(Error::CapabilityUnavailable("image decoding"))
}

/// Decode an image file into its flat RGB pixel sequence.
pub fn load_rgb(path: &Path) -> Result<Vec<Color>> {
    use super::error::Error;
    #[cfg(not(feature = "image"))]
    {
        let _ = path;
        Err(Error::CapabilityUnavailable("image decoding"))
    }
    #[cfg(feature = "image")]
    {
        if !path.exists() {
            return Err(Error::ResourceNotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path)
            .map_err(|_| Error::ResourceNotFound(path.to_path_buf()))?;
        decode_rgb(&bytes)
    }
}
