//! Terrain raster decoding.

use std::path::Path;

use image::{ImageReader, RgbaImage};
use log::debug;
use orienteer_core::{Color, Grid};

use crate::error::InputError;

/// Load a terrain image from disk, sniffing the format from its contents.
pub fn load_terrain(path: impl AsRef<Path>) -> Result<RgbaImage, InputError> {
    let path = path.as_ref();
    let img = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| InputError::io(path, e))?
        .decode()
        .map_err(|source| InputError::Image {
            path: Some(path.to_path_buf()),
            source,
        })?
        .to_rgba8();
    debug!(
        "terrain: {} is {}x{}",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Decode a terrain image held in memory.
pub fn decode_terrain(bytes: &[u8]) -> Result<RgbaImage, InputError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|source| InputError::Image { path: None, source })
}

/// Classification key of every pixel: its RGB triplet packed into a
/// [`Color`]. Alpha is ignored.
pub fn terrain_keys(img: &RgbaImage) -> Result<Grid<Color>, InputError> {
    let keys = Grid::from_fn(img.width() as usize, img.height() as usize, |p| {
        let [r, g, b, _] = img.get_pixel(p.x as u32, p.y as u32).0;
        Color::from_rgb(r, g, b)
    })?;
    Ok(keys)
}
