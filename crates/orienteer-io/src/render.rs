//! Path overlay and PNG output.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::debug;
use orienteer_core::{Color, Point};

use crate::error::InputError;

/// Recolour every in-bounds cell of `cells` to `color`, keeping each pixel's
/// alpha. Returns the number of pixels painted.
pub fn overlay_path(img: &mut RgbaImage, cells: &[Point], color: Color) -> usize {
    let [r, g, b] = color.to_array();
    let (w, h) = img.dimensions();
    let mut painted = 0;
    for p in cells {
        if p.x < 0 || p.y < 0 || p.x as u32 >= w || p.y as u32 >= h {
            continue;
        }
        let px = img.get_pixel_mut(p.x as u32, p.y as u32);
        px.0 = [r, g, b, px.0[3]];
        painted += 1;
    }
    painted
}

/// Write `img` as a PNG file.
pub fn save_png(img: &RgbaImage, path: impl AsRef<Path>) -> Result<(), InputError> {
    let path = path.as_ref();
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| InputError::Image {
            path: Some(path.to_path_buf()),
            source,
        })?;
    debug!("wrote {}", path.display());
    Ok(())
}
