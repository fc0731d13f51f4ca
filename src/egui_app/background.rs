#![cfg(feature = "egui")]

use camino::Utf8Path;
use eframe::egui::ColorImage;

use crate::error::{PlotError, Result};

/// Decode the background image at `path` into RGBA pixels.
///
/// Missing files and undecodable contents are both reported as I/O errors.
pub fn load_background_image(path: &Utf8Path) -> Result<ColorImage> {
    let img = image::open(path.as_std_path())
        .map_err(|e| match e {
            image::ImageError::IoError(io) => PlotError::io(path, io),
            other => PlotError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, other),
            ),
        })?
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    tracing::debug!("Loaded background {} ({}x{})", path, size[0], size[1]);
    Ok(ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}
