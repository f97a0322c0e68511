//! PNG load/save between files and [`PixelGrid`].

use std::path::Path;

use bitveil::PixelGrid;
use image::{ColorType, DynamicImage, ExtendedColorType, ImageFormat, ImageReader};

use crate::error::CliError;

/// Decode an image file into an RGBA8 grid.
///
/// The format is detected from the file contents. 16-bit samples keep their
/// high byte.
pub fn load_grid(path: &Path) -> Result<PixelGrid, CliError> {
    let read_err = |source: Box<dyn std::error::Error + Send + Sync>| CliError::ImageRead {
        path: path.to_path_buf(),
        source,
    };

    let img = decode(path).map_err(|e| read_err(Box::new(e)))?;
    grid_from_image(img).map_err(|e| read_err(Box::new(e)))
}

fn decode(path: &Path) -> image::ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

fn grid_from_image(img: DynamicImage) -> Result<PixelGrid, bitveil::GridError> {
    let (width, height) = (img.width(), img.height());
    let buf = match img.color() {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => img
            .to_rgba16()
            .into_raw()
            .into_iter()
            .map(|v| (v >> 8) as u8)
            .collect(),
        _ => img.into_rgba8().into_raw(),
    };
    PixelGrid::from_buf(width, height, buf)
}

/// Write a grid as an RGBA8 PNG, whatever the extension of `path`.
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<(), CliError> {
    image::save_buffer_with_format(
        path,
        grid.as_raw(),
        grid.width(),
        grid.height(),
        ExtendedColorType::Rgba8,
        ImageFormat::Png,
    )
    .map_err(|e| CliError::ImageWrite {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}
