//! PNG export for finished rasters

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use thiserror::Error;
use tracing::debug;

use crate::surface::CpuSurface;

/// Error type for raster export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Surface byte length does not match its dimensions")]
    BufferMismatch,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Encode a surface as an in-memory PNG.
///
/// The returned bytes are handed to external collaborators for network
/// upload or local persistence; this module performs no I/O of its own.
pub fn encode_png(surface: &CpuSurface) -> Result<Vec<u8>, ExportError> {
    let image = RgbaImage::from_raw(surface.width, surface.height, surface.as_bytes().to_vec())
        .ok_or(ExportError::BufferMismatch)?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    debug!(
        "encode_png: {}x{} surface -> {} bytes",
        surface.width,
        surface.height,
        bytes.len()
    );

    Ok(bytes)
}
