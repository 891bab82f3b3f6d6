//! Scribble drawing core - stroke capture and rasterization
//!
//! This crate provides the non-UI logic behind the drawing surface:
//! - [`types::Stroke`] - A completed freehand line (points, color, width)
//! - [`recorder`] - Pointer events to completed strokes
//! - [`surface`] - CPU 8-bit RGBA pixel buffer
//! - [`raster`] - Stroke list to antialiased pixel buffer
//! - [`export`] - PNG encoding for upload and local save
//! - [`validation`] - Channel conversion and raster target checks

pub mod constants;
pub mod export;
pub mod raster;
pub mod recorder;
pub mod surface;
pub mod types;
pub mod validation;

pub use constants::*;
pub use export::*;
pub use raster::*;
pub use recorder::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
