//! Stroke rasterization - stroke list to antialiased pixel buffer

use glam::Vec2;
use thiserror::Error;
use tracing::debug;

use crate::constants::{AA_FEATHER, BACKGROUND_COLOR};
use crate::surface::CpuSurface;
use crate::types::Stroke;
use crate::validation::{ValidationError, to_rgba8, validate_dimensions};

/// Error type for rasterization.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Rasterize a stroke list onto a fresh surface of the given dimensions.
///
/// The surface is filled opaque white, then strokes are drawn in list
/// order (insertion order = z-order, later strokes on top). Each
/// consecutive point pair becomes one antialiased segment with round caps
/// and joins. Strokes with fewer than two points draw nothing.
///
/// This is a pure function of its inputs: the same stroke list and
/// dimensions always produce byte-identical output. It may run on a
/// worker thread, but the caller must not mutate the stroke list while
/// rasterization reads it - snapshot or serialize the two.
pub fn rasterize(strokes: &[Stroke], width: u32, height: u32) -> Result<CpuSurface, RasterError> {
    validate_dimensions(width, height)?;

    let mut surface = CpuSurface::new(width, height);
    surface.clear(BACKGROUND_COLOR);

    for (index, stroke) in strokes.iter().enumerate() {
        if stroke.width() <= 0.0 {
            debug!("rasterize: stroke {} has non-positive width, skipping", index);
            continue;
        }

        let color = to_rgba8(stroke.color());
        let mut segments = 0usize;
        for (start, end) in stroke.segments() {
            draw_segment(&mut surface, start, end, color, stroke.width());
            segments += 1;
        }

        debug!(
            "rasterize: stroke {} -> {} segments ({} points)",
            index,
            segments,
            stroke.len()
        );
    }

    Ok(surface)
}

/// Draw one antialiased segment onto the surface.
///
/// Coverage is computed per pixel from the distance to the closed segment
/// (a capsule), so stroke ends get round caps and consecutive segments
/// meet in round joins without special casing.
fn draw_segment(surface: &mut CpuSurface, start: Vec2, end: Vec2, color: [u8; 4], width: f32) {
    let radius = width / 2.0;
    let reach = radius + AA_FEATHER;

    // Calculate bounding box
    let x_min_f = (start.x.min(end.x) - reach).floor();
    let y_min_f = (start.y.min(end.y) - reach).floor();
    let x_max_f = (start.x.max(end.x) + reach).ceil();
    let y_max_f = (start.y.max(end.y) + reach).ceil();

    // Clamp to surface bounds
    let x_min = (x_min_f.max(0.0) as u32).min(surface.width);
    let y_min = (y_min_f.max(0.0) as u32).min(surface.height);
    let x_max = (x_max_f.max(0.0) as u32).min(surface.width);
    let y_max = (y_max_f.max(0.0) as u32).min(surface.height);

    // Check if completely outside
    if x_min >= x_max || y_min >= y_max {
        debug!("  -> segment outside surface bounds");
        return;
    }

    let ab = end - start;
    let length_sq = ab.length_squared();

    for py in y_min..y_max {
        for px in x_min..x_max {
            // Distance from pixel center to the closed segment
            let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let distance = if length_sq <= f32::EPSILON {
                // Degenerate segment: both endpoints coincide
                (p - start).length()
            } else {
                let t = ((p - start).dot(ab) / length_sq).clamp(0.0, 1.0);
                (p - (start + ab * t)).length()
            };

            let coverage = edge_coverage(distance, radius);
            if coverage > 0.0 {
                surface.blend_pixel(px, py, color, coverage);
            }
        }
    }
}

/// Coverage for a pixel at `distance` from the segment spine.
/// Full inside the stroke half-width, ramping to zero across the feather band.
#[inline]
fn edge_coverage(distance: f32, radius: f32) -> f32 {
    ((radius + AA_FEATHER - distance) / AA_FEATHER).clamp(0.0, 1.0)
}
