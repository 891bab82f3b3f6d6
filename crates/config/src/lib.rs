//! Shared configuration for Scribble
//!
//! This crate provides the single source of truth for canvas dimensions
//! and brush defaults shared between the drawing core and the screens
//! that host it.

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1080;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1080;

/// Default brush width in canvas units
pub const DEFAULT_BRUSH_WIDTH: f32 = 5.0;

/// Default brush color (opaque black, normalized RGBA)
pub const DEFAULT_BRUSH_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Canvas configuration for a drawing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Brush width used until the user picks another
    pub brush_width: f32,
    /// Brush color used until the user picks another (normalized RGBA)
    pub brush_color: [f32; 4],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            brush_width: DEFAULT_BRUSH_WIDTH,
            brush_color: DEFAULT_BRUSH_COLOR,
        }
    }
}

impl CanvasConfig {
    /// Create a new canvas config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Get width as f32 for calculations
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    /// Get height as f32 for calculations
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}
