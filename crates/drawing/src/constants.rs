/// Background color for rasterized output (opaque white).
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Antialiasing feather width in pixels.
pub const AA_FEATHER: f32 = 1.0;

/// Minimum brush width accepted by the recorder.
pub const MIN_BRUSH_WIDTH: f32 = 0.1;
