use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer action kinds delivered by the host input system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PointerAction {
    Press = 0,
    Move = 1,
    Release = 2,
    /// Any action the drawing surface does not handle (hover, cancel, ...)
    Other = 3,
}

/// A single pointer sample: action kind plus canvas-local position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Vec2,
}

impl PointerEvent {
    /// Create a pointer event from an action and raw coordinates
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            position: Vec2::new(x, y),
        }
    }
}

/// One completed freehand line: a fixed point sequence plus the color and
/// brush width in effect when it was drawn.
///
/// Strokes are immutable after creation. The recorder promotes its active
/// point buffer into a `Stroke` on pointer release and never touches the
/// stroke again; only read accessors are exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Ordered points in canvas-local space
    points: Vec<Vec2>,
    /// Color in normalized RGBA, converted to 8-bit at rasterization
    color: [f32; 4],
    /// Brush width in canvas units
    width: f32,
}

impl Stroke {
    /// Create a new stroke from a finished point sequence
    pub fn new(points: Vec<Vec2>, color: [f32; 4], width: f32) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Get the stroke color (normalized RGBA)
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Get the brush width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Get the number of points in this stroke
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether this stroke has no points (a bare tap that never
    /// received a sample)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs in draw order.
    ///
    /// A stroke with fewer than two points yields no segments.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
