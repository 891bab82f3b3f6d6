//! Stroke recorder - pointer events to completed strokes
//!
//! The recorder owns all mutable drawing-session state: the in-progress
//! point buffer, the completed stroke list, and the current brush color
//! and width. The hosting screen feeds it one pointer event at a time
//! from the input-dispatch callback and reads the completed list back on
//! demand (redraw, export).

use glam::Vec2;
use tracing::debug;

use scribble_config::CanvasConfig;

use crate::constants::MIN_BRUSH_WIDTH;
use crate::types::{PointerAction, PointerEvent, Stroke};

/// Recorder for freehand strokes.
///
/// At most one stroke is in progress at a time. On release the active
/// point buffer is promoted into an immutable [`Stroke`] tagged with the
/// color and width current at that moment; promotion copies the points,
/// so the active buffer and the stored stroke never share an allocation.
///
/// Malformed event sequences (release with no prior press, repeated
/// release) are tolerated rather than rejected: every action operates on
/// the active buffer regardless of what came before, so a bare release
/// promotes a zero-length stroke and the rasterizer draws nothing for it.
///
/// Runs inline with input handling: no I/O, no blocking.
#[derive(Debug)]
pub struct StrokeRecorder {
    /// In-progress point buffer for the gesture under the pointer
    active: Vec<Vec2>,
    /// Completed strokes in draw order (insertion order = z-order)
    strokes: Vec<Stroke>,
    /// Color applied to the next completed stroke (normalized RGBA)
    color: [f32; 4],
    /// Brush width applied to the next completed stroke
    brush_width: f32,
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl StrokeRecorder {
    /// Create a recorder with default brush settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder with brush defaults from the given config
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            active: Vec::new(),
            strokes: Vec::new(),
            color: config.brush_color,
            brush_width: config.brush_width.max(MIN_BRUSH_WIDTH),
        }
    }

    /// Feed one pointer event to the recorder.
    ///
    /// Press and move append the position to the active stroke. Release
    /// promotes the active points into a completed stroke and resets the
    /// active buffer. Returns whether the event was consumed; `Other`
    /// actions mutate nothing and report false.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match event.action {
            PointerAction::Press | PointerAction::Move => {
                self.active.push(event.position);
                true
            }
            PointerAction::Release => {
                let stroke = Stroke::new(self.active.clone(), self.color, self.brush_width);
                debug!(
                    "StrokeRecorder: completed stroke {} ({} points, width {:.1})",
                    self.strokes.len(),
                    stroke.len(),
                    stroke.width()
                );
                self.strokes.push(stroke);
                self.active.clear();
                true
            }
            PointerAction::Other => false,
        }
    }

    /// Set the brush color for subsequently completed strokes
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    /// Get the current brush color
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Set the brush width for subsequently completed strokes
    pub fn set_brush_width(&mut self, width: f32) {
        self.brush_width = width.max(MIN_BRUSH_WIDTH);
    }

    /// Get the current brush width
    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    /// Get the completed strokes in draw order
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Get the points of the in-progress stroke (for live preview)
    pub fn active_points(&self) -> &[Vec2] {
        &self.active
    }

    /// Get the number of completed strokes
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Check if a gesture is currently in progress
    pub fn is_drawing(&self) -> bool {
        !self.active.is_empty()
    }

    /// Remove the most recently completed stroke, if any
    pub fn undo(&mut self) -> Option<Stroke> {
        let stroke = self.strokes.pop();
        if let Some(ref stroke) = stroke {
            debug!(
                "StrokeRecorder: undo removed stroke with {} points",
                stroke.len()
            );
        }
        stroke
    }

    /// Clear the canvas: drop all completed strokes and the active buffer
    pub fn clear(&mut self) {
        debug!(
            "StrokeRecorder: clearing {} strokes ({} active points)",
            self.strokes.len(),
            self.active.len()
        );
        self.strokes.clear();
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerAction::Press, x, y)
    }

    fn moved(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerAction::Move, x, y)
    }

    fn release(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerAction::Release, x, y)
    }

    #[test]
    fn test_press_move_release_builds_one_stroke() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_color([1.0, 0.0, 0.0, 1.0]);
        recorder.set_brush_width(5.0);

        assert!(recorder.handle_event(press(10.0, 10.0)));
        assert!(recorder.handle_event(moved(20.0, 20.0)));
        assert!(recorder.handle_event(moved(30.0, 10.0)));
        assert!(recorder.is_drawing());
        assert!(recorder.handle_event(release(30.0, 10.0)));

        assert_eq!(recorder.stroke_count(), 1);
        assert!(!recorder.is_drawing());
        assert!(recorder.active_points().is_empty());

        let stroke = &recorder.strokes()[0];
        assert_eq!(
            stroke.points(),
            &[
                Vec2::new(10.0, 10.0),
                Vec2::new(20.0, 20.0),
                Vec2::new(30.0, 10.0)
            ]
        );
        assert_eq!(stroke.color(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(stroke.width(), 5.0);
    }

    #[test]
    fn test_point_count_matches_events_since_last_promotion() {
        let mut recorder = StrokeRecorder::new();

        recorder.handle_event(press(0.0, 0.0));
        recorder.handle_event(moved(1.0, 1.0));
        recorder.handle_event(release(1.0, 1.0));

        recorder.handle_event(press(5.0, 5.0));
        recorder.handle_event(moved(6.0, 6.0));
        recorder.handle_event(moved(7.0, 7.0));
        recorder.handle_event(moved(8.0, 8.0));
        recorder.handle_event(release(8.0, 8.0));

        assert_eq!(recorder.stroke_count(), 2);
        assert_eq!(recorder.strokes()[0].len(), 2);
        assert_eq!(recorder.strokes()[1].len(), 4);
    }

    #[test]
    fn test_other_action_is_not_consumed() {
        let mut recorder = StrokeRecorder::new();

        assert!(!recorder.handle_event(PointerEvent::new(PointerAction::Other, 5.0, 5.0)));
        assert_eq!(recorder.stroke_count(), 0);
        assert!(recorder.active_points().is_empty());
    }

    #[test]
    fn test_release_without_press_promotes_empty_stroke() {
        let mut recorder = StrokeRecorder::new();

        assert!(recorder.handle_event(release(0.0, 0.0)));

        assert_eq!(recorder.stroke_count(), 1);
        assert!(recorder.strokes()[0].is_empty());
    }

    #[test]
    fn test_repeated_release_tolerated() {
        let mut recorder = StrokeRecorder::new();

        recorder.handle_event(press(1.0, 1.0));
        recorder.handle_event(release(1.0, 1.0));
        recorder.handle_event(release(1.0, 1.0));

        assert_eq!(recorder.stroke_count(), 2);
        assert_eq!(recorder.strokes()[0].len(), 1);
        assert!(recorder.strokes()[1].is_empty());
    }

    #[test]
    fn test_brush_state_captured_at_release_time() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_color([0.0, 0.0, 1.0, 1.0]);

        recorder.handle_event(press(0.0, 0.0));
        // Color and width change mid-gesture; release tags the new values
        recorder.set_color([1.0, 0.0, 0.0, 1.0]);
        recorder.set_brush_width(9.0);
        recorder.handle_event(release(0.0, 0.0));

        let stroke = &recorder.strokes()[0];
        assert_eq!(stroke.color(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(stroke.width(), 9.0);
    }

    #[test]
    fn test_promotion_copies_points() {
        let mut recorder = StrokeRecorder::new();

        recorder.handle_event(press(1.0, 2.0));
        recorder.handle_event(release(1.0, 2.0));

        // New gesture appends to a reset active buffer without touching
        // the completed stroke
        recorder.handle_event(press(9.0, 9.0));
        assert_eq!(recorder.strokes()[0].points(), &[Vec2::new(1.0, 2.0)]);
        assert_eq!(recorder.active_points(), &[Vec2::new(9.0, 9.0)]);
    }

    #[test]
    fn test_undo_removes_latest_stroke() {
        let mut recorder = StrokeRecorder::new();

        recorder.handle_event(press(0.0, 0.0));
        recorder.handle_event(release(0.0, 0.0));
        recorder.handle_event(press(5.0, 5.0));
        recorder.handle_event(release(5.0, 5.0));

        let undone = recorder.undo().unwrap();
        assert_eq!(undone.points(), &[Vec2::new(5.0, 5.0)]);
        assert_eq!(recorder.stroke_count(), 1);

        recorder.undo().unwrap();
        assert!(recorder.undo().is_none());
    }

    #[test]
    fn test_clear_resets_session() {
        let mut recorder = StrokeRecorder::new();

        recorder.handle_event(press(0.0, 0.0));
        recorder.handle_event(release(0.0, 0.0));
        recorder.handle_event(press(5.0, 5.0));

        recorder.clear();
        assert_eq!(recorder.stroke_count(), 0);
        assert!(!recorder.is_drawing());
    }

    #[test]
    fn test_from_config_brush_defaults() {
        let config = CanvasConfig {
            brush_width: 12.0,
            brush_color: [0.0, 1.0, 0.0, 1.0],
            ..Default::default()
        };
        let recorder = StrokeRecorder::from_config(&config);

        assert_eq!(recorder.brush_width(), 12.0);
        assert_eq!(recorder.color(), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_brush_width_clamped_positive() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_brush_width(0.0);
        assert!(recorder.brush_width() >= MIN_BRUSH_WIDTH);
    }
}
