//! Draw Target
//!
//! The line-drawing collaborator that shapes render into. The engine never
//! rasterizes itself; it hands screen-space segments to whatever implements
//! [`DrawTarget`] (a display driver, a canvas, or the [`LineRecorder`] used
//! by tests and the headless demo).

use crate::math::Vector2D;

/// Anything that can draw a straight line in screen space.
pub trait DrawTarget {
    /// Draw a line from `(x0, y0)` to `(x1, y1)` with the given stroke thickness.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32);
}

/// Draw a closed polygon: each point connects to the next, and the last
/// point connects back to the first.
///
/// Fewer than two points draws nothing.
pub fn draw_closed_polygon(target: &mut dyn DrawTarget, points: &[Vector2D], thickness: f32) {
    if points.len() < 2 {
        return;
    }
    for (i, from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        target.draw_line(from.x, from.y, to.x, to.y, thickness);
    }
}

/// A single recorded line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Vector2D,
    pub to: Vector2D,
    pub thickness: f32,
}

/// Draw target that records every segment it receives.
#[derive(Debug, Clone, Default)]
pub struct LineRecorder {
    lines: Vec<Line>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All segments drawn since the last [`LineRecorder::clear`].
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Forget all recorded segments (start of a new paint frame).
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DrawTarget for LineRecorder {
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32) {
        self.lines.push(Line {
            from: Vector2D::new(x0, y0),
            to: Vector2D::new(x1, y1),
            thickness,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_polygon_wraps_to_first_point() {
        let mut rec = LineRecorder::new();
        let pts = [
            Vector2D::new(0.0, 0.0),
            Vector2D::new(1.0, 0.0),
            Vector2D::new(1.0, 1.0),
        ];
        draw_closed_polygon(&mut rec, &pts, 2.0);

        assert_eq!(rec.len(), 3);
        assert_eq!(rec.lines()[2].from, pts[2]);
        assert_eq!(rec.lines()[2].to, pts[0]);
        assert!(rec.lines().iter().all(|l| l.thickness == 2.0));
    }

    #[test]
    fn test_degenerate_polygons() {
        let mut rec = LineRecorder::new();
        draw_closed_polygon(&mut rec, &[], 1.0);
        draw_closed_polygon(&mut rec, &[Vector2D::ONE], 1.0);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut rec = LineRecorder::new();
        rec.draw_line(0.0, 0.0, 1.0, 1.0, 1.0);
        assert_eq!(rec.len(), 1);
        rec.clear();
        assert!(rec.is_empty());
    }
}
