//! Shape - polygon geometry with a rigid transform
//!
//! A shape owns its local-space vertices, a rotation transform, a world
//! position offset and a cache of screen-space render points. The cache is
//! refreshed by [`Shape::update`] and only read by [`Shape::render`].
//!
//! Pipeline per vertex:
//!
//! ```text
//! local --(transform)--> rotated --(+ world_pos)--> world --(screen)--> screen
//! ```

use crate::math::{Matrix2D, Vector2D};
use crate::render::{DrawTarget, draw_closed_polygon};

/// Default hull stroke thickness.
pub const DEFAULT_LINE_THICKNESS: f32 = 1.0;

/// A closed polygon placed in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    vertices: Vec<Vector2D>,
    transform: Matrix2D,
    world_pos: Vector2D,
    render_points: Vec<Vector2D>,
    line_thickness: f32,
    scene_index: Option<usize>,
}

impl Shape {
    /// Create a detached shape from local-space vertices.
    ///
    /// The last vertex implicitly connects back to the first.
    pub fn new(vertices: Vec<Vector2D>) -> Self {
        let render_points = vec![Vector2D::ZERO; vertices.len()];
        Self {
            vertices,
            transform: Matrix2D::identity(),
            world_pos: Vector2D::ZERO,
            render_points,
            line_thickness: DEFAULT_LINE_THICKNESS,
            scene_index: None,
        }
    }

    /// Axis-aligned rectangle centred on the local origin.
    pub fn quad(half_width: f32, half_height: f32) -> Self {
        Self::new(vec![
            Vector2D::new(-half_width, -half_height),
            Vector2D::new(half_width, -half_height),
            Vector2D::new(half_width, half_height),
            Vector2D::new(-half_width, half_height),
        ])
    }

    /// Regular polygon with its first vertex pointing along +Y.
    pub fn regular_polygon(sides: usize, radius: f32) -> Self {
        let step = std::f32::consts::TAU / sides.max(1) as f32;
        let vertices = (0..sides)
            .map(|i| {
                let (sin, cos) = (i as f32 * step).sin_cos();
                Vector2D::new(-sin * radius, cos * radius)
            })
            .collect();
        Self::new(vertices)
    }

    pub fn with_line_thickness(mut self, thickness: f32) -> Self {
        self.line_thickness = thickness;
        self
    }

    pub fn with_world_pos(mut self, pos: Vector2D) -> Self {
        self.world_pos = pos;
        self
    }

    /// Recompute every render point from the current transform and position.
    pub fn update(&mut self, screen: &Matrix2D) {
        let offset = self.world_pos;
        for (out, vertex) in self.render_points.iter_mut().zip(&self.vertices) {
            let world = self.transform.apply(*vertex) + offset;
            *out = screen.apply(world);
        }
    }

    /// Draw the cached render points as a closed polygon.
    pub fn render(&self, target: &mut dyn DrawTarget) {
        draw_closed_polygon(target, &self.render_points, self.line_thickness);
    }

    /// Fold an incremental rotation into the shape transform.
    pub fn rotate_by(&mut self, increment: &Matrix2D) {
        self.transform.compose_in_place(increment);
    }

    pub fn vertices(&self) -> &[Vector2D] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn render_points(&self) -> &[Vector2D] {
        &self.render_points
    }

    pub fn transform(&self) -> &Matrix2D {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Matrix2D) {
        self.transform = transform;
    }

    pub fn world_pos(&self) -> Vector2D {
        self.world_pos
    }

    pub fn set_world_pos(&mut self, pos: Vector2D) {
        self.world_pos = pos;
    }

    pub fn line_thickness(&self) -> f32 {
        self.line_thickness
    }

    /// Position in the owning world's draw order, `None` while detached.
    pub fn scene_index(&self) -> Option<usize> {
        self.scene_index
    }

    pub(crate) fn set_scene_index(&mut self, index: Option<usize>) {
        self.scene_index = index;
    }
}
