//! Ordered collections of shapes.
//!
//! A `Scene` is just a caller-owned `Vec<Shape>`; it keeps no registry and does
//! not own any surface. Rendering walks the shapes in order.

use nalgebra::Vector2;

use crate::shape::{Circle, Figure, Rectangle, Shape, Triangle};
use crate::surface::Surface;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The fixed demo: three rectangles, a 3-4-5 triangle and a unit circle.
    pub fn demo() -> Self {
        let mut scene = Self::new();
        scene.push(Rectangle::new(0.0, 0.0, 2.0, 1.0));
        scene.push(Rectangle::new(1.0, 2.0, 3.0, 4.0));
        scene.push(Rectangle::new(-1.0, -2.0, 0.0, 1.0));
        scene.push(Triangle::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 3.0),
        ));
        scene.push(Circle::with_default_sides(Vector2::new(1.5, 1.5), 1.0));
        scene
    }

    /// One description line per shape; triangles get an extra `  area = ..` line.
    pub fn info_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.shapes.len());
        for shape in &self.shapes {
            lines.push(shape.describe());
            if let Some(area) = shape.area() {
                lines.push(format!("  area = {area}"));
            }
        }
        lines
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        for (k, shape) in self.shapes.iter().enumerate() {
            tracing::debug!(index = k, kind = shape.kind(), "render shape");
            shape.render(surface);
        }
        tracing::debug!(shapes = self.shapes.len(), "scene rendered");
    }
}

impl FromIterator<Shape> for Scene {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}
