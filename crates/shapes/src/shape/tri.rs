use nalgebra::Vector2;

use super::{fmt_point, Area, Figure};
use crate::geom::triangle_area;
use crate::style::Stroke;
use crate::surface::Surface;

/// Triangle through three vertices, stored verbatim.
///
/// Degenerate (collinear or repeated) vertices are allowed; their area is zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Vector2<f64>; 3],
    stroke: Stroke,
}

impl Triangle {
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Self {
        Self {
            vertices: [p1, p2, p3],
            stroke: Stroke::triangle_default(),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.stroke.color = color.into();
        self
    }
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.stroke.line_width = line_width;
        self
    }

    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        self.vertices
    }
}

impl Area for Triangle {
    fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        triangle_area(a, b, c)
    }
}

impl Figure for Triangle {
    fn kind(&self) -> &'static str {
        "triangle"
    }
    fn stroke(&self) -> &Stroke {
        &self.stroke
    }
    fn describe(&self) -> String {
        let [a, b, c] = self.vertices;
        format!(
            "Triangle: p1={}, p2={}, p3={}, color={}, linewidth={}",
            fmt_point(a),
            fmt_point(b),
            fmt_point(c),
            self.stroke.color,
            self.stroke.line_width
        )
    }
    fn render(&self, surface: &mut dyn Surface) {
        surface.polygon_outline(&self.vertices, &self.stroke);
    }
}
