use nalgebra::Vector2;

use super::{fmt_point, Figure};
use crate::error::ShapeError;
use crate::geom::regular_polygon;
use crate::style::Stroke;
use crate::surface::Surface;

/// Polygon resolution used when a circle is built without an explicit count.
pub const DEFAULT_CIRCLE_SIDES: u32 = 200;

/// Circle drawn as a regular polygon with `sides` vertices.
///
/// Radius is stored as given; zero is a valid degenerate circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Vector2<f64>,
    radius: f64,
    sides: u32,
    stroke: Stroke,
}

impl Circle {
    /// Fails with `InvalidSides` when `sides == 0`.
    pub fn new(center: Vector2<f64>, radius: f64, sides: u32) -> Result<Self, ShapeError> {
        if sides == 0 {
            return Err(ShapeError::InvalidSides { sides });
        }
        Ok(Self {
            center,
            radius,
            sides,
            stroke: Stroke::circle_default(),
        })
    }

    /// Circle with `DEFAULT_CIRCLE_SIDES`.
    pub fn with_default_sides(center: Vector2<f64>, radius: f64) -> Self {
        Self {
            center,
            radius,
            sides: DEFAULT_CIRCLE_SIDES,
            stroke: Stroke::circle_default(),
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
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Polygon vertices, CCW from angle 0. Recomputed on every call.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        regular_polygon(self.center, self.radius, self.sides)
    }
}

impl Figure for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }
    fn stroke(&self) -> &Stroke {
        &self.stroke
    }
    fn describe(&self) -> String {
        format!(
            "Circle: center={}, radius={}, color={}, linewidth={}, sides={}",
            fmt_point(self.center),
            self.radius,
            self.stroke.color,
            self.stroke.line_width,
            self.sides
        )
    }
    fn render(&self, surface: &mut dyn Surface) {
        surface.polygon_outline(&self.vertices(), &self.stroke);
    }
}
