use nalgebra::Vector2;

use super::{fmt_point, Figure};
use crate::style::Stroke;
use crate::surface::Surface;

/// Axis-aligned rectangle given by two corners.
///
/// Invariant: `x1 <= x2` and `y1 <= y2` (corners are swapped pairwise on
/// construction). Equal coordinates give a zero-area rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    lower_left: Vector2<f64>,
    upper_right: Vector2<f64>,
    stroke: Stroke,
}

impl Rectangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        Self {
            lower_left: Vector2::new(x1, y1),
            upper_right: Vector2::new(x2, y2),
            stroke: Stroke::rectangle_default(),
        }
    }

    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
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
    pub fn lower_left(&self) -> Vector2<f64> {
        self.lower_left
    }
    #[inline]
    pub fn upper_right(&self) -> Vector2<f64> {
        self.upper_right
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }
}

impl Figure for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }
    fn stroke(&self) -> &Stroke {
        &self.stroke
    }
    fn describe(&self) -> String {
        format!(
            "Rectangle: lower-left={}, upper-right={}, color={}, linewidth={}",
            fmt_point(self.lower_left),
            fmt_point(self.upper_right),
            self.stroke.color,
            self.stroke.line_width
        )
    }
    fn render(&self, surface: &mut dyn Surface) {
        surface.rect_outline(self.lower_left, self.width(), self.height(), &self.stroke);
    }
}
