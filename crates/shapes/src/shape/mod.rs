//! Shape values and their capabilities.
//!
//! Every shape can describe itself and render its outline (`Figure`). Only the
//! triangle reports an area (`Area`); callers holding a `Shape` narrow with
//! `Shape::as_triangle` instead of inspecting runtime types.
//!
//! All shapes are immutable once built. `with_*` methods return a new value and
//! never touch geometry, so construction-time invariants hold for life.

mod circle;
mod rect;
mod tri;

use std::fmt;

use nalgebra::Vector2;

use crate::style::Stroke;
use crate::surface::Surface;

pub use circle::{Circle, DEFAULT_CIRCLE_SIDES};
pub use rect::Rectangle;
pub use tri::Triangle;

/// Common capability set of all shapes.
pub trait Figure {
    /// Short lowercase name (`"rectangle"`, ...).
    fn kind(&self) -> &'static str;
    fn stroke(&self) -> &Stroke;
    /// Deterministic one-line description; field order is fixed per kind.
    fn describe(&self) -> String;
    /// Append this shape's unfilled outline to `surface`.
    fn render(&self, surface: &mut dyn Surface);
}

/// Enclosed area, for shapes that expose it.
pub trait Area {
    fn area(&self) -> f64;
}

/// Any of the supported shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Self::Triangle(t) => Some(t),
            _ => None,
        }
    }

    /// Area if this shape exposes one (triangles only).
    pub fn area(&self) -> Option<f64> {
        self.as_triangle().map(|t| t.area())
    }

    fn figure(&self) -> &dyn Figure {
        match self {
            Self::Rectangle(r) => r,
            Self::Triangle(t) => t,
            Self::Circle(c) => c,
        }
    }
}

impl Figure for Shape {
    fn kind(&self) -> &'static str {
        self.figure().kind()
    }
    fn stroke(&self) -> &Stroke {
        self.figure().stroke()
    }
    fn describe(&self) -> String {
        self.figure().describe()
    }
    fn render(&self, surface: &mut dyn Surface) {
        self.figure().render(surface)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}
impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Self::Triangle(t)
    }
}
impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// `(x, y)` using shortest round-trip float formatting.
pub(crate) fn fmt_point(p: Vector2<f64>) -> String {
    format!("({}, {})", p.x, p.y)
}
