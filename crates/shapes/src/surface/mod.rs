//! Drawing targets for shape outlines.
//!
//! A `Surface` accepts exactly two unfilled primitives: an axis-aligned
//! rectangle (origin + extent) and a closed polygon. Surfaces are owned by the
//! caller; shapes only append during `render` and keep no reference afterwards.
//!
//! Provided surfaces
//! - `Recorder`: keeps the primitives in append order (tests, JSON export).
//! - `SvgSurface`: serialises the primitives into an SVG document.

mod svg;

use nalgebra::Vector2;

use crate::style::Stroke;

pub use svg::{svg_color, SvgSurface};

/// Something outlines can be appended to.
pub trait Surface {
    /// Append an unfilled axis-aligned rectangle anchored at its lower-left corner.
    fn rect_outline(&mut self, origin: Vector2<f64>, width: f64, height: f64, stroke: &Stroke);
    /// Append a closed, unfilled polygon through `vertices` in order.
    fn polygon_outline(&mut self, vertices: &[Vector2<f64>], stroke: &Stroke);
}

/// One appended outline.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect {
        origin: Vector2<f64>,
        width: f64,
        height: f64,
        stroke: Stroke,
    },
    Polygon {
        vertices: Vec<Vector2<f64>>,
        stroke: Stroke,
    },
}

impl Primitive {
    pub fn stroke(&self) -> &Stroke {
        match self {
            Self::Rect { stroke, .. } | Self::Polygon { stroke, .. } => stroke,
        }
    }

    /// Axis-aligned bounds `(min, max)`; `None` for a polygon without vertices.
    pub fn bounds(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        match self {
            Self::Rect {
                origin,
                width,
                height,
                ..
            } => {
                let far = origin + Vector2::new(*width, *height);
                Some((origin.inf(&far), origin.sup(&far)))
            }
            Self::Polygon { vertices, .. } => {
                let first = *vertices.first()?;
                Some(
                    vertices
                        .iter()
                        .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p))),
                )
            }
        }
    }
}

/// Union of the bounds of all primitives that have any.
pub fn bounds_of(prims: &[Primitive]) -> Option<(Vector2<f64>, Vector2<f64>)> {
    prims
        .iter()
        .filter_map(Primitive::bounds)
        .reduce(|(lo, hi), (l, h)| (lo.inf(&l), hi.sup(&h)))
}

/// Surface that records every primitive in append order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub primitives: Vec<Primitive>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.primitives.len()
    }
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Surface for Recorder {
    fn rect_outline(&mut self, origin: Vector2<f64>, width: f64, height: f64, stroke: &Stroke) {
        self.primitives.push(Primitive::Rect {
            origin,
            width,
            height,
            stroke: stroke.clone(),
        });
    }

    fn polygon_outline(&mut self, vertices: &[Vector2<f64>], stroke: &Stroke) {
        self.primitives.push(Primitive::Polygon {
            vertices: vertices.to_vec(),
            stroke: stroke.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn recorder_keeps_append_order() {
        let mut rec = Recorder::new();
        let s = Stroke::rectangle_default();
        rec.polygon_outline(&[vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]], &s);
        rec.rect_outline(vector![0.0, 0.0], 2.0, 1.0, &s);
        assert_eq!(rec.len(), 2);
        assert!(matches!(rec.primitives[0], Primitive::Polygon { .. }));
        assert!(matches!(rec.primitives[1], Primitive::Rect { .. }));
        assert!(rec.primitives.iter().all(|p| p.stroke() == &s));
    }

    #[test]
    fn bounds_union() {
        let s = Stroke::rectangle_default();
        let prims = vec![
            Primitive::Rect {
                origin: vector![-1.0, -2.0],
                width: 1.0,
                height: 3.0,
                stroke: s.clone(),
            },
            Primitive::Polygon {
                vertices: vec![vector![2.0, 0.5], vector![0.0, 4.0]],
                stroke: s.clone(),
            },
            Primitive::Polygon {
                vertices: Vec::new(),
                stroke: s,
            },
        ];
        assert_eq!(prims[2].bounds(), None);
        let (lo, hi) = bounds_of(&prims).unwrap();
        assert_eq!(lo, vector![-1.0, -2.0]);
        assert_eq!(hi, vector![2.0, 4.0]);
        assert_eq!(bounds_of(&[]), None);
    }
}
