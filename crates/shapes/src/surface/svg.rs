//! SVG serialisation of recorded outlines.
//!
//! World coordinates have +y up (plotting-axes convention); SVG has +y down, so
//! every point is mapped through `y ↦ (max.y + margin − y)·scale`. The viewBox
//! covers the union bounds plus `margin` on every side with equal aspect.

use std::io;
use std::path::Path;

use nalgebra::Vector2;
use svg::node::element::{Polygon, Rectangle};
use svg::Document;

use super::{bounds_of, Primitive, Recorder, Surface};
use crate::style::Stroke;

/// Surface that collects outlines and turns them into an `svg::Document`.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    recorder: Recorder,
    /// Blank border around the drawing, in world units.
    pub margin: f64,
    /// Pixels per world unit.
    pub scale: f64,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self {
            recorder: Recorder::new(),
            margin: 0.5,
            scale: 50.0,
        }
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.recorder.primitives
    }

    /// Build the document for everything drawn so far.
    pub fn document(&self) -> Document {
        let (lo, hi) =
            bounds_of(self.primitives()).unwrap_or((Vector2::zeros(), Vector2::zeros()));
        let frame = Frame {
            lo,
            hi,
            margin: self.margin,
            scale: self.scale,
        };
        let (w, h) = frame.size();
        let mut document = Document::new()
            .set("width", w)
            .set("height", h)
            .set("viewBox", (0.0, 0.0, w, h));
        for prim in self.primitives() {
            let stroke = prim.stroke();
            document = match prim {
                Primitive::Rect {
                    origin,
                    width,
                    height,
                    ..
                } => {
                    // SVG anchors rectangles at the top-left corner.
                    let (x, y) = frame.map(origin + Vector2::new(0.0, *height));
                    let rect = Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", px(width * self.scale))
                        .set("height", px(height * self.scale));
                    document.add(styled_rect(rect, stroke))
                }
                Primitive::Polygon { vertices, .. } => {
                    let points = vertices
                        .iter()
                        .map(|p| {
                            let (x, y) = frame.map(*p);
                            format!("{x},{y}")
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                    document.add(styled_polygon(Polygon::new().set("points", points), stroke))
                }
            };
        }
        document
    }

    /// Render the document to a string.
    pub fn to_svg(&self) -> String {
        self.document().to_string()
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        svg::save(path, &self.document())
    }
}

impl Surface for SvgSurface {
    fn rect_outline(&mut self, origin: Vector2<f64>, width: f64, height: f64, stroke: &Stroke) {
        self.recorder.rect_outline(origin, width, height, stroke);
    }

    fn polygon_outline(&mut self, vertices: &[Vector2<f64>], stroke: &Stroke) {
        self.recorder.polygon_outline(vertices, stroke);
    }
}

/// Map `tab:*` names onto the Tableau-10 palette; anything else passes through.
pub fn svg_color(name: &str) -> &str {
    match name {
        "tab:blue" => "#1f77b4",
        "tab:orange" => "#ff7f0e",
        "tab:green" => "#2ca02c",
        "tab:red" => "#d62728",
        "tab:purple" => "#9467bd",
        "tab:brown" => "#8c564b",
        "tab:pink" => "#e377c2",
        "tab:gray" | "tab:grey" => "#7f7f7f",
        "tab:olive" => "#bcbd22",
        "tab:cyan" => "#17becf",
        other => other,
    }
}

/// Round to a thousandth of a pixel to keep documents short.
#[inline]
fn px(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn styled_rect(rect: Rectangle, stroke: &Stroke) -> Rectangle {
    rect.set("fill", "none")
        .set("stroke", svg_color(&stroke.color))
        .set("stroke-width", stroke.line_width)
}

fn styled_polygon(poly: Polygon, stroke: &Stroke) -> Polygon {
    poly.set("fill", "none")
        .set("stroke", svg_color(&stroke.color))
        .set("stroke-width", stroke.line_width)
}

struct Frame {
    lo: Vector2<f64>,
    hi: Vector2<f64>,
    margin: f64,
    scale: f64,
}

impl Frame {
    fn map(&self, p: Vector2<f64>) -> (f64, f64) {
        (
            px((p.x - self.lo.x + self.margin) * self.scale),
            px((self.hi.y + self.margin - p.y) * self.scale),
        )
    }
    fn size(&self) -> (f64, f64) {
        let ext = self.hi - self.lo;
        (
            px((ext.x + 2.0 * self.margin) * self.scale),
            px((ext.y + 2.0 * self.margin) * self.scale),
        )
    }
}
