//! JSON scene files.
//!
//! ```json
//! {"shapes": [
//!   {"kind": "rectangle", "x1": 2, "y1": 1, "x2": 0, "y2": 0},
//!   {"kind": "triangle", "p1": [0, 0], "p2": [4, 0], "p3": [0, 3], "color": "tab:green"},
//!   {"kind": "circle", "center": [1.5, 1.5], "radius": 1, "sides": 64}
//! ]}
//! ```
//!
//! Records go through the shape constructors, so corner normalisation and the
//! side-count check apply. Omitted style fields keep the per-kind defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use shapes::{Circle, Primitive, Rectangle, Scene, Shape, ShapeError, Triangle, Vec2};
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeRecord {
    Rectangle {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Option<String>,
        line_width: Option<f64>,
    },
    Triangle {
        p1: [f64; 2],
        p2: [f64; 2],
        p3: [f64; 2],
        color: Option<String>,
        line_width: Option<f64>,
    },
    Circle {
        center: [f64; 2],
        radius: f64,
        sides: Option<u32>,
        color: Option<String>,
        line_width: Option<f64>,
    },
}

#[derive(Clone, Debug, Deserialize)]
pub struct SceneFile {
    pub shapes: Vec<ShapeRecord>,
}

fn pt([x, y]: [f64; 2]) -> Vec2<f64> {
    Vec2::new(x, y)
}

// Each shape type has its own inherent `with_*` setters.
macro_rules! restyle {
    ($shape:expr, $color:expr, $lw:expr) => {{
        let mut s = $shape;
        if let Some(c) = $color {
            s = s.with_color(c.clone());
        }
        if let Some(w) = $lw {
            s = s.with_line_width(*w);
        }
        s
    }};
}

impl ShapeRecord {
    pub fn build(&self) -> Result<Shape, ShapeError> {
        Ok(match self {
            Self::Rectangle {
                x1,
                y1,
                x2,
                y2,
                color,
                line_width,
            } => restyle!(Rectangle::new(*x1, *y1, *x2, *y2), color, line_width).into(),
            Self::Triangle {
                p1,
                p2,
                p3,
                color,
                line_width,
            } => restyle!(Triangle::new(pt(*p1), pt(*p2), pt(*p3)), color, line_width).into(),
            Self::Circle {
                center,
                radius,
                sides,
                color,
                line_width,
            } => {
                let circle = match sides {
                    Some(n) => Circle::new(pt(*center), *radius, *n)?,
                    None => Circle::with_default_sides(pt(*center), *radius),
                };
                restyle!(circle, color, line_width).into()
            }
        })
    }
}

impl SceneFile {
    pub fn into_scene(self) -> Result<Scene> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(k, rec)| rec.build().with_context(|| format!("shape #{k}")))
            .collect()
    }
}

pub fn parse(text: &str) -> Result<Scene> {
    let file: SceneFile = serde_json::from_str(text).context("parsing scene JSON")?;
    file.into_scene()
}

pub fn load(path: &Path) -> Result<Scene> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&text).with_context(|| format!("loading scene {}", path.display()))
}

/// JSON form of recorded primitives (the `--format json` output).
pub fn primitives_json(prims: &[Primitive]) -> Value {
    let xy = |p: &Vec2<f64>| json!([p.x, p.y]);
    Value::Array(
        prims
            .iter()
            .map(|prim| {
                let mut entry = match prim {
                    Primitive::Rect {
                        origin,
                        width,
                        height,
                        ..
                    } => json!({
                        "type": "rect",
                        "origin": xy(origin),
                        "width": width,
                        "height": height,
                    }),
                    Primitive::Polygon { vertices, .. } => json!({
                        "type": "polygon",
                        "vertices": vertices.iter().map(|p| xy(p)).collect::<Vec<_>>(),
                    }),
                };
                let stroke = prim.stroke();
                entry["color"] = json!(stroke.color);
                entry["line_width"] = json!(stroke.line_width);
                entry
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapes::{Figure, Recorder};

    #[test]
    fn parse_builds_normalized_styled_shapes() {
        let scene = parse(
            r#"{"shapes": [
                {"kind": "rectangle", "x1": 2, "y1": 1, "x2": 0, "y2": 0},
                {"kind": "triangle", "p1": [0, 0], "p2": [4, 0], "p3": [0, 3], "color": "tab:green"},
                {"kind": "circle", "center": [1.5, 1.5], "radius": 1, "sides": 64, "line_width": 3}
            ]}"#,
        )
        .unwrap();
        assert_eq!(scene.len(), 3);
        assert_eq!(
            scene.shapes[0].describe(),
            "Rectangle: lower-left=(0, 0), upper-right=(2, 1), color=black, linewidth=1.5"
        );
        assert_eq!(scene.shapes[1].stroke().color, "tab:green");
        assert_eq!(scene.shapes[1].area(), Some(6.0));
        match &scene.shapes[2] {
            Shape::Circle(c) => {
                assert_eq!(c.sides(), 64);
                assert_eq!(c.stroke().line_width, 3.0);
                assert_eq!(c.stroke().color, "tab:red");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn zero_sides_is_an_error_not_a_panic() {
        let err = parse(r#"{"shapes": [{"kind": "circle", "center": [0, 0], "radius": 1, "sides": 0}]}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "shape #0");
        let root = err.root_cause().to_string();
        assert!(root.contains("must be positive"), "{root}");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(parse(r#"{"shapes": [{"kind": "hexagon"}]}"#).is_err());
    }

    #[test]
    fn primitives_json_shape() {
        let mut rec = Recorder::new();
        Scene::demo().render(&mut rec);
        let v = primitives_json(&rec.primitives);
        assert_eq!(v.as_array().unwrap().len(), 5);
        assert_eq!(v[0]["type"], "rect");
        assert_eq!(v[0]["width"], 2.0);
        assert_eq!(v[3]["type"], "polygon");
        assert_eq!(v[3]["vertices"][1], json!([4.0, 0.0]));
        assert_eq!(v[3]["color"], "tab:blue");
        assert_eq!(v[3]["line_width"], 1.5);
        assert_eq!(v[0]["color"], "black");
        assert_eq!(v[4]["line_width"], 1.8);
    }
}
