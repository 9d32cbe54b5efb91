//! Planar shapes and their outlines.
//!
//! Shapes are small immutable values (`Rectangle`, `Triangle`, `Circle`) that can
//! describe themselves and append an unfilled outline to a caller-owned
//! [`Surface`]. Nothing here owns a window or a file; surfaces decide what an
//! outline becomes.
//!
//! Layout
//! - `geom`: shoelace areas and regular-polygon vertices.
//! - `shape`: the three shape values, the `Figure`/`Area` capabilities, `Shape`.
//! - `surface`: the `Surface` trait plus `Recorder` and `SvgSurface`.
//! - `scene`: ordered shape lists and the demo scene.

pub mod error;
pub mod geom;
pub mod scene;
pub mod shape;
pub mod style;
pub mod surface;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ShapeError;
pub use nalgebra::Vector2 as Vec2;
pub use scene::Scene;
pub use shape::{Area, Circle, Figure, Rectangle, Shape, Triangle, DEFAULT_CIRCLE_SIDES};
pub use style::Stroke;
pub use surface::{Primitive, Recorder, Surface, SvgSurface};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{polygon_signed_area, regular_polygon, signed_area, triangle_area};
    pub use crate::scene::Scene;
    pub use crate::shape::{Area, Circle, Figure, Rectangle, Shape, Triangle};
    pub use crate::style::Stroke;
    pub use crate::surface::{Primitive, Recorder, Surface, SvgSurface};
    pub use crate::ShapeError;
    pub use nalgebra::Vector2 as Vec2;
}
