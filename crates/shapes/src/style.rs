//! Stroke attributes shared by every outline.

/// Outline colour and width. Outlines are never filled.
///
/// `color` is a display name handed to the surface verbatim (`"black"`,
/// `"tab:blue"`, `"#ff0000"`, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub line_width: f64,
}

impl Stroke {
    #[inline]
    pub fn new(color: impl Into<String>, line_width: f64) -> Self {
        Self {
            color: color.into(),
            line_width,
        }
    }
    pub fn rectangle_default() -> Self {
        Self::new("black", 1.5)
    }
    pub fn triangle_default() -> Self {
        Self::new("tab:blue", 1.5)
    }
    pub fn circle_default() -> Self {
        Self::new("tab:red", 1.8)
    }
}
