//! Shape kind and sketch plane tags.

use serde::{Deserialize, Serialize};

/// Closed set of shape kinds the dispatcher can route.
///
/// The parser stores the raw tag it extracted; this enum is how the
/// dispatcher branches on it, so an unexpected tag becomes an explicit
/// [`ShapeKind::Unrecognized`] rather than a silently ignored string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Circle: center + radius.
    Circle,
    /// Rectangle: center + width + height.
    Rectangle,
    /// Ellipse: center + major/minor radii.
    Ellipse,
    /// The canonical fallback tag produced when parsing yields nothing.
    Unknown,
    /// Any tag outside the supported set.
    Unrecognized,
}

impl ShapeKind {
    /// Resolve a raw shape tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "circle" => ShapeKind::Circle,
            "rectangle" => ShapeKind::Rectangle,
            "ellipse" => ShapeKind::Ellipse,
            "unknown" => ShapeKind::Unknown,
            _ => ShapeKind::Unrecognized,
        }
    }

    /// Whether the dispatcher has a construction handler for this kind.
    pub fn is_constructible(&self) -> bool {
        matches!(
            self,
            ShapeKind::Circle | ShapeKind::Rectangle | ShapeKind::Ellipse
        )
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Circle => write!(f, "circle"),
            ShapeKind::Rectangle => write!(f, "rectangle"),
            ShapeKind::Ellipse => write!(f, "ellipse"),
            ShapeKind::Unknown => write!(f, "unknown"),
            ShapeKind::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Construction plane for a sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SketchPlane {
    #[default]
    Xy,
    Xz,
    Yz,
}

impl SketchPlane {
    /// Parse a plane tag, case-insensitively. Returns `None` for anything
    /// outside the allowed set (including the fallback "unknown" tag).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "xy" => Some(SketchPlane::Xy),
            "xz" => Some(SketchPlane::Xz),
            "yz" => Some(SketchPlane::Yz),
            _ => None,
        }
    }
}

impl std::fmt::Display for SketchPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SketchPlane::Xy => write!(f, "XY"),
            SketchPlane::Xz => write!(f, "XZ"),
            SketchPlane::Yz => write!(f, "YZ"),
        }
    }
}
