//! The shape command record exchanged between parser, store and dispatcher.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::UNKNOWN_SHAPE_TAG;
use crate::model::{ShapeKind, SketchPlane};

/// A numeric parameter value.
///
/// The parser keeps the distinction between integer-looking and
/// fractional literals, and `#[serde(untagged)]` preserves it through the
/// persisted JSON format: `10` round-trips as `Int`, `5.0` as `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
}

impl ParamValue {
    /// Numeric value as f64, whatever the stored representation.
    pub fn as_f64(&self) -> f64 {
        match self {
            ParamValue::Int(v) => *v as f64,
            ParamValue::Float(v) => *v,
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

/// Structured, validated record of one shape to construct.
///
/// All four fields are always present on a parsed command, even when their
/// values are empty or defaulted, so consumers never need to existence-check
/// them. The persisted entry format is exactly this struct as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeCommand {
    /// Raw shape tag as extracted ("circle", "rectangle", "ellipse",
    /// "unknown", or whatever the generator produced).
    pub shape: String,
    /// Shape-dependent numeric parameters. No required-key validation;
    /// the dispatcher applies construction defaults for missing keys.
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
    /// Construction plane tag, passed through verbatim from the input.
    #[serde(default)]
    pub plane: Option<String>,
    /// Raw point list, independent of `parameters`.
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl ShapeCommand {
    /// Create an empty command for a shape tag.
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            parameters: BTreeMap::new(),
            plane: None,
            coordinates: Vec::new(),
        }
    }

    /// The canonical unknown command: the fixed fallback substituted
    /// whenever extraction yields nothing usable.
    pub fn unknown() -> Self {
        Self {
            shape: UNKNOWN_SHAPE_TAG.to_string(),
            parameters: BTreeMap::new(),
            plane: Some(UNKNOWN_SHAPE_TAG.to_string()),
            coordinates: Vec::new(),
        }
    }

    /// Resolve the shape tag to its dispatch kind.
    pub fn kind(&self) -> ShapeKind {
        ShapeKind::from_tag(&self.shape)
    }

    /// Look up a numeric parameter as f64.
    pub fn parameter(&self, key: &str) -> Option<f64> {
        self.parameters.get(key).map(ParamValue::as_f64)
    }

    /// Look up a numeric parameter, falling back to a construction default.
    pub fn parameter_or(&self, key: &str, default: f64) -> f64 {
        self.parameter(key).unwrap_or(default)
    }

    /// Resolve the plane tag to a sketch plane, defaulting to XY when the
    /// tag is absent or not in the allowed set.
    pub fn sketch_plane(&self) -> SketchPlane {
        self.plane
            .as_deref()
            .and_then(SketchPlane::from_tag)
            .unwrap_or_default()
    }
}
