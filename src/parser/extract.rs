//! Per-field extractors for generated shape text.
//!
//! Each field is extracted independently, so one field failing to match or
//! decode never invalidates the others.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::model::ParamValue;

/// Fields that are never treated as numeric parameters.
const RESERVED_KEYS: [&str; 3] = ["shape", "plane", "coordinates"];

static SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""shape"\s*:\s*"([^"]+)""#).expect("SHAPE_RE regex should compile")
});

static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(\w+)"\s*:\s*([\d.]+)"#).expect("PARAM_RE regex should compile")
});

static PLANE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""plane"\s*:\s*"([^"]+)""#).expect("PLANE_RE regex should compile")
});

static COORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""coordinates"\s*:\s*(\[[^\]]+\])"#).expect("COORDS_RE regex should compile")
});

/// Outcome of the coordinates field extraction.
#[derive(Debug, PartialEq)]
pub(crate) enum Coordinates {
    /// No coordinates bracket in the input.
    Absent,
    /// Bracket found and decoded.
    Found(Vec<f64>),
    /// Bracket found but its contents failed to decode as a numeric array.
    /// Partial coordinate lists are not valid, so this fails the whole
    /// extraction rather than yielding a truncated point list.
    Malformed,
}

/// Extract the shape tag: first `"shape": "<value>"` match, trimmed.
pub(crate) fn extract_shape(input: &str) -> Option<String> {
    SHAPE_RE
        .captures(input)
        .map(|c| c[1].trim().to_string())
}

/// Extract all `"<key>": <number>` pairs outside the reserved keys.
///
/// Integer parse is attempted first so integer-looking literals stay
/// integers; literals with a decimal point become floats. A literal failing
/// both parses (e.g. `1.2.3`) is dropped silently rather than aborting the
/// extraction.
pub(crate) fn extract_parameters(input: &str) -> BTreeMap<String, ParamValue> {
    let mut parameters = BTreeMap::new();

    for caps in PARAM_RE.captures_iter(input) {
        let key = &caps[1];
        if RESERVED_KEYS.contains(&key) {
            continue;
        }

        let literal = &caps[2];
        let value = literal
            .parse::<i64>()
            .map(ParamValue::Int)
            .or_else(|_| literal.parse::<f64>().map(ParamValue::Float));

        match value {
            Ok(v) => {
                parameters.insert(key.to_string(), v);
            }
            Err(_) => {
                tracing::debug!("dropping unparseable parameter {}={}", key, literal);
            }
        }
    }

    parameters
}

/// Extract the plane tag: first `"plane": "<value>"` match, trimmed and
/// passed through verbatim. Validation against the allowed plane set is a
/// dispatch-time concern.
pub(crate) fn extract_plane(input: &str) -> Option<String> {
    PLANE_RE
        .captures(input)
        .map(|c| c[1].trim().to_string())
}

/// Extract the coordinates array: first `"coordinates": [...]` match, with
/// the bracketed contents decoded as a JSON numeric array.
pub(crate) fn extract_coordinates(input: &str) -> Coordinates {
    let Some(caps) = COORDS_RE.captures(input) else {
        return Coordinates::Absent;
    };

    match serde_json::from_str::<Vec<f64>>(caps[1].trim()) {
        Ok(points) => Coordinates::Found(points),
        Err(err) => {
            tracing::debug!("malformed coordinates array: {}", err);
            Coordinates::Malformed
        }
    }
}
