//! Tolerant parser for model-generated shape text.
//!
//! The upstream generator produces text that resembles JSON but is not
//! guaranteed to be well-formed (truncation, surrounding prose, inconsistent
//! quoting), so this module does targeted per-field pattern extraction
//! instead of strict document decoding. It is deliberately not a JSON
//! parser and must not be replaced with one.

mod extract;

use crate::config::UNKNOWN_SHAPE_TAG;
use crate::model::ShapeCommand;

use extract::{
    extract_coordinates, extract_parameters, extract_plane, extract_shape, Coordinates,
};

/// Extract a shape command from generated text.
///
/// Returns `None` when nothing was extractable: no field matched at all, or
/// a coordinates bracket was present but failed to decode. Callers are
/// responsible for substituting [`ShapeCommand::unknown`]; most should use
/// [`parse_generated`] instead.
pub fn extract_command(input: &str) -> Option<ShapeCommand> {
    let shape = extract_shape(input);
    let parameters = extract_parameters(input);
    let plane = extract_plane(input);

    let coordinates = match extract_coordinates(input) {
        Coordinates::Found(points) => Some(points),
        Coordinates::Absent => None,
        Coordinates::Malformed => return None,
    };

    if shape.is_none() && parameters.is_empty() && plane.is_none() && coordinates.is_none() {
        return None;
    }

    Some(ShapeCommand {
        // A command with extractable parameters but no shape tag still gets
        // the safe fallback tag, so the shape field is always populated.
        shape: shape.unwrap_or_else(|| UNKNOWN_SHAPE_TAG.to_string()),
        parameters,
        plane,
        coordinates: coordinates.unwrap_or_default(),
    })
}

/// Parse generated text into a shape command, falling back to the canonical
/// unknown command when nothing is extractable.
///
/// This function never fails: any input string, including empty input and
/// binary garbage, yields a well-formed [`ShapeCommand`].
pub fn parse_generated(input: &str) -> ShapeCommand {
    match extract_command(input) {
        Some(command) => command,
        None => {
            tracing::debug!("nothing extractable, substituting canonical unknown command");
            ShapeCommand::unknown()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParamValue;
    use pretty_assertions::assert_eq;

    // ==================== scenario tests ====================

    #[test]
    fn test_circle_with_radius_and_plane() {
        let input = r#"Create a "shape": "circle" with "radius": 5.0 on "plane": "XY""#;
        let cmd = parse_generated(input);

        assert_eq!(cmd.shape, "circle");
        assert_eq!(cmd.parameters.len(), 1);
        assert_eq!(cmd.parameters["radius"], ParamValue::Float(5.0));
        assert_eq!(cmd.plane.as_deref(), Some("XY"));
        assert!(cmd.coordinates.is_empty());
    }

    #[test]
    fn test_rectangle_with_coordinates() {
        let input = r#""shape": "rectangle", "width": 10, "height": 5, "coordinates": [0,0,0]"#;
        let cmd = parse_generated(input);

        assert_eq!(cmd.shape, "rectangle");
        assert_eq!(cmd.parameters["width"], ParamValue::Int(10));
        assert_eq!(cmd.parameters["height"], ParamValue::Int(5));
        assert_eq!(cmd.plane, None);
        assert_eq!(cmd.coordinates, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_garbage_yields_canonical_unknown() {
        let cmd = parse_generated("garbage text with no structure");
        assert_eq!(cmd, ShapeCommand::unknown());
    }

    #[test]
    fn test_fallback_is_idempotent() {
        let first = parse_generated("???");
        let second = parse_generated("???");
        assert_eq!(first, second);
        assert_eq!(first, ShapeCommand::unknown());
    }

    // ==================== tolerance tests ====================

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_generated(""), ShapeCommand::unknown());
    }

    #[test]
    fn test_binary_garbage() {
        let input = "\u{0}\u{1}\u{fffd}\u{7f}";
        assert_eq!(parse_generated(input), ShapeCommand::unknown());
    }

    #[test]
    fn test_valid_but_unrelated_json() {
        let cmd = parse_generated(r#"{"temperature": 21.5}"#);
        // One numeric pair is still extractable; the shape defaults.
        assert_eq!(cmd.shape, "unknown");
        assert_eq!(cmd.parameters["temperature"], ParamValue::Float(21.5));
    }

    #[test]
    fn test_partial_field_failure_keeps_others() {
        // Malformed radius literal drops the parameter but not the command.
        let input = r#""shape": "circle", "radius": 5..0, "center_x": 1"#;
        let cmd = parse_generated(input);
        assert_eq!(cmd.shape, "circle");
        assert!(!cmd.parameters.contains_key("radius"));
        assert_eq!(cmd.parameters["center_x"], ParamValue::Int(1));
    }

    #[test]
    fn test_malformed_coordinates_fail_whole_extraction() {
        let input = r#""shape": "circle", "coordinates": [1, 2, broken"#;
        // The bracket never closes so the array pattern does not match at
        // all: coordinates are simply absent.
        let cmd = parse_generated(input);
        assert_eq!(cmd.shape, "circle");
        assert!(cmd.coordinates.is_empty());

        // A closed bracket with undecodable contents fails the extraction.
        let input = r#""shape": "circle", "coordinates": [1, 2, broken]"#;
        assert_eq!(parse_generated(input), ShapeCommand::unknown());
    }

    #[test]
    fn test_prose_wrapped_fields() {
        let input = "The model thinks you want \"shape\": \"ellipse\" sized by \
                     \"major_radius\": 8 and \"minor_radius\": 4, probably.";
        let cmd = parse_generated(input);
        assert_eq!(cmd.shape, "ellipse");
        assert_eq!(cmd.parameters["major_radius"], ParamValue::Int(8));
        assert_eq!(cmd.parameters["minor_radius"], ParamValue::Int(4));
    }
}
