//! Data model types for shape commands.

mod command;
mod shape;

pub use command::{ParamValue, ShapeCommand};
pub use shape::{ShapeKind, SketchPlane};
