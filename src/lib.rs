//! shape-relay - bridge from model-generated shape text to a CAD scripting backend.
//!
//! This library turns loosely structured generated text into validated shape
//! commands, persists them in a durable file-backed queue, and dispatches
//! them to a construction backend with at-least-once delivery. The text
//! generation model and the CAD geometry layer are external collaborators
//! behind the [`TextGenerator`] and [`SketchBackend`] traits.
//!
//! # Example
//!
//! ```no_run
//! use shape_relay::{relay_text, DirStore, Dispatcher, TracingBackend};
//!
//! let store = DirStore::new("commands");
//! relay_text(&store, r#""shape": "circle", "radius": 5.0"#).unwrap();
//!
//! let mut backend = TracingBackend::default();
//! let report = Dispatcher::new(&store, &mut backend).run_cycle().unwrap();
//! println!("constructed {} shape(s)", report.succeeded.len());
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod generate;
pub mod model;
pub mod parser;
pub mod store;

// Re-exports for convenience
pub use dispatch::{CycleReport, Dispatcher, SketchBackend, TracingBackend};
pub use error::{RelayError, Result};
pub use generate::{generate_and_relay, relay_text, CannedText, TextGenerator};
pub use model::{ParamValue, ShapeCommand, ShapeKind, SketchPlane};
pub use parser::{extract_command, parse_generated};
pub use store::{CommandQueue, DirStore};
