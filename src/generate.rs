//! Upstream text generation seam and the producer pipeline.
//!
//! The generation capability is an injected dependency rather than a
//! process-wide singleton, so the parser and producer pipeline are testable
//! with literal strings and no model backend.

use crate::error::Result;
use crate::model::ShapeCommand;
use crate::parser::parse_generated;
use crate::store::CommandQueue;

/// Upstream text generation capability: the fine-tuned model (or inference
/// service) that turns a natural-language prompt into shape text.
pub trait TextGenerator {
    /// Produce raw shape text for a prompt. The output only has to
    /// resemble JSON; the parser tolerates the rest.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Generator that returns the same canned text for every prompt. Useful in
/// tests and for replaying captured model output offline.
#[derive(Debug, Clone)]
pub struct CannedText(pub String);

impl TextGenerator for CannedText {
    fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Producer step: parse generated text (substituting the canonical unknown
/// command when nothing is extractable) and enqueue the result.
///
/// Returns the entry id and the command as parsed. Parsing itself cannot
/// fail; only the enqueue can.
pub fn relay_text(queue: &impl CommandQueue, text: &str) -> Result<(String, ShapeCommand)> {
    let command = parse_generated(text);
    let id = queue.enqueue(&command)?;
    Ok((id, command))
}

/// Full producer pipeline: generate shape text for a prompt, parse it, and
/// enqueue the command for the dispatcher.
pub fn generate_and_relay(
    generator: &impl TextGenerator,
    queue: &impl CommandQueue,
    prompt: &str,
) -> Result<(String, ShapeCommand)> {
    let text = generator.generate(prompt)?;
    relay_text(queue, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;
    use crate::store::DirStore;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_relay_text_enqueues_parsed_command() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());

        let (id, command) =
            relay_text(&store, r#""shape": "circle", "radius": 5.0"#).unwrap();
        assert_eq!(command.shape, "circle");
        assert_eq!(store.read(&id).unwrap(), command);
    }

    #[test]
    fn test_relay_text_falls_back_to_unknown() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());

        let (id, command) = relay_text(&store, "no structure at all").unwrap();
        assert_eq!(command, ShapeCommand::unknown());
        assert_eq!(store.read(&id).unwrap(), command);
    }

    #[test]
    fn test_generate_and_relay_uses_injected_generator() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());
        let generator = CannedText(r#""shape": "rectangle", "width": 10"#.to_string());

        let (_, command) = generate_and_relay(&generator, &store, "make a box").unwrap();
        assert_eq!(command.shape, "rectangle");
    }

    #[test]
    fn test_generator_failure_propagates() {
        struct Failing;
        impl TextGenerator for Failing {
            fn generate(&self, _prompt: &str) -> Result<String> {
                Err(RelayError::Generation {
                    message: "model offline".to_string(),
                })
            }
        }

        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());

        let err = generate_and_relay(&Failing, &store, "anything").unwrap_err();
        assert!(matches!(err, RelayError::Generation { .. }));
        assert!(store.list_pending().unwrap().is_empty());
    }
}
