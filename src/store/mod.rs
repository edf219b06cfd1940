//! Durable command queue between producer and consumer.
//!
//! The queue is the only shared resource between the producing process (the
//! parser's caller) and the consuming process (the dispatcher); there is no
//! shared memory. The contract is at-least-once delivery: an entry that
//! exists in the queue has not yet been successfully processed, and removal
//! is idempotent.

mod dir;

pub use dir::DirStore;

use crate::error::Result;
use crate::model::ShapeCommand;

/// Abstraction over the backing medium for pending shape commands.
///
/// Parser and dispatcher only ever talk to this trait, so the medium (local
/// directory, object store, message queue) is swappable without touching
/// either. Implementations must preserve the at-least-once contract and keep
/// `remove` idempotent. No ordering stronger than the listing order of the
/// backing medium is guaranteed.
pub trait CommandQueue {
    /// Persist a command, returning its entry id.
    fn enqueue(&self, command: &ShapeCommand) -> Result<String>;

    /// List the ids of all currently pending entries.
    fn list_pending(&self) -> Result<Vec<String>>;

    /// Load one entry. Absence is the recoverable
    /// [`RelayError::EntryNotFound`](crate::RelayError::EntryNotFound)
    /// condition, expected under concurrent consumption.
    fn read(&self, id: &str) -> Result<ShapeCommand>;

    /// Delete one entry. Removing an id that is already gone succeeds.
    fn remove(&self, id: &str) -> Result<()>;
}
