//! Dispatcher: the consumer loop over pending commands.
//!
//! One poll cycle walks every currently pending entry, routes it to the
//! construction backend by shape kind, and retires the entry only when the
//! backend succeeds. A crash between read and remove leaves the entry
//! pending, which is the intended at-least-once behavior; a backend failure
//! leaves it pending for the next cycle. One bad command never blocks the
//! rest of the batch.

mod trace;

pub use trace::TracingBackend;

use tracing::{debug, info, warn};

use crate::config::{
    DEFAULT_CENTER, DEFAULT_HEIGHT, DEFAULT_MAJOR_RADIUS, DEFAULT_MINOR_RADIUS, DEFAULT_RADIUS,
    DEFAULT_WIDTH,
};
use crate::error::Result;
use crate::model::{ShapeCommand, ShapeKind, SketchPlane};
use crate::store::CommandQueue;

/// The external geometry-construction collaborator.
///
/// One method per supported shape kind, each taking fully defaulted numeric
/// parameters plus the construction plane. Implementations are the CAD
/// scripting layer; an error return means the command stays queued for
/// retry.
pub trait SketchBackend {
    fn create_circle(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius: f64,
        plane: SketchPlane,
    ) -> Result<()>;

    fn create_rectangle(
        &mut self,
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
        plane: SketchPlane,
    ) -> Result<()>;

    fn create_ellipse(
        &mut self,
        center_x: f64,
        center_y: f64,
        major_radius: f64,
        minor_radius: f64,
        plane: SketchPlane,
    ) -> Result<()>;
}

/// Per-id outcome report for one poll cycle.
#[derive(Debug, Default)]
pub struct CycleReport {
    /// Entries constructed and retired from the queue.
    pub succeeded: Vec<String>,
    /// Entries whose construction failed, left queued for retry,
    /// with the failure reason.
    pub failed: Vec<(String, String)>,
    /// Entries not routed to any handler (unrecognized or unknown shape,
    /// or already consumed), with the skip reason.
    pub skipped: Vec<(String, String)>,
}

impl CycleReport {
    /// Total number of ids visited in this cycle.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len() + self.skipped.len()
    }

    /// Whether every visited entry either succeeded or was skipped.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Consumer that drains a command queue into a sketch backend.
pub struct Dispatcher<'a, Q: CommandQueue, B: SketchBackend> {
    queue: &'a Q,
    backend: &'a mut B,
}

impl<'a, Q: CommandQueue, B: SketchBackend> Dispatcher<'a, Q, B> {
    pub fn new(queue: &'a Q, backend: &'a mut B) -> Self {
        Self { queue, backend }
    }

    /// Run one poll cycle over all currently pending entries.
    ///
    /// Only a queue listing failure (store unavailable) aborts the cycle;
    /// everything that goes wrong with an individual entry is recorded in
    /// the report and the loop moves on. Polling cadence is the caller's
    /// concern.
    pub fn run_cycle(&mut self) -> Result<CycleReport> {
        let ids = self.queue.list_pending()?;
        let mut report = CycleReport::default();

        debug!("poll cycle over {} pending entr(ies)", ids.len());

        for id in ids {
            let command = match self.queue.read(&id) {
                Ok(command) => command,
                Err(err) if err.is_not_found() => {
                    // Consumed between listing and read; nothing to do.
                    debug!("{} gone before read, skipping", id);
                    report.skipped.push((id, "already consumed".to_string()));
                    continue;
                }
                Err(err) => {
                    warn!("{} unreadable, left for retry: {}", id, err);
                    report.failed.push((id, err.to_string()));
                    continue;
                }
            };

            let kind = command.kind();
            if !kind.is_constructible() {
                debug!("{} has no handler for shape '{}'", id, command.shape);
                report.skipped.push((id, command.shape));
                continue;
            }

            match self.construct(kind, &command) {
                Ok(()) => {
                    // The only path that retires an entry.
                    self.queue.remove(&id)?;
                    info!("constructed {} from {}", kind, id);
                    report.succeeded.push(id);
                }
                Err(err) => {
                    warn!("{} ({}) failed, left for retry: {}", id, kind, err);
                    report.failed.push((id, err.to_string()));
                }
            }
        }

        Ok(report)
    }

    /// Invoke the backend handler for one command, applying the
    /// construction defaults for absent parameters.
    fn construct(&mut self, kind: ShapeKind, command: &ShapeCommand) -> Result<()> {
        let center_x = command.parameter_or("center_x", DEFAULT_CENTER);
        let center_y = command.parameter_or("center_y", DEFAULT_CENTER);
        let plane = command.sketch_plane();

        match kind {
            ShapeKind::Circle => self.backend.create_circle(
                center_x,
                center_y,
                command.parameter_or("radius", DEFAULT_RADIUS),
                plane,
            ),
            ShapeKind::Rectangle => self.backend.create_rectangle(
                center_x,
                center_y,
                command.parameter_or("width", DEFAULT_WIDTH),
                command.parameter_or("height", DEFAULT_HEIGHT),
                plane,
            ),
            ShapeKind::Ellipse => self.backend.create_ellipse(
                center_x,
                center_y,
                command.parameter_or("major_radius", DEFAULT_MAJOR_RADIUS),
                command.parameter_or("minor_radius", DEFAULT_MINOR_RADIUS),
                plane,
            ),
            // Filtered out by is_constructible before this point.
            ShapeKind::Unknown | ShapeKind::Unrecognized => Ok(()),
        }
    }
}
