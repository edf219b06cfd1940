//! Tracing stand-in for the CAD construction backend.

use tracing::info;

use crate::dispatch::SketchBackend;
use crate::error::Result;
use crate::model::SketchPlane;

/// Backend that logs every construction call instead of driving a CAD
/// application. Used by the CLI and wherever the real scripting layer is
/// not attached.
#[derive(Debug, Default)]
pub struct TracingBackend {
    constructed: usize,
}

impl TracingBackend {
    /// Number of shapes "constructed" so far.
    pub fn constructed(&self) -> usize {
        self.constructed
    }
}

impl SketchBackend for TracingBackend {
    fn create_circle(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius: f64,
        plane: SketchPlane,
    ) -> Result<()> {
        info!(
            "circle: center=({}, {}) radius={} plane={}",
            center_x, center_y, radius, plane
        );
        self.constructed += 1;
        Ok(())
    }

    fn create_rectangle(
        &mut self,
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
        plane: SketchPlane,
    ) -> Result<()> {
        info!(
            "rectangle: center=({}, {}) width={} height={} plane={}",
            center_x, center_y, width, height, plane
        );
        self.constructed += 1;
        Ok(())
    }

    fn create_ellipse(
        &mut self,
        center_x: f64,
        center_y: f64,
        major_radius: f64,
        minor_radius: f64,
        plane: SketchPlane,
    ) -> Result<()> {
        info!(
            "ellipse: center=({}, {}) major={} minor={} plane={}",
            center_x, center_y, major_radius, minor_radius, plane
        );
        self.constructed += 1;
        Ok(())
    }
}
