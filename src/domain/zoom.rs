//! Bounded zoom factor for the design viewer
//!
//! The scale is kept as a whole number of quarter steps so repeated
//! zooming never accumulates floating point drift.

use serde::{Serialize, Serializer};
use tracing::debug;

const STEPS_PER_UNIT: u8 = 4;
const MIN_STEPS: u8 = 2; // 0.5
const MAX_STEPS: u8 = 12; // 3.0
const DEFAULT_STEPS: u8 = STEPS_PER_UNIT; // 1.0

/// Scale factor in `[0.5, 3.0]`, moved in steps of 0.25
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    steps: u8,
}

impl ZoomState {
    pub const MIN_SCALE: f64 = MIN_STEPS as f64 / STEPS_PER_UNIT as f64;
    pub const MAX_SCALE: f64 = MAX_STEPS as f64 / STEPS_PER_UNIT as f64;
    pub const STEP: f64 = 1.0 / STEPS_PER_UNIT as f64;

    pub fn new() -> Self {
        ZoomState { steps: DEFAULT_STEPS }
    }

    pub fn scale(&self) -> f64 {
        self.steps as f64 / STEPS_PER_UNIT as f64
    }

    /// No-op at the ceiling
    pub fn zoom_in(&mut self) -> f64 {
        self.steps = (self.steps + 1).min(MAX_STEPS);
        debug!(scale = self.scale(), "Zoomed in");
        self.scale()
    }

    /// No-op at the floor
    pub fn zoom_out(&mut self) -> f64 {
        self.steps = self.steps.saturating_sub(1).max(MIN_STEPS);
        debug!(scale = self.scale(), "Zoomed out");
        self.scale()
    }

    pub fn reset(&mut self) -> f64 {
        self.steps = DEFAULT_STEPS;
        self.scale()
    }

    /// Whether the zoom-in control should be enabled
    pub fn can_zoom_in(&self) -> bool {
        self.steps < MAX_STEPS
    }

    /// Whether the zoom-out control should be enabled
    pub fn can_zoom_out(&self) -> bool {
        self.steps > MIN_STEPS
    }

    /// Scale as a whole percentage, e.g. 125 for 1.25
    pub fn percent(&self) -> u16 {
        self.steps as u16 * 100 / STEPS_PER_UNIT as u16
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for ZoomState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.scale())
    }
}
