use crate::time::FrameRate;
use tracing::debug;

/// Seconds per major tick, before frame-rate specialization. The first three
/// slots are placeholders for `2/fps`, `5/fps` and `10/fps`.
pub const BASE_SCALE: [f64; 15] = [
    0.0, 0.0, 0.0, 0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 300.0, 600.0, 3600.0,
];

/// Labels need this much room relative to their rendered width.
pub const DEFAULT_LABEL_SPACING_FACTOR: f64 = 1.5;

/// Ordered candidate granularities, ascending seconds per major tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleTemplate {
    values: Vec<f64>,
}

impl Default for ScaleTemplate {
    fn default() -> Self {
        Self::for_frame_rate(FrameRate::default())
    }
}

impl ScaleTemplate {
    pub fn for_frame_rate(rate: FrameRate) -> Self {
        let mut values = BASE_SCALE.to_vec();
        let fps = rate.as_f64();
        values[0] = 2.0 / fps;
        values[1] = 5.0 / fps;
        values[2] = 10.0 / fps;
        // Below 20 fps the frame slots overtake 0.5s; keep the order ascending.
        values.sort_by(f64::total_cmp);
        debug!(fps, ?values, "Specialized scale template");
        Self { values }
    }

    /// Recomputes the frame-derived entries.
    pub fn set_frame_rate(&mut self, rate: FrameRate) {
        *self = Self::for_frame_rate(rate);
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn largest(&self) -> f64 {
        self.values.last().copied().unwrap_or(1.0)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.values.iter().any(|v| *v == value)
    }

    /// Picks the finest scale whose major spacing leaves `factor` times the
    /// label width between ticks. Falls back to the largest entry.
    pub fn select(&self, zoom_ratio: f64, label_width: f64, factor: f64) -> f64 {
        let needed = label_width * factor;
        self.values
            .iter()
            .copied()
            .find(|scale| zoom_ratio * scale >= needed)
            .unwrap_or_else(|| self.largest())
    }

    /// Selection with the default 1.5x label clearance.
    pub fn select_scale(&self, zoom_ratio: f64, label_width: f64) -> f64 {
        self.select(zoom_ratio, label_width, DEFAULT_LABEL_SPACING_FACTOR)
    }
}
