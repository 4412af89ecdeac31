use crate::error::RulerError;
use crate::frames::DEFAULT_MIN_FRAME_SPACING;
use crate::labels::DEFAULT_LABEL_PADDING;
use crate::scales::DEFAULT_LABEL_SPACING_FACTOR;
use crate::theme::ColorScheme;
use crate::ticks::DEFAULT_MIN_TICK_SPACING;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    pub min_tick_spacing: f64,
    pub min_frame_spacing: f64,
    /// Height of the frame band strip at the bottom of the ruler.
    pub frame_height: f64,
    pub border: f64,
    pub label_padding: f64,
    pub label_spacing_factor: f64,
    pub redraw_delay_ms: u64,
    /// Requested widget height.
    pub height: u32,
    pub playhead_width: f64,
    pub colors: ColorScheme,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            min_tick_spacing: DEFAULT_MIN_TICK_SPACING,
            min_frame_spacing: DEFAULT_MIN_FRAME_SPACING,
            frame_height: 5.0,
            border: 0.0,
            label_padding: DEFAULT_LABEL_PADDING,
            label_spacing_factor: DEFAULT_LABEL_SPACING_FACTOR,
            redraw_delay_ms: 100,
            height: 25,
            playhead_width: 1.5,
            colors: ColorScheme::default(),
        }
    }
}

impl RulerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RulerConfig =
            serde_json::from_str(json).wrap_err("failed to parse ruler configuration")?;
        config.validate().wrap_err("rejected ruler configuration")?;
        Ok(config)
    }

    pub fn redraw_delay(&self) -> Duration {
        Duration::from_millis(self.redraw_delay_ms)
    }

    pub fn validate(&self) -> Result<(), RulerError> {
        let positive = [
            ("min_tick_spacing", self.min_tick_spacing),
            ("min_frame_spacing", self.min_frame_spacing),
            ("frame_height", self.frame_height),
            ("label_spacing_factor", self.label_spacing_factor),
            ("playhead_width", self.playhead_width),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(RulerError::InvalidConfig(format!("{name} must be > 0, got {value}")));
            }
        }
        for (name, value) in [("border", self.border), ("label_padding", self.label_padding)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RulerError::InvalidConfig(format!("{name} must be >= 0, got {value}")));
            }
        }
        if self.redraw_delay_ms == 0 {
            return Err(RulerError::InvalidConfig("redraw_delay_ms must be > 0".into()));
        }
        if self.height == 0 {
            return Err(RulerError::InvalidConfig("height must be > 0".into()));
        }
        Ok(())
    }
}
