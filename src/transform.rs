//! Transform helper for pixel <-> time projection

use crate::error::RulerError;
use crate::time::{ClockTime, CLOCK_TIME_NONE, SECOND};

/// Pixel position reported for [`CLOCK_TIME_NONE`]. Always left of any
/// drawable column.
pub const NONE_PIXEL: f64 = -1.0;

/// Maps nanosecond timestamps onto the horizontal pixel axis.
///
/// `zoom_ratio` is expressed in pixels per second. Pixel values are absolute
/// (content space); callers subtract the viewport offset themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    zoom_ratio: f64,
}

impl CoordinateMapper {
    pub fn new(zoom_ratio: f64) -> Result<Self, RulerError> {
        if !zoom_ratio.is_finite() || zoom_ratio <= 0.0 {
            return Err(RulerError::InvalidZoomRatio(zoom_ratio));
        }
        Ok(Self { zoom_ratio })
    }

    pub fn zoom_ratio(&self) -> f64 {
        self.zoom_ratio
    }

    pub fn time_to_pixel(&self, time: ClockTime) -> f64 {
        if time == CLOCK_TIME_NONE {
            return NONE_PIXEL;
        }
        self.span_to_pixels(time as f64)
    }

    /// Width in pixels of a (possibly fractional) nanosecond span.
    pub fn span_to_pixels(&self, nanos: f64) -> f64 {
        nanos * self.zoom_ratio / SECOND as f64
    }

    /// Inverse of [`time_to_pixel`](Self::time_to_pixel). Negative pixels
    /// saturate to time zero.
    pub fn pixel_to_time(&self, pixel: f64) -> ClockTime {
        let nanos = pixel * SECOND as f64 / self.zoom_ratio;
        if nanos.is_nan() || nanos <= 0.0 {
            return 0;
        }
        // `as` saturates; stay clear of the sentinel.
        (nanos as ClockTime).min(CLOCK_TIME_NONE - 1)
    }
}
