//! Clock time primitives shared by every planner.

use crate::error::RulerError;
use serde::{Deserialize, Serialize};

/// Time position or duration in nanoseconds.
pub type ClockTime = u64;

pub const MSECOND: ClockTime = 1_000_000;
pub const SECOND: ClockTime = 1_000_000_000;

/// Sentinel for "no time", mirrors the media framework convention.
pub const CLOCK_TIME_NONE: ClockTime = u64::MAX;

/// Project frame rate as a rational number of frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    pub num: u32,
    pub den: u32,
}

impl Default for FrameRate {
    fn default() -> Self {
        Self { num: 1, den: 1 }
    }
}

impl FrameRate {
    pub fn new(num: u32, den: u32) -> Result<Self, RulerError> {
        if num == 0 || den == 0 {
            return Err(RulerError::InvalidFrameRate { num, den });
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Duration of one frame, fractional nanoseconds.
    pub fn ns_per_frame(&self) -> f64 {
        SECOND as f64 * self.den as f64 / self.num as f64
    }

    /// Exact start time of a frame. Integer math keeps frame N independent
    /// of the rounding of frames 0..N.
    pub fn frame_start(&self, index: u64) -> ClockTime {
        let t = index as u128 * SECOND as u128 * self.den as u128 / self.num as u128;
        t.min(CLOCK_TIME_NONE as u128 - 1) as ClockTime
    }

    /// Index of the frame covering `time` (floor).
    pub fn frame_at(&self, time: ClockTime) -> u64 {
        let frames = time as u128 * self.num as u128 / (SECOND as u128 * self.den as u128);
        frames.min(u64::MAX as u128) as u64
    }
}
