//! Alternating frame-boundary bands, shown once single frames get wide
//! enough to tell apart.

use crate::time::FrameRate;
use crate::transform::CoordinateMapper;

pub const DEFAULT_MIN_FRAME_SPACING: f64 = 5.0;

/// Hard stop when a tiny minimum spacing lets sub-pixel frames through.
pub const MAX_FRAME_BANDS: u64 = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBand {
    pub frame: u64,
    /// Viewport-relative left edge.
    pub x: f64,
    pub width: f64,
    /// 0 or 1, alternating per frame.
    pub color_index: usize,
}

#[derive(Clone, Debug)]
pub struct FrameBands {
    rate: FrameRate,
    mapper: CoordinateMapper,
    viewport_offset: f64,
    right_edge: f64,
    frame_width: f64,
    frame: u64,
    emitted: u64,
    last_left: f64,
    done: bool,
}

impl FrameBands {
    fn empty(rate: FrameRate, mapper: CoordinateMapper) -> Self {
        Self {
            rate,
            mapper,
            viewport_offset: 0.0,
            right_edge: 0.0,
            frame_width: 0.0,
            frame: 0,
            emitted: 0,
            last_left: f64::NEG_INFINITY,
            done: true,
        }
    }

    pub fn frame_width(&self) -> f64 {
        self.frame_width
    }
}

impl Iterator for FrameBands {
    type Item = FrameBand;

    fn next(&mut self) -> Option<FrameBand> {
        if self.done {
            return None;
        }
        // Absolute position from the frame index, never accumulated.
        let left = self.mapper.time_to_pixel(self.rate.frame_start(self.frame));
        // A band starting on the right edge has no visible column.
        if left >= self.right_edge || left <= self.last_left || self.emitted >= MAX_FRAME_BANDS {
            self.done = true;
            return None;
        }
        let band = FrameBand {
            frame: self.frame,
            x: left - self.viewport_offset,
            width: self.frame_width,
            color_index: ((self.frame + 1) % 2) as usize,
        };
        self.last_left = left;
        self.emitted += 1;
        self.frame += 1;
        Some(band)
    }
}

/// Plans one band per project frame across the viewport.
///
/// Empty when a frame is narrower than `min_frame_spacing` pixels.
pub fn plan_frame_bands(
    rate: FrameRate,
    mapper: CoordinateMapper,
    viewport_offset: f64,
    viewport_width: f64,
    min_frame_spacing: f64,
) -> FrameBands {
    let frame_width = mapper.span_to_pixels(rate.ns_per_frame());
    if !(frame_width >= min_frame_spacing) || !viewport_width.is_finite() {
        let mut bands = FrameBands::empty(rate, mapper);
        bands.frame_width = frame_width;
        return bands;
    }

    let first_frame = rate.frame_at(mapper.pixel_to_time(viewport_offset));
    FrameBands {
        rate,
        mapper,
        viewport_offset,
        right_edge: viewport_offset + viewport_width,
        frame_width,
        frame: first_frame,
        emitted: 0,
        last_left: f64::NEG_INFINITY,
        done: false,
    }
}
