//! Interfaces of the widget host the ruler is embedded in.

use crate::buffer::OffscreenBuffer;
use crate::theme::Color;
use crate::time::ClockTime;

/// Forwards seek requests to the pipeline. Fire and forget.
pub trait Seeker {
    fn seek(&self, position: ClockTime, on_idle: bool);
}

/// Horizontal scrollbar adjustment; the ruler mirrors its value.
pub trait ScrollAdjustment {
    fn value(&self) -> f64;
}

/// Timeline-level actions the ruler triggers.
pub trait TimelineHost {
    fn scroll_left(&self);
    fn scroll_right(&self);
    /// Cleared whenever the user zooms by hand.
    fn set_zoomed_fitted(&self, fitted: bool);
    fn set_actions_sensitivity(&self, sensitive: bool);
    fn set_tooltip(&self, text: &str);
    fn grab_focus(&self);
}

/// Text shaping is provided by the host toolkit.
pub trait TextPainter {
    fn text_width(&self, text: &str) -> f64;
    /// Vertical offset from the baseline to the top of the glyphs (negative).
    fn y_bearing(&self, text: &str) -> f64;
    fn draw_text(&mut self, buffer: &mut OffscreenBuffer, x: f64, baseline: f64, text: &str, color: Color);
}

/// The visible widget surface the off-screen buffer is copied to.
pub trait Surface {
    fn blit(&mut self, buffer: &OffscreenBuffer);
}
