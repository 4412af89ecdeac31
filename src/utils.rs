pub mod time_formatter;

/// Pixel snapping for 1 px strokes.
pub trait PixelSnap {
    /// Column index covering this x position.
    fn column(&self) -> i64;
}

impl PixelSnap for f64 {
    fn column(&self) -> i64 {
        if self.is_finite() {
            self.floor() as i64
        } else if *self > 0.0 {
            i64::MAX
        } else {
            i64::MIN
        }
    }
}
