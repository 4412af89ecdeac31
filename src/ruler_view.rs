// RulerRenderer implementation

use crate::buffer::OffscreenBuffer;
use crate::config::RulerConfig;
use crate::error::RulerError;
use crate::host::{ScrollAdjustment, Seeker, TimelineHost};
use crate::redraw::RedrawScheduler;
use crate::scales::ScaleTemplate;
use crate::time::{ClockTime, FrameRate};
use crate::transform::CoordinateMapper;
use crate::utils::time_formatter::{ClockFormatter, TimeFormatter};
use crate::zoom::{SubscriptionId, ZoomController};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

pub mod input;
pub mod renderer;

pub use renderer::RulerGeometry;

/// Lifecycle of the off-screen buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RulerState {
    /// No buffer yet; draw requests are ignored.
    Uncreated,
    /// Buffer allocated at the last configured size, nothing painted.
    Sized,
    /// A redraw was requested and is pending.
    Dirty,
    Painted,
}

/// The time ruler above the timeline tracks.
///
/// Hosts forward resize, scroll, zoom and playhead notifications, poll
/// [`poll_redraw`](Self::poll_redraw) from their event loop and run
/// [`draw`](Self::draw) when it returns `true`.
pub struct RulerRenderer {
    zoom: Arc<dyn ZoomController>,
    /// Set by the zoom listener, consumed by [`poll_redraw`](Self::poll_redraw).
    zoom_changed: Arc<AtomicBool>,
    zoom_subscription: SubscriptionId,
    seeker: Box<dyn Seeker>,
    host: Box<dyn TimelineHost>,
    formatter: Box<dyn TimeFormatter>,
    config: RulerConfig,

    scales: ScaleTemplate,
    frame_rate: FrameRate,

    /// Horizontal scroll offset in pixels, mirrored from the adjustment.
    viewport_offset: f64,
    position: ClockTime,
    pressed: bool,

    buffer: Option<OffscreenBuffer>,
    state: RulerState,
    redraw: RedrawScheduler,
    redraw_now: bool,
}

impl RulerRenderer {
    pub fn new(
        zoom: Arc<dyn ZoomController>,
        seeker: Box<dyn Seeker>,
        host: Box<dyn TimelineHost>,
        config: RulerConfig,
    ) -> Result<Self, RulerError> {
        config.validate()?;
        debug!("Creating new ScaleRuler");
        let frame_rate = FrameRate::default();
        let zoom_changed = Arc::new(AtomicBool::new(false));
        let flag = zoom_changed.clone();
        let zoom_subscription = zoom.subscribe(Arc::new(move |_: f64| flag.store(true, Ordering::Release)));
        Ok(Self {
            zoom,
            zoom_changed,
            zoom_subscription,
            seeker,
            host,
            formatter: Box::new(ClockFormatter),
            redraw: RedrawScheduler::new(config.redraw_delay()),
            config,
            scales: ScaleTemplate::for_frame_rate(frame_rate),
            frame_rate,
            viewport_offset: 0.0,
            position: 0,
            pressed: false,
            buffer: None,
            state: RulerState::Uncreated,
            redraw_now: false,
        })
    }

    pub fn with_formatter(mut self, formatter: Box<dyn TimeFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn state(&self) -> RulerState {
        self.state
    }

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    /// Height the host should allocate for the ruler.
    pub fn requested_height(&self) -> u32 {
        self.config.height
    }

    pub fn scales(&self) -> &ScaleTemplate {
        &self.scales
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    pub fn viewport_offset(&self) -> f64 {
        self.viewport_offset
    }

    pub fn position(&self) -> ClockTime {
        self.position
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn redraw_scheduler(&self) -> &RedrawScheduler {
        &self.redraw
    }

    /// Dimensions of the off-screen buffer, if one exists.
    pub fn buffer_size(&self) -> Option<(u32, u32)> {
        self.buffer.as_ref().map(|b| (b.width(), b.height()))
    }

    pub fn mapper(&self) -> Result<CoordinateMapper, RulerError> {
        CoordinateMapper::new(self.zoom.zoom_ratio())
    }

    /// Replaces the off-screen buffer with one of the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        debug!("Configuring, height {}, width {}", height, width);
        // Destroy previous buffer
        self.buffer = None;
        self.buffer = Some(OffscreenBuffer::new(width, height));
        self.state = RulerState::Sized;
    }

    pub fn on_adjustment_changed(&mut self, adjustment: &dyn ScrollAdjustment, now: Instant) {
        self.set_viewport_offset(adjustment.value(), now);
    }

    pub fn set_viewport_offset(&mut self, offset: f64, now: Instant) {
        self.viewport_offset = offset;
        self.schedule_redraw(now);
    }

    pub fn on_zoom_changed(&mut self, now: Instant) {
        self.zoom_changed.store(false, Ordering::Release);
        self.schedule_redraw(now);
    }

    /// Playhead moves repaint right away, without debounce.
    pub fn on_playhead_moved(&mut self, position: ClockTime) {
        self.position = position;
        self.mark_dirty();
        self.redraw_now = true;
    }

    /// Sets the lowest scales based on the project frame rate.
    pub fn set_project_frame_rate(&mut self, rate: FrameRate, now: Instant) -> Result<(), RulerError> {
        let rate = FrameRate::new(rate.num, rate.den)?;
        debug!(num = rate.num, den = rate.den, "Project frame rate changed");
        self.frame_rate = rate;
        self.scales.set_frame_rate(rate);
        self.schedule_redraw(now);
        Ok(())
    }

    /// Whether the host should run a draw cycle now. Zoom changes made
    /// through other handles are picked up here and debounced.
    pub fn poll_redraw(&mut self, now: Instant) -> bool {
        if self.zoom_changed.swap(false, Ordering::AcqRel) {
            debug!("Zoom changed elsewhere");
            self.schedule_redraw(now);
        }
        let timer = self.redraw.poll(now);
        if std::mem::take(&mut self.redraw_now) {
            return true;
        }
        timer
    }

    /// Explicitly cancels a pending debounced redraw.
    pub fn cancel_pending_redraw(&mut self) -> bool {
        self.redraw.cancel()
    }

    fn schedule_redraw(&mut self, now: Instant) {
        self.redraw.schedule(now);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        match self.state {
            RulerState::Uncreated => trace!("Redraw requested before first resize"),
            _ => self.state = RulerState::Dirty,
        }
    }
}

impl Drop for RulerRenderer {
    fn drop(&mut self) {
        self.zoom.unsubscribe(self.zoom_subscription);
    }
}
