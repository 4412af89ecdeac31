//! Process-wide zoom state shared by the timeline widgets.

use crate::error::RulerError;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 1000.0;
pub const ZOOM_STEPS: u32 = 100;
pub const DEFAULT_ZOOM_LEVEL: u32 = 20;

/// Zoom interface the ruler reads and drives.
pub trait ZoomController: Send + Sync {
    /// Pixels per second.
    fn zoom_ratio(&self) -> f64;
    fn zoom_in(&self);
    fn zoom_out(&self);
    /// Registers a callback run with the new ratio after every change.
    fn subscribe(&self, listener: ZoomListener) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type ZoomListener = Arc<dyn Fn(f64) + Send + Sync>;

/// Stepped cubic zoom: fine control near the minimum, fast growth at the top.
pub struct ZoomState {
    level: u32,
    ratio: f64,
    next_id: u64,
    listeners: Vec<(SubscriptionId, ZoomListener)>,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ZoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomState")
            .field("level", &self.level)
            .field("ratio", &self.ratio)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ZoomState {
    pub fn new() -> Self {
        Self {
            level: DEFAULT_ZOOM_LEVEL,
            ratio: Self::compute_zoom_ratio(DEFAULT_ZOOM_LEVEL),
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn compute_zoom_ratio(level: u32) -> f64 {
        let x = level as f64 / ZOOM_STEPS as f64;
        x.powi(3) * (MAX_ZOOM - MIN_ZOOM) + MIN_ZOOM
    }

    pub fn compute_zoom_level(ratio: f64) -> u32 {
        let x = ((ratio - MIN_ZOOM).max(0.0) / (MAX_ZOOM - MIN_ZOOM)).cbrt();
        ((x * ZOOM_STEPS as f64) as u32).min(ZOOM_STEPS)
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Sets the ratio directly. Non-positive ratios are rejected; valid ones
    /// are clamped into the supported range. Returns whether the ratio changed.
    pub fn set_zoom_ratio(&mut self, ratio: f64) -> Result<bool, RulerError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(RulerError::InvalidZoomRatio(ratio));
        }
        let ratio = ratio.clamp(MIN_ZOOM, MAX_ZOOM);
        if ratio == self.ratio {
            return Ok(false);
        }
        debug!(ratio, "Zoom ratio changed");
        self.ratio = ratio;
        self.level = Self::compute_zoom_level(ratio);
        Ok(true)
    }

    pub fn set_zoom_level(&mut self, level: u32) -> bool {
        let level = level.min(ZOOM_STEPS);
        if level == self.level {
            return false;
        }
        self.level = level;
        let ratio = Self::compute_zoom_ratio(level);
        let changed = ratio != self.ratio;
        self.ratio = ratio;
        changed
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom_level(self.level.saturating_add(1))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom_level(self.level.saturating_sub(1))
    }

    pub fn subscribe(&mut self, listener: ZoomListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        before != self.listeners.len()
    }

    /// Snapshot of the registered callbacks.
    pub fn listeners(&self) -> Vec<ZoomListener> {
        self.listeners.iter().map(|(_, l)| l.clone()).collect()
    }
}

/// Cloneable shared handle on one [`ZoomState`].
#[derive(Clone, Debug, Default)]
pub struct ZoomHandle {
    state: Arc<RwLock<ZoomState>>,
}

impl ZoomHandle {
    pub fn new(state: ZoomState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub fn set_zoom_ratio(&self, ratio: f64) -> Result<(), RulerError> {
        self.update(|state| state.set_zoom_ratio(ratio))
    }

    pub fn set_zoom_level(&self, level: u32) {
        // Infallible
        let _ = self.update(|state| Ok(state.set_zoom_level(level)));
    }

    pub fn level(&self) -> u32 {
        self.state.read().level()
    }

    pub fn listener_count(&self) -> usize {
        self.state.read().listeners.len()
    }

    /// Applies `change` under the write lock, then runs the listeners with
    /// the lock released so they may read the handle.
    fn update(&self, change: impl FnOnce(&mut ZoomState) -> Result<bool, RulerError>) -> Result<(), RulerError> {
        let (ratio, listeners) = {
            let mut state = self.state.write();
            if !change(&mut *state)? {
                return Ok(());
            }
            (state.ratio(), state.listeners())
        };
        trace!(count = listeners.len(), "Notifying zoom listeners");
        for listener in listeners {
            listener(ratio);
        }
        Ok(())
    }
}

impl ZoomController for ZoomHandle {
    fn zoom_ratio(&self) -> f64 {
        self.state.read().ratio()
    }

    fn zoom_in(&self) {
        let _ = self.update(|state| Ok(state.zoom_in()));
    }

    fn zoom_out(&self) {
        let _ = self.update(|state| Ok(state.zoom_out()));
    }

    fn subscribe(&self, listener: ZoomListener) -> SubscriptionId {
        self.state.write().subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.write().unsubscribe(id)
    }
}
