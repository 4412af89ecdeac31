use super::RulerRenderer;
use crate::view_controller::{Modifiers, NavAction, ScrollDirection, ViewController};
use std::time::Instant;
use tracing::{debug, warn};

impl RulerRenderer {
    /// Seeks to the pressed position. Always consumes the event.
    pub fn handle_button_press(&mut self, x: f64) -> bool {
        debug!("button pressed at x:{}", x);
        self.pressed = true;
        match self.mapper() {
            Ok(mapper) => {
                let position = ViewController::pointer_time(&mapper, x, self.viewport_offset);
                self.seeker.seek(position, true);
            }
            Err(e) => warn!("Cannot seek from ruler: {}", e),
        }
        true
    }

    pub fn handle_button_release(&mut self, x: f64) -> bool {
        debug!("button released at x:{}", x);
        // Prevent other widgets from being confused
        self.host.grab_focus();
        self.pressed = false;
        false
    }

    /// Drag-seeks while pressed and refreshes the position tooltip.
    pub fn handle_motion(&mut self, x: f64) -> bool {
        let mapper = match self.mapper() {
            Ok(mapper) => mapper,
            Err(e) => {
                warn!("Ignoring motion: {}", e);
                return false;
            }
        };
        let position = ViewController::pointer_time(&mapper, x, self.viewport_offset);
        if self.pressed {
            debug!("motion at x:{}", x);
            self.seeker.seek(position, true);
        }
        let tooltip = ViewController::tooltip(&*self.formatter, position, self.frame_rate);
        self.host.set_tooltip(&tooltip);
        false
    }

    /// Control + wheel zooms, a plain wheel scrolls the timeline.
    pub fn handle_scroll(&mut self, direction: ScrollDirection, modifiers: Modifiers, now: Instant) -> bool {
        match ViewController::scroll_action(direction, modifiers) {
            NavAction::ZoomIn => {
                self.zoom.zoom_in();
                self.host.set_zoomed_fitted(false);
                self.on_zoom_changed(now);
            }
            NavAction::ZoomOut => {
                self.zoom.zoom_out();
                self.host.set_zoomed_fitted(false);
                self.on_zoom_changed(now);
            }
            NavAction::ScrollLeft => self.host.scroll_left(),
            NavAction::ScrollRight => self.host.scroll_right(),
            NavAction::None => return false,
        }
        true
    }

    pub fn handle_focus_in(&mut self) {
        debug!("Ruler has grabbed focus");
        self.host.set_actions_sensitivity(true);
    }

    pub fn handle_focus_out(&mut self) {
        debug!("Ruler has lost focus");
        self.host.set_actions_sensitivity(false);
    }
}
