use crate::time::{ClockTime, FrameRate};
use crate::transform::CoordinateMapper;
use crate::utils::time_formatter::TimeFormatter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn control() -> Self {
        Self {
            control: true,
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    ZoomIn,
    ZoomOut,
    ScrollLeft,
    ScrollRight,
    None,
}

/// ViewController holds the interaction rules of the ruler (scroll mapping,
/// pointer to time) independently of the host toolkit to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Control + wheel zooms, a plain wheel pans.
    pub fn scroll_action(direction: ScrollDirection, modifiers: Modifiers) -> NavAction {
        if modifiers.control {
            match direction {
                ScrollDirection::Up => NavAction::ZoomIn,
                ScrollDirection::Down => NavAction::ZoomOut,
                ScrollDirection::Left | ScrollDirection::Right => NavAction::None,
            }
        } else {
            match direction {
                ScrollDirection::Up | ScrollDirection::Left => NavAction::ScrollLeft,
                ScrollDirection::Down | ScrollDirection::Right => NavAction::ScrollRight,
            }
        }
    }

    /// Time under a pointer at viewport x.
    pub fn pointer_time(mapper: &CoordinateMapper, x: f64, viewport_offset: f64) -> ClockTime {
        mapper.pixel_to_time(x + viewport_offset)
    }

    /// 1-based number of the frame covering `time`.
    pub fn frame_number(time: ClockTime, rate: FrameRate) -> u64 {
        (time as f64 / rate.ns_per_frame()) as u64 + 1
    }

    pub fn tooltip(formatter: &dyn TimeFormatter, time: ClockTime, rate: FrameRate) -> String {
        format!(
            "{}\nFrame #{}",
            formatter.beautify(time),
            Self::frame_number(time, rate)
        )
    }
}
