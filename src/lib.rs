//! timeline_ruler crate: time ruler geometry and painting for timelines

pub mod buffer;
pub mod config;
pub mod error;
pub mod frames;
pub mod host;
pub mod labels;
pub mod redraw;
pub mod ruler_view;
pub mod scales;
pub mod theme;
pub mod ticks;
pub mod time;
pub mod transform;
pub mod utils;
pub mod view_controller;
pub mod zoom;

pub use config::RulerConfig;
pub use error::RulerError;
pub use ruler_view::{RulerRenderer, RulerState};
pub use scales::ScaleTemplate;
pub use theme::{Color, ColorScheme};
pub use time::{ClockTime, FrameRate, CLOCK_TIME_NONE, SECOND};
pub use transform::CoordinateMapper;
pub use zoom::{ZoomController, ZoomHandle, ZoomState};
