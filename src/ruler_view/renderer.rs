use super::{RulerRenderer, RulerState};
use crate::buffer::OffscreenBuffer;
use crate::error::RulerError;
use crate::frames::plan_frame_bands;
use crate::host::{Surface, TextPainter};
use crate::labels::{plan_labels, LabelLayout};
use crate::ticks::{plan_ticks, tick_offset, SUBDIVISIONS};
use crate::time::CLOCK_TIME_NONE;
use crate::transform::CoordinateMapper;
use crate::utils::PixelSnap;
use glam::DVec2;
use tracing::{info, trace};

/// Geometry of one draw pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerGeometry {
    pub mapper: CoordinateMapper,
    /// Seconds per major tick.
    pub scale: f64,
    /// Pixels between major ticks.
    pub spacing: f64,
    /// Phase of the major grid in `[0, spacing)`.
    pub offset: f64,
    pub width: f64,
    pub height: f64,
}

impl RulerRenderer {
    /// Scale selection for a label of `label_width` pixels.
    pub fn geometry(&self, label_width: f64, width: f64, height: f64) -> Result<RulerGeometry, RulerError> {
        let mapper = self.mapper()?;
        let zoom = mapper.zoom_ratio();
        let scale = self
            .scales
            .select(zoom, label_width, self.config.label_spacing_factor);
        let spacing = zoom * scale;
        Ok(RulerGeometry {
            mapper,
            scale,
            spacing,
            offset: tick_offset(self.viewport_offset, spacing),
            width,
            height,
        })
    }

    /// Paints the ruler into the off-screen buffer and copies it to the
    /// surface. Returns `false` when there is no buffer yet.
    pub fn draw(&mut self, text: &mut dyn TextPainter, surface: &mut dyn Surface) -> Result<bool, RulerError> {
        let Some(mut buffer) = self.buffer.take() else {
            info!("No buffer to paint");
            return Ok(false);
        };

        let sample = self.formatter.format(0);
        let geometry = self.geometry(
            text.text_width(&sample),
            buffer.width() as f64,
            buffer.height() as f64,
        );
        let geometry = match geometry {
            Ok(g) => g,
            Err(e) => {
                self.buffer = Some(buffer);
                return Err(e);
            }
        };
        trace!(?geometry, "Painting ruler");

        self.draw_background(&mut buffer);
        self.draw_ticks(&mut buffer, &geometry);
        self.draw_times(&mut buffer, text, &geometry);
        self.draw_frame_boundaries(&mut buffer, &geometry);
        self.draw_position(&mut buffer, &geometry);

        surface.blit(&buffer);
        self.buffer = Some(buffer);
        self.state = RulerState::Painted;
        Ok(true)
    }

    fn draw_background(&self, buffer: &mut OffscreenBuffer) {
        buffer.clear(self.config.colors.background);
    }

    fn draw_ticks(&self, buffer: &mut OffscreenBuffer, g: &RulerGeometry) {
        let color = self.config.colors.foreground;
        let plan = plan_ticks(
            g.spacing,
            g.offset,
            &SUBDIVISIONS,
            self.config.min_tick_spacing,
            g.width,
        );
        for tick in &plan {
            let top = (g.height * (1.0 - tick.height)).floor();
            buffer.vline(tick.position, top, g.height, 1.0, color);
        }
    }

    fn draw_times(&self, buffer: &mut OffscreenBuffer, text: &mut dyn TextPainter, g: &RulerGeometry) {
        let layout = LabelLayout {
            spacing: g.spacing,
            offset: g.offset,
            scale: g.scale,
            viewport_offset: self.viewport_offset,
            viewport_width: g.width,
            first_position: self.config.border + self.config.label_padding,
        };
        let color = self.config.colors.foreground;
        let baseline = 1.0 - text.y_bearing("0");
        for label in plan_labels(&layout, &g.mapper, &*self.formatter) {
            text.draw_text(buffer, label.position.column() as f64, baseline, &label.text, color);
        }
    }

    /// Alternating rectangles for the project frames at high zoom levels.
    /// Based on the project frame rate, not on codec frames.
    fn draw_frame_boundaries(&self, buffer: &mut OffscreenBuffer, g: &RulerGeometry) {
        let bands = plan_frame_bands(
            self.frame_rate,
            g.mapper,
            self.viewport_offset,
            g.width,
            self.config.min_frame_spacing,
        );
        let y = (g.height - self.config.frame_height).floor();
        for band in bands {
            buffer.fill_rect(
                DVec2::new(band.x + 0.5, y),
                DVec2::new(band.width, g.height - y),
                self.config.colors.band(band.color_index),
            );
        }
    }

    fn draw_position(&self, buffer: &mut OffscreenBuffer, g: &RulerGeometry) {
        if self.position == CLOCK_TIME_NONE {
            return;
        }
        let line_width = self.config.playhead_width;
        let x = g.mapper.time_to_pixel(self.position) + self.config.border - self.viewport_offset;
        if x + line_width < 0.0 || x - line_width > g.width {
            return;
        }
        buffer.vline(x - line_width / 2.0, 0.0, g.height, line_width, self.config.colors.playhead);
    }
}
