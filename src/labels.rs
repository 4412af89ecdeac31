use crate::time::{ClockTime, SECOND};
use crate::transform::CoordinateMapper;
use crate::utils::time_formatter::TimeFormatter;

/// Distance between a major tick and the start of its label.
pub const DEFAULT_LABEL_PADDING: f64 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Viewport-relative x of the text origin.
    pub position: f64,
    pub time: ClockTime,
    pub text: String,
}

/// Hard stop for degenerate spacings.
pub const MAX_LABELS: usize = 4096;

/// Major tick interval in nanoseconds for a scale in seconds.
pub fn scale_interval(scale: f64) -> ClockTime {
    ((scale * SECOND as f64).round() as ClockTime).max(1)
}

/// Geometry shared by every label of one draw pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    pub spacing: f64,
    /// Phase of the major grid, see [`crate::ticks::tick_offset`].
    pub offset: f64,
    pub scale: f64,
    pub viewport_offset: f64,
    pub viewport_width: f64,
    /// x of the first label when the grid is aligned (border + padding).
    pub first_position: f64,
}

/// Time and position of the first label. A partially visible first tick
/// keeps no label; the sequence starts at the next whole interval.
pub fn first_label(layout: &LabelLayout, mapper: &CoordinateMapper) -> (ClockTime, f64) {
    let interval = scale_interval(layout.scale);
    let time = mapper.pixel_to_time(layout.viewport_offset);
    if layout.offset > 0.0 {
        let snapped = (time - time % interval).saturating_add(interval);
        (snapped, layout.first_position + layout.spacing - layout.offset)
    } else {
        // Aligned: the viewport edge sits on a tick; absorb float noise.
        let nearest = time.saturating_add(interval / 2) / interval * interval;
        (nearest, layout.first_position)
    }
}

/// Positions and texts of the time labels, one per major tick.
pub fn plan_labels(
    layout: &LabelLayout,
    mapper: &CoordinateMapper,
    formatter: &dyn TimeFormatter,
) -> Vec<Label> {
    let mut labels = Vec::new();
    if layout.spacing <= 0.0 || !layout.spacing.is_finite() || !layout.viewport_width.is_finite() {
        return labels;
    }

    let interval = scale_interval(layout.scale);
    let (mut time, mut position) = first_label(layout, mapper);
    while position < layout.viewport_width {
        if position + layout.spacing <= position || labels.len() >= MAX_LABELS {
            break;
        }
        labels.push(Label {
            position,
            time,
            text: formatter.format(time),
        });
        position += layout.spacing;
        time = time.saturating_add(interval);
    }
    labels
}
