use rand::Rng;
use timeline_ruler::frames::{plan_frame_bands, MAX_FRAME_BANDS};
use timeline_ruler::labels::{plan_labels, LabelLayout, MAX_LABELS};
use timeline_ruler::ticks::{plan_ticks, tick_offset, MAX_TICKS_PER_LEVEL, SUBDIVISIONS};
use timeline_ruler::utils::time_formatter::ClockFormatter;
use timeline_ruler::zoom::{MAX_ZOOM, MIN_ZOOM};
use timeline_ruler::{CoordinateMapper, FrameRate, ScaleTemplate};

#[test]
fn test_random_round_trips() {
    let mut rng = rand::rng();
    for _ in 0..10_000 {
        let zoom = rng.random_range(MIN_ZOOM..=MAX_ZOOM);
        let mapper = CoordinateMapper::new(zoom).unwrap();
        let time: u64 = rng.random_range(0..100 * 3600 * 1_000_000_000u64);
        let back = mapper.pixel_to_time(mapper.time_to_pixel(time));
        // One pixel of slack covers float rounding at every zoom level
        let tolerance = (1e9 / zoom) as u64 + 1;
        assert!(back.abs_diff(time) <= tolerance, "zoom {} time {} back {}", zoom, time, back);
    }
}

#[test]
fn test_random_viewports_terminate_and_stay_visible() {
    let mut rng = rand::rng();
    let formatter = ClockFormatter;
    for _ in 0..2_000 {
        let zoom = rng.random_range(MIN_ZOOM..=MAX_ZOOM);
        let mapper = CoordinateMapper::new(zoom).unwrap();
        let rate = FrameRate::new(rng.random_range(1..=120_000), rng.random_range(1..=1001)).unwrap();
        let scales = ScaleTemplate::for_frame_rate(rate);
        let scale = scales.select_scale(zoom, rng.random_range(10.0..120.0));
        let spacing = zoom * scale;
        let viewport_offset = rng.random_range(0.0..1e7);
        let width = rng.random_range(1.0..4000.0);
        let offset = tick_offset(viewport_offset, spacing);
        assert!((0.0..spacing).contains(&offset));

        let plan = plan_ticks(spacing, offset, &SUBDIVISIONS, 3.0, width);
        let ticks: Vec<_> = plan.iter().collect();
        assert!(ticks.len() <= SUBDIVISIONS.len() * MAX_TICKS_PER_LEVEL);
        assert!(ticks.iter().all(|t| t.position < width));

        let layout = LabelLayout {
            spacing,
            offset,
            scale,
            viewport_offset,
            viewport_width: width,
            first_position: 2.0,
        };
        let labels = plan_labels(&layout, &mapper, &formatter);
        assert!(labels.len() <= MAX_LABELS);
        assert!(labels.windows(2).all(|w| w[0].time < w[1].time));

        let bands: Vec<_> = plan_frame_bands(rate, mapper, viewport_offset, width, 5.0).collect();
        assert!(bands.len() as u64 <= MAX_FRAME_BANDS);
        assert!(bands.windows(2).all(|w| w[0].frame + 1 == w[1].frame));
        assert!(bands.iter().all(|b| b.x < width && b.x + b.width > -1e-3));
    }
}
