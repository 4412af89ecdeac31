use timeline_ruler::frames::{plan_frame_bands, FrameBand};
use timeline_ruler::{CoordinateMapper, FrameRate, SECOND};

fn fps30() -> FrameRate {
    FrameRate::new(30, 1).unwrap()
}

#[test]
fn test_bands_shown_when_frames_are_wide() {
    // 30 fps at 180 px/s: one frame is 6px
    let mapper = CoordinateMapper::new(180.0).unwrap();
    let bands: Vec<FrameBand> = plan_frame_bands(fps30(), mapper, 0.0, 800.0, 5.0).collect();
    assert!(!bands.is_empty());
    assert!((bands[0].width - 6.0).abs() < 1e-6);
    assert_eq!(bands[0].frame, 0);
    assert_eq!(bands[0].x, 0.0);
}

#[test]
fn test_bands_hidden_when_frames_are_narrow() {
    // Same rate at 90 px/s: one frame is 3px
    let mapper = CoordinateMapper::new(90.0).unwrap();
    let bands = plan_frame_bands(fps30(), mapper, 0.0, 800.0, 5.0);
    assert!((bands.frame_width() - 3.0).abs() < 1e-6);
    assert_eq!(bands.count(), 0);
}

#[test]
fn test_bands_alternate_two_colors() {
    let mapper = CoordinateMapper::new(300.0).unwrap();
    let bands: Vec<FrameBand> = plan_frame_bands(fps30(), mapper, 1234.0, 640.0, 5.0).collect();
    assert!(bands.len() > 10);
    for pair in bands.windows(2) {
        assert!(pair[0].color_index <= 1);
        assert_ne!(pair[0].color_index, pair[1].color_index);
        assert_eq!(pair[1].frame, pair[0].frame + 1);
    }
    // Even frames use the second color
    let even = bands.iter().find(|b| b.frame % 2 == 0).unwrap();
    assert_eq!(even.color_index, 1);
}

#[test]
fn test_bands_cover_viewport() {
    let mapper = CoordinateMapper::new(250.0).unwrap();
    let (offset, width) = (987.6, 500.0);
    let bands: Vec<FrameBand> = plan_frame_bands(fps30(), mapper, offset, width, 5.0).collect();
    let first = bands.first().unwrap();
    let last = bands.last().unwrap();
    assert!(first.x <= 1e-6);
    assert!(first.x + first.width > 0.0);
    assert!(last.x < width);
    assert!(last.x + last.width >= width - 1e-6);
}

#[test]
fn test_positions_come_from_frame_index() {
    let rate = FrameRate::new(30000, 1001).unwrap();
    let mapper = CoordinateMapper::new(400.0).unwrap();
    // One hour into the timeline
    let offset = mapper.time_to_pixel(3_600 * SECOND);
    for band in plan_frame_bands(rate, mapper, offset, 1920.0, 5.0) {
        let expected = mapper.time_to_pixel(rate.frame_start(band.frame)) - offset;
        assert_eq!(band.x, expected);
    }
}

#[test]
fn test_tiny_minimum_spacing_still_terminates() {
    let mapper = CoordinateMapper::new(0.25).unwrap();
    let count = plan_frame_bands(FrameRate::new(120, 1).unwrap(), mapper, 0.0, 1e12, 0.0).count();
    assert!(count > 0);
    assert!(count <= timeline_ruler::frames::MAX_FRAME_BANDS as usize);
}

#[test]
fn test_band_starting_on_right_edge_is_skipped() {
    let mapper = CoordinateMapper::new(100.0).unwrap();
    let rate = FrameRate::new(1, 1).unwrap();
    let bands: Vec<_> = plan_frame_bands(rate, mapper, 0.0, 200.0, 5.0).collect();
    assert_eq!(bands.iter().map(|b| b.frame).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(bands[1].x, 100.0);
}
