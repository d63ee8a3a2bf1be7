use std::f32::consts::TAU;

use polar_picker::{
    color::Rgba,
    colorwheel::ColorWheel,
    config::{Settings, WheelConfig, MAX_SEGMENTS},
    error::WheelError,
    geometry::Point,
    gradient::GradientPolicy,
    picker::ColorPicker,
};
use proptest::prelude::*;

fn default_wheel() -> ColorWheel {
    ColorWheel::new(WheelConfig::default()).unwrap()
}

#[test]
fn worked_examples() {
    let wheel = default_wheel();

    // center: ring 0, gradient entry 0 is white
    assert_eq!(wheel.hit_test(Point::new(100.0, 100.0)), Some((0, 0)));
    assert_eq!(wheel.select(Point::new(100.0, 100.0), 1.0), Some(Rgba::WHITE));

    // on the rim
    assert_eq!(wheel.select(Point::new(200.0, 100.0), 1.0), None);

    // half way out along angle 0
    assert_eq!(wheel.hit_test(Point::new(150.0, 100.0)), Some((5, 0)));
    let segment = wheel.segment(5, 0).unwrap();
    assert_eq!(segment.hsv().hue, 0.0);
    assert_eq!(segment.hsv().saturation, 0.5);
    assert_eq!(segment.hsv().value, 1.0);
}

#[test]
fn shrinking_radius_rebuilds_every_segment() {
    let mut wheel = default_wheel();
    wheel.set_radius(50.0).unwrap();
    assert_eq!(wheel.segment_count(), 160);
    for segment in wheel.segments() {
        assert!(segment.r_max <= 50.0);
    }
}

#[test]
fn degenerate_configs_are_refused() {
    let cases = [
        (
            WheelConfig {
                ring_count: 0,
                ..WheelConfig::default()
            },
            WheelError::NoRings,
        ),
        (
            WheelConfig {
                piece_count: 0,
                ..WheelConfig::default()
            },
            WheelError::NoPieces,
        ),
        (
            WheelConfig {
                radius: -10.0,
                ..WheelConfig::default()
            },
            WheelError::InvalidRadius(-10.0),
        ),
        (
            WheelConfig {
                ring_count: usize::MAX,
                piece_count: 2,
                ..WheelConfig::default()
            },
            WheelError::TooManySegments {
                rings: usize::MAX,
                pieces: 2,
                max: MAX_SEGMENTS,
            },
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(ColorWheel::new(config), Err(expected));
    }
}

#[test]
fn settings_drive_the_picker() {
    let settings = Settings::from_json(
        r#"{
            "wheel": { "origin": { "x": 0, "y": 0 }, "radius": 10, "ring_count": 2, "piece_count": 4, "gradient": "smooth" },
            "logging": { "enabled": false }
        }"#,
    )
    .unwrap();
    assert_eq!(settings.wheel.gradient, GradientPolicy::Smooth);

    let mut picker = ColorPicker::new(ColorWheel::new(settings.wheel).unwrap());
    assert_eq!(picker.wheel().segment_count(), 8);

    // ring 1 of 2, first quarter: smoothstep(0.5) saturation, hue 0
    let color = picker.touch_up(Point::new(7.0, 1.0)).unwrap();
    assert_eq!(color, Rgba::new(1.0, 0.5, 0.5, 1.0));
    assert_eq!(picker.touch_up(Point::new(10.0, 0.0)), None);
    assert_eq!(picker.color(), color);
}

#[test]
fn deepest_ring_offset_reaches_black() {
    let mut wheel = default_wheel();
    wheel.set_depth(19);
    let color = wheel.select(Point::new(100.0, 100.0), 1.0).unwrap();
    assert_eq!(color, Rgba::new(0.0, 0.0, 0.0, 1.0));
}

proptest! {
    #[test]
    fn inside_always_selects(radius in 0.0f32..99.9, angle in 0.0f32..TAU) {
        let wheel = default_wheel();
        let point = Point::new(100.0, 100.0).offset(radius, angle);
        prop_assert!(wheel.select(point, 1.0).is_some());
    }

    #[test]
    fn outside_never_selects(radius in 100.0f32..1000.0, angle in 0.0f32..TAU) {
        let wheel = default_wheel();
        let point = Point::new(100.0, 100.0).offset(radius + 0.01, angle);
        prop_assert!(wheel.select(point, 1.0).is_none());
    }

    #[test]
    fn hue_is_periodic(
        ring in 0usize..10,
        piece in 0usize..16,
        ring_frac in 0.1f32..0.9,
        piece_frac in 0.1f32..0.9,
    ) {
        let wheel = default_wheel();
        let origin = Point::new(100.0, 100.0);
        let radius = (ring as f32 + ring_frac) * 10.0;
        let angle = (piece as f32 + piece_frac) * TAU / 16.0;
        for turn in [angle, angle + TAU, angle - TAU] {
            prop_assert_eq!(wheel.hit_test(origin.offset(radius, turn)), Some((ring, piece)));
        }
    }

    #[test]
    fn rebuild_is_deterministic(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        radius in 1.0f32..400.0,
        rings in 1usize..12,
        pieces in 1usize..24,
    ) {
        let config = WheelConfig {
            origin: Point::new(x, y),
            radius,
            ring_count: rings,
            piece_count: pieces,
            gradient: GradientPolicy::Linear,
        };
        let first = ColorWheel::new(config).unwrap();
        let second = ColorWheel::new(config).unwrap();
        prop_assert_eq!(first.segment_count(), rings * pieces);
        prop_assert_eq!(first, second);
    }
}
