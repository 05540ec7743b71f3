//! Integration tests: ClockFace render pass through a recording surface.

use std::time::Instant;

use clockface::face::angles::{HandAngles, HourHand};
use clockface::face::geometry::DialGeometry;
use clockface::face::scale::{TickKind, TICK_COUNT};
use clockface::face::style::{ClockStyle, ColorOverrides, Rgb};
use clockface::face::time::{FixedClock, TimeSample, WallTime};
use clockface::face::ClockFace;
use clockface::surface::recording::{DrawCommand, RecordingSurface};
use proptest::prelude::*;

fn face_at(h: u32, m: u32, s: u32) -> ClockFace {
    let mut face = ClockFace::new(ClockStyle::default(), FixedClock(WallTime::new(h, m, s).unwrap()));
    face.measure(1000.0);
    face
}

fn draw(face: &mut ClockFace) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    face.draw(&mut surface, Instant::now());
    surface
}

/// The element drawn inside each save/rotate/.../restore block, with its rotation.
fn rotated_elements(surface: &RecordingSurface) -> Vec<(f64, (f64, f64), DrawCommand)> {
    let mut out = Vec::new();
    let cmds = &surface.commands;
    let mut i = 0;
    while i < cmds.len() {
        if let (DrawCommand::Save, Some(DrawCommand::Rotate { deg, pivot_x, pivot_y })) = (&cmds[i], cmds.get(i + 1)) {
            out.push((*deg, (*pivot_x, *pivot_y), cmds[i + 2].clone()));
            assert_eq!(cmds[i + 3], DrawCommand::Restore);
            i += 4;
        } else {
            i += 1;
        }
    }
    out
}

#[test]
fn test_draw_order_and_count() {
    let mut face = face_at(0, 0, 0);
    let surface = draw(&mut face);

    // ring + 12 numerals + 60 ticks + 3 hands, each rotated element scoped
    assert_eq!(surface.commands.len(), 1 + (12 + TICK_COUNT + 3) * 4);
    assert!(matches!(surface.commands[0], DrawCommand::Circle { .. }));
    assert_eq!(surface.open_states(), 0);
    assert_eq!(surface.lines().count(), TICK_COUNT + 3);

    let elements = rotated_elements(&surface);
    assert_eq!(elements.len(), 12 + TICK_COUNT + 3);
    assert!(elements[..12].iter().all(|(_, _, c)| matches!(c, DrawCommand::Text { .. })));
    assert!(elements[12..].iter().all(|(_, _, c)| matches!(c, DrawCommand::Line { .. })));
}

#[test]
fn test_every_rotation_pivots_on_dial_center() {
    let mut face = face_at(9, 41, 17);
    let surface = draw(&mut face);
    for (_, pivot, _) in rotated_elements(&surface) {
        assert_eq!(pivot, (500.0, 500.0));
    }
}

#[test]
fn test_midnight_hands_point_up() {
    let mut face = face_at(0, 0, 0);
    let surface = draw(&mut face);
    let style = face.style().clone();
    let hands = &rotated_elements(&surface)[12 + TICK_COUNT..];

    let expected = [(300.0, style.hour), (220.0, style.minute), (200.0, style.second)];
    for ((deg, _, cmd), (tip_y, hand_style)) in hands.iter().zip(expected) {
        assert_eq!(*deg, 0.0);
        assert_eq!(
            *cmd,
            DrawCommand::Line { x1: 500.0, y1: 500.0, x2: 500.0, y2: tip_y, style: hand_style }
        );
    }
}

#[test]
fn test_hand_rotations_follow_time() {
    let mut face = face_at(13, 30, 45);
    let surface = draw(&mut face);
    let degs: Vec<f64> = rotated_elements(&surface)[12 + TICK_COUNT..]
        .iter()
        .map(|(deg, _, _)| *deg)
        .collect();
    assert_eq!(degs, vec![30.0, 180.0, 270.0]);
}

#[test]
fn test_numerals_placed_by_rotation() {
    let mut face = face_at(0, 0, 0);
    let surface = draw(&mut face);
    let numerals = &rotated_elements(&surface)[..12];

    let labels: Vec<&str> = surface.texts().collect();
    assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]);

    // baseline at margin + big scale length + text size, centred on x
    let (deg, _, first) = &numerals[0];
    assert_eq!(*deg, 30.0);
    assert!(matches!(first, DrawCommand::Text { x, y, .. } if *x == 485.0 && *y == 190.0));
    let (deg, _, tenth) = &numerals[9];
    assert_eq!(*deg, 300.0);
    assert!(matches!(tenth, DrawCommand::Text { x, .. } if *x == 470.0));
}

#[test]
fn test_scale_styles_and_lengths() {
    let mut face = face_at(0, 0, 0);
    let surface = draw(&mut face);
    let style = face.style().clone();
    let ticks = &rotated_elements(&surface)[12..12 + TICK_COUNT];

    for (i, (deg, _, cmd)) in ticks.iter().enumerate() {
        assert_eq!(*deg, i as f64 * 6.0);
        let DrawCommand::Line { y1, y2, style: tick_style, .. } = cmd else {
            panic!("tick {} is not a line", i);
        };
        match TickKind::classify(i) {
            TickKind::Emphasis => {
                assert_eq!(*tick_style, style.second);
                assert_eq!((*y1, *y2), (106.5, 140.0));
            }
            TickKind::Major => {
                assert_eq!(*tick_style, style.big_scale);
                assert_eq!((*y1, *y2), (106.5, 140.0));
            }
            TickKind::Minor => {
                assert_eq!(*tick_style, style.small_scale);
                assert_eq!((*y1, *y2), (108.0, 120.0));
            }
        }
    }
}

#[test]
fn test_color_overrides_reach_draw_commands() {
    let colors = ColorOverrides {
        ring_color: Some(Rgb(1, 1, 1)),
        text_color: Some(Rgb(2, 2, 2)),
        ..Default::default()
    };
    let mut face = ClockFace::new(
        ClockStyle::from_overrides(&colors),
        FixedClock(WallTime::new(0, 0, 0).unwrap()),
    );
    face.measure(1000.0);
    let surface = draw(&mut face);
    assert!(matches!(surface.commands[0], DrawCommand::Circle { style, .. } if style.color == Rgb(1, 1, 1)));
    assert!(surface.commands.iter().any(
        |c| matches!(c, DrawCommand::Text { style, .. } if style.color == Rgb(2, 2, 2))
    ));
}

#[test]
fn test_relayout_on_new_width() {
    let mut face = face_at(0, 0, 0);
    assert_eq!(face.measure(600.0), (600.0, 600.0));
    let surface = draw(&mut face);
    assert_eq!(
        surface.commands[0],
        DrawCommand::Circle { cx: 300.0, cy: 300.0, radius: 200.0, style: face.style().ring }
    );
}

#[test]
fn test_degenerate_width_draws_nothing() {
    let mut face = face_at(0, 0, 0);
    assert_eq!(face.measure(120.0), (200.0, 200.0));
    let surface = draw(&mut face);
    assert!(surface.commands.is_empty());
}

proptest! {
    #[test]
    fn prop_layout(width in 200.0f64..5000.0) {
        let g = DialGeometry::layout(width, 100.0);
        prop_assert!(g.radius >= 0.0);
        prop_assert_eq!(g.radius, width / 2.0 - 100.0);
        prop_assert_eq!(g.center_x, width / 2.0);
        prop_assert_eq!(g.center_y, g.radius + 100.0);
        prop_assert_eq!(g.desired_size(), (width, 2.0 * g.center_y));
        prop_assert_eq!(g, DialGeometry::layout(width, 100.0));
    }

    #[test]
    fn prop_angles(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let sample = TimeSample::from_wall_time(WallTime::new(h, m, s).unwrap());
        let angles = HandAngles::from_sample(&sample, HourHand::Stepped);
        prop_assert_eq!(angles.hour_deg, f64::from(h % 12) * 30.0);
        prop_assert_eq!(angles.minute_deg, f64::from(m) * 6.0);
        prop_assert_eq!(angles.second_deg, f64::from(s) * 6.0);
        prop_assert_eq!(angles, HandAngles::from_sample(&sample, HourHand::Stepped));
    }

    #[test]
    fn prop_tick_classification(i in 0usize..60) {
        let kind = TickKind::classify(i);
        prop_assert_eq!(kind != TickKind::Minor, i % 5 == 0);
        prop_assert_eq!(kind == TickKind::Emphasis, i % 15 == 0);
    }
}
