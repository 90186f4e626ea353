use super::*;
use kurbo::PathEl;

fn points(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .filter_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
            _ => None,
        })
        .collect()
}

#[test]
fn identical_inputs_are_identical_paths() {
    let params = WaveParams::default();
    let a = wavy_rect(0.0, 120.0, 600.0, 1.25, Side::Left, &params);
    let b = wavy_rect(0.0, 120.0, 600.0, 1.25, Side::Left, &params);
    assert_eq!(a.to_svg(), b.to_svg());
    assert_eq!(a.elements(), b.elements());
}

#[test]
fn outer_edge_is_straight_and_closed() {
    let params = WaveParams::default();
    let path = wavy_rect(0.0, 100.0, 500.0, 0.3, Side::Left, &params);
    let pts = points(&path);
    assert_eq!(pts.first().copied(), Some(Point::new(0.0, 0.0)));
    assert_eq!(pts.last().copied(), Some(Point::new(0.0, 500.0)));
    assert_eq!(path.elements().last(), Some(&PathEl::ClosePath));
    // move + (segments + 1) wave samples + closing corner
    assert_eq!(pts.len(), params.segments as usize + 3);
}

#[test]
fn wave_stays_within_amplitude_of_extent() {
    let params = WaveParams::default();
    let path = wavy_rect(0.0, 100.0, 500.0, 2.0, Side::Left, &params);
    let pts = points(&path);
    for p in &pts[1..pts.len() - 1] {
        assert!(p.x >= 100.0 - params.amplitude - 1e-9);
        assert!(p.x <= 100.0 + params.amplitude + 1e-9);
    }
}

#[test]
fn small_phase_change_is_small_lateral_shift() {
    let params = WaveParams::default();
    let eps = 1e-3;
    let a = points(&wavy_rect(0.0, 100.0, 500.0, 0.7, Side::Left, &params));
    let b = points(&wavy_rect(0.0, 100.0, 500.0, 0.7 + eps, Side::Left, &params));
    assert_eq!(a.len(), b.len());
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.y, pb.y);
        assert!((pa.x - pb.x).abs() <= params.amplitude * eps + 1e-9);
    }
}

#[test]
fn right_side_mirrors_left_side() {
    let params = WaveParams::default();
    let width = 1000.0;
    let left = points(&wavy_rect(0.0, 150.0, 400.0, 1.0, Side::Left, &params));
    let right = points(&wavy_rect(width, 150.0, 400.0, 1.0, Side::Right, &params));
    for (l, r) in left.iter().zip(&right) {
        assert!((l.x - (width - r.x)).abs() < 1e-9);
        assert_eq!(l.y, r.y);
    }
}

#[test]
fn full_turn_of_phase_is_invisible() {
    let params = WaveParams::default();
    let a = points(&wavy_rect(0.0, 80.0, 300.0, 0.4, Side::Right, &params));
    let b = points(&wavy_rect(
        0.0,
        80.0,
        300.0,
        0.4 + std::f64::consts::TAU,
        Side::Right,
        &params,
    ));
    for (pa, pb) in a.iter().zip(&b) {
        assert!((pa.x - pb.x).abs() < 1e-9);
    }
}

#[test]
fn validate_enforces_minimum_segments() {
    let params = WaveParams {
        segments: 12,
        ..WaveParams::default()
    };
    assert!(params.validate().is_err());
    assert!(WaveParams::default().validate().is_ok());
}

#[test]
fn narrow_shapes_never_cross_their_outer_edge() {
    // 100 px viewport: unit 10, slot 1 bottoms out at 8.5, well under the 15 px amplitude.
    let params = WaveParams::default();
    for phase in [0.0, 0.9, 2.3, 4.1] {
        let left = points(&wavy_rect(0.0, 8.5, 200.0, phase, Side::Left, &params));
        for p in &left {
            assert!(p.x >= 0.0 && p.x <= 17.0 + 1e-9, "left x {} at phase {phase}", p.x);
        }
        let right = points(&wavy_rect(100.0, 8.5, 200.0, phase, Side::Right, &params));
        for p in &right {
            assert!(p.x <= 100.0 && p.x >= 83.0 - 1e-9, "right x {} at phase {phase}", p.x);
        }
    }

    let flat = points(&wavy_rect(0.0, 0.0, 200.0, 1.0, Side::Left, &params));
    assert!(flat.iter().all(|p| p.x == 0.0));
}
