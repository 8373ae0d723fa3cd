use std::f64::consts::{FRAC_PI_2, PI, TAU};

use dashplot_core::geometry::{arc_centroid, arc_path, defined_runs, monotone_x_path, pie};
use dashplot_core::scene::{PathCmd, PathData};
use dashplot_core::types::{Dimensions, Margin, MIN_HEIGHT};

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn cubic_at(p0: (f64, f64), c: (f64, f64, f64, f64, f64, f64), t: f64) -> (f64, f64) {
    let (x1, y1, x2, y2, x3, y3) = c;
    let u = 1.0 - t;
    let x = u * u * u * p0.0 + 3.0 * u * u * t * x1 + 3.0 * u * t * t * x2 + t * t * t * x3;
    let y = u * u * u * p0.1 + 3.0 * u * u * t * y1 + 3.0 * u * t * t * y2 + t * t * t * y3;
    (x, y)
}

/// Points sampled along every cubic segment of `path`.
fn sample_curves(path: &PathData) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    let mut cur = (0.0, 0.0);
    for cmd in &path.cmds {
        match *cmd {
            PathCmd::MoveTo(x, y) | PathCmd::LineTo(x, y) => cur = (x, y),
            PathCmd::CubicTo(x1, y1, x2, y2, x, y) => {
                for i in 0..=8 {
                    out.push(cubic_at(cur, (x1, y1, x2, y2, x, y), i as f64 / 8.0));
                }
                cur = (x, y);
            }
            PathCmd::Close => {}
        }
    }
    out
}

#[test]
fn pie_keeps_input_order_and_spans_full_turn() {
    let slices = pie(&[1.0, 1.0, 2.0]);
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].start_angle, 0.0);
    assert_eq!(slices[0].end_angle, FRAC_PI_2);
    assert_eq!(slices[1].end_angle, PI);
    assert_eq!(slices[2].end_angle, TAU);
    assert!(slices.iter().enumerate().all(|(i, s)| s.index == i));
}

#[test]
fn pie_gives_empty_slices_to_unusable_values() {
    let slices = pie(&[3.0, -1.0, f64::NAN, 1.0]);
    assert_eq!(slices[1].start_angle, slices[1].end_angle);
    assert_eq!(slices[2].start_angle, slices[2].end_angle);
    assert!(approx(slices[3].end_angle, TAU, 1e-12));
    // all-zero input lays out nothing
    assert!(pie(&[0.0, 0.0]).iter().all(|s| s.end_angle == 0.0));
}

#[test]
fn annular_arc_stays_on_its_radii() {
    let path = arc_path(50.0, 100.0, 0.0, 2.0);
    assert!(matches!(path.cmds.first(), Some(PathCmd::MoveTo(x, y)) if approx(*x, 0.0, 1e-9) && approx(*y, -100.0, 1e-9)));
    assert_eq!(path.cmds.last(), Some(&PathCmd::Close));
    for (x, y) in sample_curves(&path) {
        let r = (x * x + y * y).sqrt();
        assert!(approx(r, 100.0, 0.05) || approx(r, 50.0, 0.05), "r = {r}");
    }
}

#[test]
fn wedge_closes_through_the_center() {
    let path = arc_path(0.0, 80.0, 0.0, PI);
    let n = path.cmds.len();
    assert_eq!(path.cmds[n - 2], PathCmd::LineTo(0.0, 0.0));
    assert_eq!(path.cmds[n - 1], PathCmd::Close);
}

#[test]
fn full_ring_draws_two_closed_circles() {
    let path = arc_path(40.0, 90.0, 0.0, TAU);
    let moves = path.cmds.iter().filter(|c| matches!(c, PathCmd::MoveTo(..))).count();
    let closes = path.cmds.iter().filter(|c| matches!(c, PathCmd::Close)).count();
    assert_eq!((moves, closes), (2, 2));
    let solid = arc_path(0.0, 90.0, 0.0, TAU);
    assert_eq!(solid.cmds.iter().filter(|c| matches!(c, PathCmd::Close)).count(), 1);
}

#[test]
fn degenerate_arcs_are_empty_shapes() {
    assert_eq!(arc_path(10.0, 20.0, 1.0, 1.0).cmds, vec![PathCmd::MoveTo(0.0, 0.0)]);
    assert_eq!(arc_path(0.0, 0.0, 0.0, 1.0).cmds, vec![PathCmd::MoveTo(0.0, 0.0)]);
}

#[test]
fn centroid_sits_mid_radius_mid_angle() {
    let (x, y) = arc_centroid(50.0, 150.0, 0.0, PI);
    assert!(approx(x, 100.0, 1e-9));
    assert!(approx(y, 0.0, 1e-9));
    let (x, y) = arc_centroid(0.0, 100.0, 0.0, 0.0);
    assert!(approx(x, 0.0, 1e-9) && approx(y, -50.0, 1e-9));
}

#[test]
fn monotone_curve_passes_through_points_without_overshoot() {
    let pts = [(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 5.0), (4.0, 4.0)];
    let path = monotone_x_path(&pts);
    assert_eq!(path.cmds[0], PathCmd::MoveTo(0.0, 0.0));
    let ends = path
        .cmds
        .iter()
        .filter_map(|c| match *c {
            PathCmd::CubicTo(_, _, _, _, x, y) => Some((x, y)),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(ends, pts[1..].to_vec());
    // the flat segment stays flat
    if let PathCmd::CubicTo(_, y1, _, y2, _, _) = path.cmds[2] {
        assert_eq!((y1, y2), (1.0, 1.0));
    } else {
        panic!("expected a cubic segment");
    }
    for (i, w) in pts.windows(2).enumerate() {
        let (lo, hi) = (w[0].1.min(w[1].1), w[0].1.max(w[1].1));
        if let PathCmd::CubicTo(_, y1, _, y2, _, _) = path.cmds[i + 1] {
            assert!(y1 >= lo - 1e-9 && y1 <= hi + 1e-9, "segment {i}: {y1}");
            assert!(y2 >= lo - 1e-9 && y2 <= hi + 1e-9, "segment {i}: {y2}");
        }
    }
}

#[test]
fn short_monotone_inputs() {
    assert!(monotone_x_path(&[]).is_empty());
    assert_eq!(monotone_x_path(&[(1.0, 2.0)]).cmds, vec![PathCmd::MoveTo(1.0, 2.0)]);
    assert_eq!(
        monotone_x_path(&[(0.0, 0.0), (5.0, 5.0)]).cmds,
        vec![PathCmd::MoveTo(0.0, 0.0), PathCmd::LineTo(5.0, 5.0)]
    );
}

#[test]
fn runs_break_at_missing_values() {
    let pts = [(0.0, 1.0), (1.0, f64::NAN), (2.0, 3.0), (3.0, 4.0), (4.0, f64::NAN)];
    assert_eq!(defined_runs(&pts), vec![vec![(0.0, 1.0)], vec![(2.0, 3.0), (3.0, 4.0)]]);
    assert!(defined_runs(&[(0.0, f64::NAN)]).is_empty());
}

#[test]
fn dimensions_floor_height_and_subtract_margins() {
    let d = Dimensions::new(800, 300, Margin::new(40, 30, 60, 60));
    assert_eq!(d.height, MIN_HEIGHT);
    assert_eq!(d.inner_width(), 710.0);
    assert_eq!(d.inner_height(), 400.0);
    let tiny = Dimensions::new(50, 600, Margin::new(40, 100, 60, 60));
    assert_eq!(tiny.inner_width(), 0.0);
}
