// File: crates/dashplot-core/src/geometry.rs
// Summary: Pixel math for charts: pie layout, annular arcs as cubic Béziers, monotone-X curves.
// Notes:
// - Angles are radians measured clockwise from 12 o'clock; a point at angle `a`
//   and radius `r` is (r·sin a, −r·cos a) relative to the center.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::scene::PathData;

const EPS: f64 = 1e-12;

#[inline]
fn polar(r: f64, a: f64) -> (f64, f64) {
    (r * a.sin(), -r * a.cos())
}

/// Angular extent of one pie slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Lay out slices over a full turn in input order.
/// Non-positive and non-finite values get zero-width slices.
pub fn pie(values: &[f64]) -> Vec<PieSlice> {
    let weight = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let sum: f64 = values.iter().map(|&v| weight(v)).sum();
    let k = if sum > 0.0 { TAU / sum } else { 0.0 };
    let mut a = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let start = a;
            a += weight(value) * k;
            PieSlice { index, value, start_angle: start, end_angle: a }
        })
        .collect()
}

/// Append a circular arc from `a0` to `a1` (either direction) as cubic segments
/// of at most a quarter turn. Assumes the current point is already at `a0`.
fn arc_segments(p: &mut PathData, r: f64, a0: f64, a1: f64) {
    let total = a1 - a0;
    let n = (total.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let da = total / n as f64;
    let h = 4.0 / 3.0 * (da / 4.0).tan();
    for i in 0..n {
        let s = a0 + da * i as f64;
        let e = s + da;
        let (x0, y0) = polar(r, s);
        let (x3, y3) = polar(r, e);
        // d/da of polar(r, a) is (r·cos a, r·sin a)
        let (tx0, ty0) = (r * s.cos(), r * s.sin());
        let (tx3, ty3) = (r * e.cos(), r * e.sin());
        p.cubic_to(x0 + h * tx0, y0 + h * ty0, x3 - h * tx3, y3 - h * ty3, x3, y3);
    }
}

/// Annular sector centered at the origin. `inner == 0` gives a pie wedge.
pub fn arc_path(inner: f64, outer: f64, start: f64, end: f64) -> PathData {
    let mut p = PathData::new();
    let (r0, r1) = (inner.min(outer).max(0.0), inner.max(outer));
    let da = end - start;
    if r1 < EPS || da.abs() < EPS {
        p.move_to(0.0, 0.0);
        return p;
    }
    if da.abs() >= TAU - 1e-9 {
        // full ring: outer circle, then inner circle the other way round
        let (x, y) = polar(r1, start);
        p.move_to(x, y);
        arc_segments(&mut p, r1, start, start + TAU);
        p.close();
        if r0 > EPS {
            let (x, y) = polar(r0, start + TAU);
            p.move_to(x, y);
            arc_segments(&mut p, r0, start + TAU, start);
            p.close();
        }
        return p;
    }
    let (x, y) = polar(r1, start);
    p.move_to(x, y);
    arc_segments(&mut p, r1, start, end);
    if r0 > EPS {
        let (x, y) = polar(r0, end);
        p.line_to(x, y);
        arc_segments(&mut p, r0, end, start);
    } else {
        p.line_to(0.0, 0.0);
    }
    p.close();
    p
}

/// Midpoint of the arc, halfway between the radii and the angles.
pub fn arc_centroid(inner: f64, outer: f64, start: f64, end: f64) -> (f64, f64) {
    polar((inner + outer) / 2.0, (start + end) / 2.0)
}

#[inline]
fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Smooth curve through points with increasing x that never overshoots in y
/// (monotone cubic Hermite, Steffen-style tangent limiting).
pub fn monotone_x_path(points: &[(f64, f64)]) -> PathData {
    let mut p = PathData::new();
    let n = points.len();
    if n == 0 {
        return p;
    }
    p.move_to(points[0].0, points[0].1);
    if n == 1 {
        return p;
    }
    if n == 2 {
        p.line_to(points[1].0, points[1].1);
        return p;
    }

    let secant = |i: usize| {
        let h = points[i + 1].0 - points[i].0;
        if h != 0.0 { (points[i + 1].1 - points[i].1) / h } else { 0.0 }
    };

    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = points[i].0 - points[i - 1].0;
        let h1 = points[i + 1].0 - points[i].0;
        let (s0, s1) = (secant(i - 1), secant(i));
        let avg = if h0 + h1 != 0.0 { (s0 * h1 + s1 * h0) / (h0 + h1) } else { 0.0 };
        let v = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * avg.abs());
        t[i] = if v.is_finite() { v } else { 0.0 };
    }
    t[0] = (3.0 * secant(0) - t[1]) / 2.0;
    t[n - 1] = (3.0 * secant(n - 2) - t[n - 2]) / 2.0;

    for i in 0..n - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = (x1 - x0) / 3.0;
        p.cubic_to(x0 + dx, y0 + dx * t[i], x1 - dx, y1 - dx * t[i + 1], x1, y1);
    }
    p
}

/// Split `points` into runs of finite coordinates.
pub fn defined_runs(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut cur = Vec::new();
    for &(x, y) in points {
        if x.is_finite() && y.is_finite() {
            cur.push((x, y));
        } else if !cur.is_empty() {
            runs.push(std::mem::take(&mut cur));
        }
    }
    if !cur.is_empty() {
        runs.push(cur);
    }
    runs
}
