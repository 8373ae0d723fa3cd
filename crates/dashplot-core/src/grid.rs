// File: crates/dashplot-core/src/grid.rs
// Summary: Tick step selection, tick generation and tick label formatting.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

fn step_factor(error: f64) -> f64 {
    if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 }
}

/// Tick spacing of roughly `count` ticks over `[start, stop]`, snapped to 1/2/5·10^k.
///
/// Positive results are the step itself; negative results `-m` mean a step of
/// `1/m`, which keeps sub-unit steps exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !(step > 0.0) || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = step_factor(error);
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Actual tick distance (always positive) for `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

/// Evenly spaced "nice" values inside `[start, stop]`, inclusive.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc == 0.0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    if inc > 0.0 {
        let (mut i0, mut i1) = ((lo / inc).round() as i64, (hi / inc).round() as i64);
        if (i0 as f64) * inc < lo { i0 += 1; }
        if (i1 as f64) * inc > hi { i1 -= 1; }
        for i in i0..=i1 {
            out.push(i as f64 * inc);
        }
    } else {
        let m = -inc;
        let (mut i0, mut i1) = ((lo * m).round() as i64, (hi * m).round() as i64);
        if (i0 as f64) / m < lo { i0 += 1; }
        if (i1 as f64) / m > hi { i1 -= 1; }
        for i in i0..=i1 {
            out.push(i as f64 / m);
        }
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Format a tick value with just enough decimals for `step`, grouping thousands.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let s = format!("{:.*}", decimals, value.abs());
    let (int, frac) = match s.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (s.clone(), None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = value < 0.0 && s_is_nonzero(&grouped, frac.as_deref());
    let mut out = String::new();
    if negative {
        out.push('\u{2212}');
    }
    out.push_str(&grouped);
    if let Some(f) = frac {
        out.push('.');
        out.push_str(&f);
    }
    out
}

fn s_is_nonzero(int: &str, frac: Option<&str>) -> bool {
    int.chars().chain(frac.unwrap_or("").chars()).any(|c| c.is_ascii_digit() && c != '0')
}
