// File: crates/dashplot-core/src/stats.rs
// Summary: Ordinary-least-squares line fit and coefficient of determination over (x, y) samples.
// Notes:
// - Pure functions; nothing here touches the scene or the renderer.
// - Degenerate and non-finite input is reported as an error, never as NaN.
// - Moments are taken about the mean and scaled by the widest deviation, so
//   large offsets and magnitudes near f64::MAX do not cancel or overflow.

use std::fmt;

use thiserror::Error;

/// One (x, y) observation. Identity is its position in the input slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Which variable of a sample set has zero variance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variable {
    /// x
    Independent,
    /// y
    Dependent,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Independent => f.write_str("x"),
            Variable::Dependent => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StatsError {
    #[error("degenerate input: zero {variable}-variance")]
    DegenerateInput { variable: Variable },
    #[error("invalid sample at index {index}: ({x}, {y}) is not finite")]
    InvalidSample { index: usize, x: f64, y: f64 },
    #[error("fit is outside the f64 range")]
    Overflow,
}

/// Best-fit line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Location and scale of one variable.
#[derive(Clone, Copy, Debug, Default)]
struct Column {
    mean: f64,
    /// Largest absolute deviation from `mean`; zero for a constant column.
    scale: f64,
    varies: bool,
}

impl Column {
    fn scan(values: impl Iterator<Item = f64> + Clone) -> Result<Self, StatsError> {
        let mut first = None;
        let mut varies = false;
        let mut mean = 0.0;
        for (k, v) in values.clone().enumerate() {
            // exact: sums of a constant like 0.1 do not cancel to zero
            varies |= *first.get_or_insert(v) != v;
            let k = (k + 1) as f64;
            mean += v / k - mean / k;
        }
        let Some(first) = first else { return Ok(Self::default()) };
        if !varies {
            return Ok(Self { mean: first, scale: 0.0, varies });
        }
        let scale = values.map(|v| (v - mean).abs()).fold(0.0, f64::max);
        if !mean.is_finite() || !scale.is_finite() {
            return Err(StatsError::Overflow);
        }
        Ok(Self { mean, scale, varies })
    }

    /// Deviation from the mean in units of `scale`, within `[-1, 1]`.
    #[inline]
    fn unit(&self, v: f64) -> f64 {
        if self.scale > 0.0 { (v - self.mean) / self.scale } else { 0.0 }
    }
}

/// Mean-centered, scale-normalized moments shared by both estimators.
#[derive(Clone, Copy, Debug)]
struct Moments {
    x: Column,
    y: Column,
    uu: f64,
    vv: f64,
    uv: f64,
}

impl Moments {
    fn accumulate(samples: &[Sample]) -> Result<Self, StatsError> {
        if let Some((index, p)) = samples
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(StatsError::InvalidSample { index, x: p.x, y: p.y });
        }
        let x = Column::scan(samples.iter().map(|p| p.x))?;
        let y = Column::scan(samples.iter().map(|p| p.y))?;
        let (mut uu, mut vv, mut uv) = (0.0, 0.0, 0.0);
        for p in samples {
            let (u, v) = (x.unit(p.x), y.unit(p.y));
            uu += u * u;
            vv += v * v;
            uv += u * v;
        }
        Ok(Self { x, y, uu, vv, uv })
    }

    fn require_x(&self) -> Result<(), StatsError> {
        if self.x.varies && self.uu > 0.0 {
            Ok(())
        } else {
            Err(StatsError::DegenerateInput { variable: Variable::Independent })
        }
    }

    fn require_y(&self) -> Result<(), StatsError> {
        if self.y.varies && self.vv > 0.0 {
            Ok(())
        } else {
            Err(StatsError::DegenerateInput { variable: Variable::Dependent })
        }
    }
}

/// Ordinary-least-squares slope and intercept.
///
/// Fails with [`StatsError::DegenerateInput`] when all x values are equal (or
/// the slice is empty), with [`StatsError::InvalidSample`] on NaN/infinite
/// coordinates, and with [`StatsError::Overflow`] when the coefficients do
/// not fit in an `f64`.
pub fn fit_linear(samples: &[Sample]) -> Result<LinearFit, StatsError> {
    let m = Moments::accumulate(samples)?;
    m.require_x()?;
    let slope = m.uv / m.uu * m.y.scale / m.x.scale;
    let intercept = m.y.mean - slope * m.x.mean;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(StatsError::Overflow);
    }
    Ok(LinearFit { slope, intercept })
}

/// Squared Pearson correlation (r²) in `[0, 1]`.
///
/// Constant x or constant y is a [`StatsError::DegenerateInput`]; x is
/// checked first.
pub fn fit_quality(samples: &[Sample]) -> Result<f64, StatsError> {
    let m = Moments::accumulate(samples)?;
    m.require_x()?;
    m.require_y()?;
    let r = m.uv / (m.uu * m.vv).sqrt();
    Ok((r * r).clamp(0.0, 1.0))
}

/// Min and max of the finite values, `None` if there are none.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
