// File: crates/dashplot-core/src/scale.rs
// Summary: Linear (continuous) and band (categorical) scales, plus ordinal color assignment.

use crate::grid;
use crate::scene::Color;

/// Maps a continuous domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A collapsed domain maps everything to the middle of the range.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span != 0.0 { (v - d0) / span } else { 0.5 };
        r0 + t * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span != 0.0 { (px - r0) / span } else { 0.5 };
        d0 + t * (d1 - d0)
    }

    /// Extend the domain outward to whole multiples of the tick step.
    /// Repeats until the step stops changing (at most 10 rounds).
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }
        let mut prestep = None;
        for _ in 0..10 {
            let step = grid::tick_increment(start, stop, count);
            if prestep == Some(step) {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self.domain = if reverse { (stop, start) } else { (start, stop) };
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_step(&self, count: usize) -> f64 {
        grid::tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Evenly spaced bands for a list of labels.
/// `padding` is used both between bands and at the outer edges; bands are centered.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    pub domain: Vec<String>,
    pub range: (f64, f64),
    pub padding: f64,
    start: f64,
    step: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self { domain, range, padding, start, step }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.step * (1.0 - self.padding)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.domain.iter().position(|d| d == label)
    }

    /// Left edge of the band at `index`.
    pub fn at(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Left edge of the band for `label`, `None` if it is not in the domain.
    pub fn position(&self, label: &str) -> Option<f64> {
        self.index_of(label).map(|i| self.at(i))
    }

    pub fn center(&self, index: usize) -> f64 {
        self.at(index) + self.bandwidth() / 2.0
    }
}

/// Assigns palette colors to labels in first-seen order, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct OrdinalScale {
    domain: Vec<String>,
    palette: &'static [Color],
}

impl OrdinalScale {
    pub fn new(palette: &'static [Color]) -> Self {
        Self { domain: Vec::new(), palette }
    }

    pub fn with_domain<I, S>(palette: &'static [Color], labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut s = Self::new(palette);
        for l in labels {
            s.color(&l.into());
        }
        s
    }

    /// Color for `label`; unseen labels are appended to the domain.
    pub fn color(&mut self, label: &str) -> Color {
        let i = match self.domain.iter().position(|d| d == label) {
            Some(i) => i,
            None => {
                self.domain.push(label.to_string());
                self.domain.len() - 1
            }
        };
        if self.palette.is_empty() {
            return Color::BLACK;
        }
        self.palette[i % self.palette.len()]
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}
