// File: crates/dashplot-core/src/axis.rs
// Summary: Axis model (ticks + range) and its scene nodes: domain line, tick marks, labels, grid lines.

use crate::grid::format_tick;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Color, Node, PathData, Style, Text, TextAnchor};

/// Tick mark length, in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Distance from the axis line to a tick label.
pub const TICK_PADDING: f64 = 3.0;
pub const TICK_FONT_SIZE: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    /// Degrees; bottom axes only. Rotated labels are end-anchored.
    pub label_rotation: f64,
}

impl Axis {
    pub fn new(orient: AxisOrient, range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Self { orient, range, ticks, label_rotation: 0.0 }
    }

    /// Ticks at the scale's nice values, labelled with the step's precision.
    pub fn linear(orient: AxisOrient, scale: &LinearScale, count: usize) -> Self {
        let step = scale.tick_step(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { pos: scale.map(v), label: format_tick(v, step) })
            .collect();
        Self::new(orient, scale.range, ticks)
    }

    /// One tick at the center of every band.
    pub fn band(orient: AxisOrient, scale: &BandScale) -> Self {
        let ticks = scale
            .domain
            .iter()
            .enumerate()
            .map(|(i, label)| Tick { pos: scale.center(i), label: label.clone() })
            .collect();
        Self::new(orient, scale.range, ticks)
    }

    pub fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation = degrees;
        self
    }

    /// Axis line, ticks and labels, in plot coordinates. `translate` positions the group
    /// (e.g. `(0, inner_height)` for a bottom axis).
    pub fn render(&self, translate: (f64, f64), class: &str, color: Color) -> Node {
        let stroke = Style::stroke(color, 1.0);
        let (r0, r1) = self.range;
        let mut children = Vec::with_capacity(self.ticks.len() * 2 + 1);

        let mut domain = PathData::new();
        match self.orient {
            AxisOrient::Bottom => {
                domain.move_to(r0, TICK_SIZE).line_to(r0, 0.0).line_to(r1, 0.0).line_to(r1, TICK_SIZE);
            }
            AxisOrient::Left => {
                domain.move_to(-TICK_SIZE, r0).line_to(0.0, r0).line_to(0.0, r1).line_to(-TICK_SIZE, r1);
            }
        }
        children.push(Node::path(domain, stroke.clone()));

        for t in &self.ticks {
            match self.orient {
                AxisOrient::Bottom => {
                    children.push(Node::line(t.pos, 0.0, t.pos, TICK_SIZE, stroke.clone()));
                    let text = if self.label_rotation != 0.0 {
                        Text::new(t.pos, 0.0, t.label.clone(), TICK_FONT_SIZE, color)
                            .rotated(self.label_rotation)
                            .anchor(TextAnchor::End)
                            .shift(0.0, TICK_SIZE + TICK_PADDING)
                            .shift_em(-0.8, 0.15)
                    } else {
                        Text::new(t.pos, TICK_SIZE + TICK_PADDING, t.label.clone(), TICK_FONT_SIZE, color)
                            .anchor(TextAnchor::Middle)
                            .shift_em(0.0, 0.71)
                    };
                    children.push(Node::Text(text));
                }
                AxisOrient::Left => {
                    children.push(Node::line(0.0, t.pos, -TICK_SIZE, t.pos, stroke.clone()));
                    let text = Text::new(-(TICK_SIZE + TICK_PADDING), t.pos, t.label.clone(), TICK_FONT_SIZE, color)
                        .anchor(TextAnchor::End)
                        .shift_em(0.0, 0.32);
                    children.push(Node::Text(text));
                }
            }
        }
        Node::group(translate, class, children)
    }

    /// Dashed full-length grid lines at every tick, no labels. `length` is the
    /// plot extent perpendicular to the axis.
    pub fn grid(&self, translate: (f64, f64), length: f64, color: Color) -> Node {
        let style = Style::stroke(color, 1.0).dashed(&[3.0, 3.0]).with_opacity(0.3);
        let children = self
            .ticks
            .iter()
            .map(|t| match self.orient {
                AxisOrient::Bottom => Node::line(t.pos, 0.0, t.pos, -length, style.clone()),
                AxisOrient::Left => Node::line(0.0, t.pos, length, t.pos, style.clone()),
            })
            .collect();
        Node::group(translate, "grid", children)
    }
}
