// File: crates/dashplot-core/src/scene.rs
// Summary: Renderer-agnostic scene graph (groups, rects, lines, paths, circles, text) in pixel space.
// Notes:
// - Charts build a `Scene`; the SVG writer and the Skia raster backend consume it.
// - Paths only carry move/line/cubic/close so every backend can draw them directly.

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let h = s.trim().trim_start_matches('#');
        let nib = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
        let b = h.as_bytes();
        match b.len() {
            3 => {
                let (r, g, bl) = (nib(b[0])?, nib(b[1])?, nib(b[2])?);
                Some(Self::rgb(r * 17, g * 17, bl * 17))
            }
            6 => {
                let byte = |i: usize| Some(nib(b[i])? * 16 + nib(b[i + 1])?);
                Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Paint attributes of a node. `opacity` multiplies fill and stroke alpha.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub dash: Option<Vec<f64>>,
    pub opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self { fill: None, stroke: None, stroke_width: 1.0, dash: None, opacity: 1.0 }
    }
}

impl Style {
    pub fn fill(color: Color) -> Self {
        Self { fill: Some(color), ..Self::default() }
    }

    pub fn stroke(color: Color, width: f64) -> Self {
        Self { stroke: Some(color), stroke_width: width, ..Self::default() }
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    pub fn dashed(mut self, pattern: &[f64]) -> Self {
        self.dash = Some(pattern.to_vec());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CubicTo(f64, f64, f64, f64, f64, f64),
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    pub cmds: Vec<PathCmd>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo(x, y));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.cmds.push(PathCmd::LineTo(x, y));
        self
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.cmds.push(PathCmd::CubicTo(x1, y1, x2, y2, x, y));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Polyline through `points`.
    pub fn polyline(points: &[(f64, f64)]) -> Self {
        let mut p = Self::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            if i == 0 { p.move_to(x, y); } else { p.line_to(x, y); }
        }
        p
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Text placed at (`x`, `y`), rotated by `rotate` degrees about that point, then
/// shifted by (`dx`, `dy`) in the rotated frame. `y + dy` is the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub rotate: f64,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub bold: bool,
    pub style: Style,
    pub content: String,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>, font_size: f64, color: Color) -> Self {
        Self {
            x,
            y,
            dx: 0.0,
            dy: 0.0,
            rotate: 0.0,
            anchor: TextAnchor::Start,
            font_size,
            bold: false,
            style: Style::fill(color),
            content: content.into(),
        }
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Offset in ems of the current font size.
    pub fn shift_em(mut self, dx: f64, dy: f64) -> Self {
        self.dx += dx * self.font_size;
        self.dy += dy * self.font_size;
        self
    }

    pub fn shift(mut self, dx: f64, dy: f64) -> Self {
        self.dx += dx;
        self.dy += dy;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = opacity;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group {
        translate: (f64, f64),
        class: Option<String>,
        children: Vec<Node>,
    },
    Rect { x: f64, y: f64, width: f64, height: f64, rx: f64, style: Style },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, style: Style },
    Path { data: PathData, style: Style },
    Circle { cx: f64, cy: f64, r: f64, style: Style },
    Text(Text),
}

impl Node {
    pub fn group(translate: (f64, f64), class: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Group { translate, class: Some(class.into()), children }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64, style: Style) -> Self {
        Node::Rect { x, y, width, height, rx: 0.0, style }
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, style: Style) -> Self {
        Node::Line { x1, y1, x2, y2, style }
    }

    pub fn path(data: PathData, style: Style) -> Self {
        Node::Path { data, style }
    }

    pub fn circle(cx: f64, cy: f64, r: f64, style: Style) -> Self {
        Node::Circle { cx, cy, r, style }
    }

    /// Class of a group node, if any.
    pub fn class(&self) -> Option<&str> {
        match self {
            Node::Group { class, .. } => class.as_deref(),
            _ => None,
        }
    }

    /// Depth-first visit of this node and its descendants.
    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Node)) {
        f(self);
        if let Node::Group { children, .. } = self {
            for c in children {
                c.walk(f);
            }
        }
    }
}

/// A complete drawing: pixel size, optional background, top-level nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Option<Color>,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, background: None, nodes: Vec::new() }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a Node)) {
        for n in &self.nodes {
            n.walk(&mut f);
        }
    }

    /// First group with the given class, searched depth-first.
    pub fn find_group(&self, class: &str) -> Option<&Node> {
        let mut found = None;
        self.walk(|n| {
            if found.is_none() && n.class() == Some(class) {
                found = Some(n);
            }
        });
        found
    }

    /// All text contents in draw order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(|n| {
            if let Node::Text(t) = n {
                out.push(t.content.as_str());
            }
        });
        out
    }
}
