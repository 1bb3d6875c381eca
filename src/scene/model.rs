use std::collections::BTreeSet;

use kurbo::{Affine, BezPath, Point};

use crate::{
    foundation::error::{WardrobeError, WardrobeResult},
    scene::color::Color,
};

/// Logical canvas edge length, in design units. Rasters are produced at the same size.
pub const CANVAS_SIZE: u32 = 1024;

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    None,
    Solid(Color),
    Gradient(String),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Self::Solid(c)
    }
}

/// One colour stop; `offset_pct` is in `0..=100`, opacity is carried in the colour's alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub offset_pct: f64,
    pub color: Color,
}

impl Stop {
    pub const fn new(offset_pct: f64, rgb: u32, opacity: f64) -> Self {
        Self {
            offset_pct,
            color: Color::hex(rgb).with_alpha(opacity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Radial,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaintDef {
    pub id: String,
    pub kind: GradientKind,
    pub stops: Vec<Stop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Paint::None,
            stroke: Paint::None,
            stroke_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            opacity: 1.0,
        }
    }
}

impl Style {
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            fill: paint.into(),
            ..Self::default()
        }
    }

    pub fn stroke(paint: impl Into<Paint>, width: f64) -> Self {
        Self::default().with_stroke(paint, width)
    }

    pub fn with_stroke(mut self, paint: impl Into<Paint>, width: f64) -> Self {
        self.stroke = paint.into();
        self.stroke_width = width;
        self
    }

    pub fn round_caps(mut self) -> Self {
        self.line_cap = LineCap::Round;
        self
    }

    pub fn round_joins(mut self) -> Self {
        self.line_join = LineJoin::Round;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    fn paints(&self) -> [&Paint; 2] {
        [&self.fill, &self.stroke]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path(BezPath),
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
    },
    Circle {
        center: Point,
        r: f64,
    },
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
    Polygon(Vec<Point>),
}

impl Shape {
    pub fn rect(x: f64, y: f64, width: f64, height: f64, rx: f64) -> Self {
        Self::Rect {
            x,
            y,
            width,
            height,
            rx,
        }
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::Circle {
            center: Point::new(cx, cy),
            r,
        }
    }

    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::Ellipse {
            center: Point::new(cx, cy),
            rx,
            ry,
        }
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        }
    }

    pub fn polygon(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::Polygon(points.into_iter().map(Point::from).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(Group),
    Shape { shape: Shape, style: Style },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub transform: Affine,
    pub children: Vec<Node>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    pub fn new() -> Self {
        Self {
            transform: Affine::IDENTITY,
            children: Vec::new(),
        }
    }

    pub fn translated(dx: f64, dy: f64) -> Self {
        Self {
            transform: Affine::translate((dx, dy)),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, shape: Shape, style: Style) -> &mut Self {
        self.children.push(Node::Shape { shape, style });
        self
    }

    pub fn add_group(&mut self, group: Group) -> &mut Self {
        self.children.push(Node::Group(group));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub defs: Vec<PaintDef>,
    pub nodes: Vec<Node>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            defs: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Registers a top-to-bottom linear gradient and returns the paint referencing it.
    pub fn linear_gradient(&mut self, id: &str, stops: &[Stop]) -> Paint {
        self.register(id, GradientKind::Linear, stops)
    }

    pub fn radial_gradient(&mut self, id: &str, stops: &[Stop]) -> Paint {
        self.register(id, GradientKind::Radial, stops)
    }

    fn register(&mut self, id: &str, kind: GradientKind, stops: &[Stop]) -> Paint {
        self.defs.push(PaintDef {
            id: id.to_owned(),
            kind,
            stops: stops.to_vec(),
        });
        Paint::Gradient(id.to_owned())
    }

    pub fn push(&mut self, group: Group) {
        self.nodes.push(Node::Group(group));
    }

    pub fn paint_refs(&self) -> Vec<&str> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a str>) {
            for node in nodes {
                match node {
                    Node::Group(g) => walk(&g.children, out),
                    Node::Shape { style, .. } => {
                        for paint in style.paints() {
                            if let Paint::Gradient(id) = paint {
                                if !out.contains(&id.as_str()) {
                                    out.push(id);
                                }
                            }
                        }
                    }
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }

    pub fn validate(&self) -> WardrobeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WardrobeError::scene("canvas width/height must be > 0"));
        }

        let mut ids = BTreeSet::new();
        for def in &self.defs {
            if def.id.trim().is_empty() {
                return Err(WardrobeError::scene("gradient id must be non-empty"));
            }
            if !ids.insert(def.id.as_str()) {
                return Err(WardrobeError::scene(format!(
                    "duplicate gradient id '{}'",
                    def.id
                )));
            }
            if def.stops.is_empty() {
                return Err(WardrobeError::scene(format!(
                    "gradient '{}' has no stops",
                    def.id
                )));
            }
            let mut last = 0.0;
            for stop in &def.stops {
                if !(0.0..=100.0).contains(&stop.offset_pct) || stop.offset_pct < last {
                    return Err(WardrobeError::scene(format!(
                        "gradient '{}' stop offsets must be ascending within 0..=100",
                        def.id
                    )));
                }
                last = stop.offset_pct;
            }
        }

        for id in self.paint_refs() {
            if !ids.contains(id) {
                return Err(WardrobeError::scene(format!(
                    "paint reference '{id}' has no registered definition"
                )));
            }
        }

        Ok(())
    }
}
