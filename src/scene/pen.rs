use kurbo::BezPath;

/// Fluent wrapper around [`BezPath`] for writing literal outlines compactly.
///
/// Every segment takes absolute design-unit coordinates.
#[derive(Debug, Clone)]
pub struct Pen {
    path: BezPath,
}

impl Pen {
    pub fn at(x: f64, y: f64) -> Self {
        let mut path = BezPath::new();
        path.move_to((x, y));
        Self { path }
    }

    pub fn line(mut self, x: f64, y: f64) -> Self {
        self.path.line_to((x, y));
        self
    }

    pub fn quad(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.path.quad_to((cx, cy), (x, y));
        self
    }

    pub fn cubic(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.path.curve_to((c1x, c1y), (c2x, c2y), (x, y));
        self
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.path.move_to((x, y));
        self
    }

    pub fn close(mut self) -> BezPath {
        self.path.close_path();
        self.path
    }

    pub fn open(self) -> BezPath {
        self.path
    }
}
