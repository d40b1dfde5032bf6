use serde::{Deserialize, Serialize};

/// A coordinate in layout space. `y` grows downward, as in SVG.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    #[serde(rename = "rect", alias = "rectangle")]
    Rectangle,
    #[serde(rename = "ellipse", alias = "circle", alias = "oval")]
    Ellipse,
    #[serde(rename = "diamond", alias = "rhombus")]
    Diamond,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::Ellipse => "ellipse",
            Self::Diamond => "diamond",
        }
    }
}

/// Outline of a node, centered on `center` and filling a `width` x `height`
/// bounding box. Diamonds touch the box at the midpoint of each side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Shape {
    pub const fn new(kind: ShapeKind, center: Point, width: f64, height: f64) -> Self {
        Self {
            kind,
            center,
            width,
            height,
        }
    }

    pub const fn rectangle(center: Point, width: f64, height: f64) -> Self {
        Self::new(ShapeKind::Rectangle, center, width, height)
    }

    pub const fn ellipse(center: Point, width: f64, height: f64) -> Self {
        Self::new(ShapeKind::Ellipse, center, width, height)
    }

    pub const fn diamond(center: Point, width: f64, height: f64) -> Self {
        Self::new(ShapeKind::Diamond, center, width, height)
    }

    pub fn half_extents(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Top-left and bottom-right corners of the bounding box.
    pub fn bounds(&self) -> (Point, Point) {
        let (rx, ry) = self.half_extents();
        (
            Point::new(self.center.x - rx, self.center.y - ry),
            Point::new(self.center.x + rx, self.center.y + ry),
        )
    }

    /// Gauge of `point` relative to the outline: `1.0` on the boundary,
    /// below it inside and above it outside. Scales linearly along any ray
    /// from the center, so `gauge - 1.0` is the relative boundary error.
    pub fn gauge(&self, point: Point) -> f64 {
        let (rx, ry) = self.half_extents();
        let nx = (point.x - self.center.x) / rx;
        let ny = (point.y - self.center.y) / ry;
        match self.kind {
            ShapeKind::Rectangle => nx.abs().max(ny.abs()),
            ShapeKind::Ellipse => nx.hypot(ny),
            ShapeKind::Diamond => nx.abs() + ny.abs(),
        }
    }
}
