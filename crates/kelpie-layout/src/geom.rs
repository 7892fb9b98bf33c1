use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Unit vector at `angle` radians (screen convention: y grows downward).
pub fn unit_at(angle: f64) -> Vector {
    vector(angle.cos(), angle.sin())
}

/// Serializable point for layout output. Internal math uses the euclid
/// aliases above; everything handed to a presentation layer uses this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn to_point(self) -> Point {
        point(self.x, self.y)
    }
}

impl From<Point> for LayoutPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}
