use crate::coords::{Color, Vec2};
use crate::raster::Rasterizer;

use super::ShapeKind;
use super::shapes::{Circle, Point, Triangle};

/// A drawable shape.
///
/// The variant set is closed. Adding a shape means:
/// - add a payload module under `scene::shapes::*`
/// - add a variant here and to [`ShapeKind`]
/// - teach `persist` its wire form
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Point(s) => s.position,
            Shape::Triangle(s) => s.position,
            Shape::Circle(s) => s.position,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Shape::Point(s) => s.color,
            Shape::Triangle(s) => s.color,
            Shape::Circle(s) => s.color,
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        match self {
            Shape::Point(s) => s.size,
            Shape::Triangle(s) => s.size,
            Shape::Circle(s) => s.size,
        }
    }

    /// Wedge count for circles, `None` for every other variant.
    #[inline]
    pub fn segments(&self) -> Option<u32> {
        match self {
            Shape::Circle(c) => Some(c.segments),
            _ => None,
        }
    }

    /// Number of primitive draws `render` issues.
    #[inline]
    pub fn draw_calls(&self) -> usize {
        match self {
            Shape::Point(_) | Shape::Triangle(_) => 1,
            Shape::Circle(c) => c.segments as usize,
        }
    }

    /// Emits this shape's primitives. Reads only the shape's own fields.
    pub fn render(&self, raster: &mut dyn Rasterizer) {
        match self {
            Shape::Point(s) => s.render(raster),
            Shape::Triangle(s) => s.render(raster),
            Shape::Circle(s) => s.render(raster),
        }
    }
}

impl From<Point> for Shape {
    #[inline]
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<Triangle> for Shape {
    #[inline]
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Circle> for Shape {
    #[inline]
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}
