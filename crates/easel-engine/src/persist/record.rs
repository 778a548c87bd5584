use serde::{Deserialize, Deserializer, Serialize};

use crate::coords::{Color, Vec2};
use crate::scene::{Circle, Point, Shape, ShapeKind, Triangle};

/// Top-level save document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    #[serde(rename = "shapesList")]
    pub shapes_list: Vec<SerializedShape>,
}

/// One tagged shape entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedShape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub position: Vec2,
    pub color: Color,
    #[serde(deserialize_with = "nan_if_null")]
    pub size: f32,
    /// Present only for circles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<u32>,
}

/// serde_json writes non-finite floats as `null`; read them back as NaN.
fn nan_if_null<'de, D: Deserializer<'de>>(de: D) -> Result<f32, D::Error> {
    Ok(Option::<f32>::deserialize(de)?.unwrap_or(f32::NAN))
}

impl From<&Shape> for SerializedShape {
    fn from(shape: &Shape) -> Self {
        Self {
            kind: shape.kind(),
            position: shape.position(),
            color: shape.color(),
            size: shape.size(),
            segments: shape.segments(),
        }
    }
}

impl From<&SerializedShape> for Shape {
    fn from(s: &SerializedShape) -> Self {
        match s.kind {
            ShapeKind::Point => Shape::Point(Point::new(s.position, s.color, s.size)),
            ShapeKind::Triangle => Shape::Triangle(Triangle::new(s.position, s.color, s.size)),
            ShapeKind::Circle => Shape::Circle(Circle::new(
                s.position,
                s.color,
                s.size,
                s.segments.unwrap_or(Circle::DEFAULT_SEGMENTS),
            )),
        }
    }
}
