use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// 2D position in normalized device coordinates.
///
/// Serialized as a bare `[x, y]` array. Legacy files may carry a third
/// component; it is accepted on load and dropped. JSON has no NaN or
/// infinity, so those save as `null`, and a `null` loads back as NaN.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CoordRepr", into = "[f32; 2]")]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `radius` from `self` along the direction `angle` (radians, CCW from +X).
    #[inline]
    pub fn polar_offset(self, radius: f32, angle: f32) -> Vec2 {
        Vec2::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordRepr {
    Xy([Option<f32>; 2]),
    Xyz([Option<f32>; 3]),
}

impl From<CoordRepr> for Vec2 {
    fn from(repr: CoordRepr) -> Self {
        let (x, y) = match repr {
            CoordRepr::Xy([x, y]) => (x, y),
            CoordRepr::Xyz([x, y, _]) => (x, y),
        };
        Vec2::new(x.unwrap_or(f32::NAN), y.unwrap_or(f32::NAN))
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}
