use crate::coords::{Color, Vec2};
use crate::scene::{Circle, Point, Shape, ShapeKind, Triangle};

/// Triangle and circle sizes are scaled by this into NDC. Points stay in pixels.
pub const SIZE_TO_NDC: f32 = 1.0 / 200.0;

/// Slider range for color channels and size.
pub const SLIDER_MAX: f32 = 100.0;

/// Lowest segment count the UI will hand out. The model itself accepts less.
pub const MIN_UI_SEGMENTS: u32 = 3;

/// Current tool settings: what the next stroke will create.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Brush {
    pub kind: ShapeKind,
    pub color: Color,
    /// Slider units. See [`SIZE_TO_NDC`].
    pub size: f32,
    pub segments: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Point,
            color: Color::WHITE,
            size: 5.0,
            segments: Circle::DEFAULT_SEGMENTS,
        }
    }
}

impl Brush {
    /// Sets red, green or blue (`index` 0..=2) from a 0..100 slider value.
    ///
    /// Returns `false` for any other index.
    pub fn set_channel(&mut self, index: usize, value: f32) -> bool {
        let v = value / SLIDER_MAX;
        match index {
            0 => self.color.r = v,
            1 => self.color.g = v,
            2 => self.color.b = v,
            _ => return false,
        }
        true
    }

    /// Channel `index` in slider units.
    pub fn channel(&self, index: usize) -> Option<f32> {
        let c = match index {
            0 => self.color.r,
            1 => self.color.g,
            2 => self.color.b,
            _ => return None,
        };
        Some(c * SLIDER_MAX)
    }

    /// Nudges a channel by `delta` slider units, staying inside the slider range.
    pub fn adjust_channel(&mut self, index: usize, delta: f32) -> bool {
        match self.channel(index) {
            Some(current) => self.set_channel(index, (current + delta).clamp(0.0, SLIDER_MAX)),
            None => false,
        }
    }

    pub fn adjust_size(&mut self, delta: f32) {
        self.size = (self.size + delta).clamp(1.0, SLIDER_MAX);
    }

    pub fn adjust_segments(&mut self, delta: i32) {
        self.segments = self.segments.saturating_add_signed(delta).max(MIN_UI_SEGMENTS);
    }

    /// The shape a stroke at `position` creates.
    pub fn shape_at(&self, position: Vec2) -> Shape {
        match self.kind {
            ShapeKind::Point => Point::new(position, self.color, self.size).into(),
            ShapeKind::Triangle => {
                Triangle::new(position, self.color, self.size * SIZE_TO_NDC).into()
            }
            ShapeKind::Circle => {
                Circle::new(position, self.color, self.size * SIZE_TO_NDC, self.segments).into()
            }
        }
    }
}
