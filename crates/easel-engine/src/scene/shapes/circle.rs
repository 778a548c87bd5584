use core::f32::consts::TAU;

use crate::coords::{Color, Vec2};
use crate::raster::Rasterizer;
use crate::scene::{Scene, Shape};

/// Disk approximated by a triangle fan.
///
/// `segments < 3` is accepted: 1 and 2 produce degenerate slivers, 0 draws
/// nothing. Neither panics.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub position: Vec2,
    pub color: Color,
    /// Radius in NDC units.
    pub size: f32,
    pub segments: u32,
}

impl Circle {
    pub const DEFAULT_SEGMENTS: u32 = 8;

    #[inline]
    pub fn new(position: Vec2, color: Color, size: f32, segments: u32) -> Self {
        Self { position, color, size, segments }
    }

    /// Rim vertices, counter-clockwise from angle 0. Computed on demand.
    pub fn vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.segments).map(|i| self.rim(i))
    }

    fn rim(&self, i: u32) -> Vec2 {
        let step = TAU / self.segments as f32;
        self.position.polar_offset(self.size, i as f32 * step)
    }

    /// Emits one wedge `(center, v[i], v[i + 1])` per segment, wrapping at the end.
    ///
    /// Stops early once the rasterizer reports it is full.
    pub fn render(&self, raster: &mut dyn Rasterizer) {
        raster.set_color(self.color);

        let n = self.segments;
        if n == 0 {
            return;
        }
        let mut prev = self.rim(0);
        for i in 1..=n {
            if raster.is_full() {
                break;
            }
            let next = self.rim(i % n);
            raster.draw_filled_triangle([self.position, prev, next]);
            prev = next;
        }
    }
}

impl Scene {
    /// Appends a circle.
    #[inline]
    pub fn push_circle(&mut self, position: Vec2, color: Color, size: f32, segments: u32) {
        self.push(Shape::Circle(Circle::new(position, color, size, segments)));
    }
}
