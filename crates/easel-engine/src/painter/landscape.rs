use crate::coords::{Color, Vec2};
use crate::raster::Rasterizer;

use super::{Painter, fill_rect};

// Layout grid: 26 columns by 14 rows across the whole canvas.
const DX: f32 = 2.0 / 26.0;
const DY: f32 = 2.0 / 14.0;

const BIG_TREE_WIDTH: f32 = 2.0 * DX;
const BIG_TREE_HEIGHT: f32 = 3.0 * DY;
const TREE_WIDTH: f32 = DX;
const TREE_HEIGHT: f32 = 2.0 * DY;

const SNOW: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const SHADE: Color = Color::new(0.3, 0.3, 1.0, 1.0);
const FOLIAGE: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const WATER: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const SKY: Color = Color::new(0.0, 0.0, 0.0, 1.0);

#[derive(Debug, Copy, Clone, PartialEq)]
enum TreeSize {
    Small,
    Big,
}

/// Mountains over a lake with a few stands of trees, on a white ground.
///
/// Restores a black clear color when done so a following scene redraw gets
/// its usual background.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Landscape {
    /// Grid origin in NDC. The composition is laid out for `(0, 0)`.
    pub origin: Vec2,
}

impl Landscape {
    pub fn new() -> Self {
        Self::default()
    }

    fn at(&self, cols: f32, rows: f32) -> Vec2 {
        Vec2::new(self.origin.x + cols * DX, self.origin.y + rows * DY)
    }

    fn ground(&self, r: &mut dyn Rasterizer) {
        r.set_color(WATER);

        // Shore line, west to east.
        let a = self.at(-1.0, -7.0);
        r.draw_filled_triangle([a, off(a, -2.0, 3.0), off(a, 2.0, 5.0)]);
        let b = self.at(1.0, -2.0);
        r.draw_filled_triangle([b, off(b, -1.0, 1.0), off(b, 8.0, 3.0)]);
        let c = self.at(9.0, 1.0);
        r.draw_filled_triangle([c, off(c, -1.0, 0.4), off(c, 4.0, 1.0)]);

        // Lake body.
        r.draw_filled_triangle([c, off(c, 4.0, 0.0), off(c, 4.0, 1.0)]);
        r.draw_filled_triangle([b, off(b, 8.0, 0.0), off(b, 8.0, 3.0)]);
        fill_rect(r, off(b, 8.0, 0.0), 4.0 * DX, 3.0 * DY, WATER);
        r.draw_filled_triangle([a, off(a, 2.0, 0.0), off(a, 2.0, 5.0)]);
        fill_rect(r, off(a, 2.0, 0.0), 14.0 * DX, 5.0 * DY, WATER);

        fill_rect(r, Vec2::new(-13.0 * DX, 5.0 * DY), 26.0 * DX, 2.0 * DY, SKY);
    }

    fn mountain(&self, r: &mut dyn Rasterizer, base: Vec2, width: f32, height: f32) {
        let Vec2 { x, y } = base;
        let peak = Vec2::new(x + width / 2.0, y + height);

        r.set_color(SNOW);
        r.draw_filled_triangle([base, Vec2::new(x + width / 2.0, y), peak]);
        r.set_color(SHADE);
        r.draw_filled_triangle([base, Vec2::new(x + width / 8.0, y), peak]);
        r.set_color(SNOW);
        r.draw_filled_triangle([Vec2::new(x + width / 2.0, y), peak, Vec2::new(x + width, y)]);
    }

    fn tree(&self, r: &mut dyn Rasterizer, base: Vec2, size: TreeSize) {
        let (w, h) = match size {
            TreeSize::Small => (TREE_WIDTH, TREE_HEIGHT),
            TreeSize::Big => (BIG_TREE_WIDTH, BIG_TREE_HEIGHT),
        };
        r.set_color(FOLIAGE);
        r.draw_filled_triangle([
            base,
            Vec2::new(base.x + w, base.y),
            Vec2::new(base.x + w / 2.0, base.y + h),
        ]);
    }

    fn tree_row(&self, r: &mut dyn Rasterizer, base: Vec2) {
        for i in 0..3 {
            self.tree(r, Vec2::new(base.x + i as f32 * TREE_WIDTH, base.y), TreeSize::Small);
        }
    }
}

fn off(p: Vec2, cols: f32, rows: f32) -> Vec2 {
    Vec2::new(p.x + cols * DX, p.y + rows * DY)
}

impl Painter for Landscape {
    fn paint(&self, r: &mut dyn Rasterizer) {
        r.set_clear_color(Color::WHITE);
        r.clear();

        self.ground(r);

        self.mountain(r, self.at(-4.0, 4.0), 9.0 * DX, 3.0 * DY);
        self.mountain(r, self.at(-11.0, 3.0), 13.0 * DX, 4.0 * DY);

        self.tree_row(r, self.at(0.0, 0.0));
        self.tree(r, off(self.at(0.0, 1.0), 3.5, 0.0), TreeSize::Small);
        self.tree_row(r, off(self.at(0.0, 2.0), 5.0, 0.0));

        for (i, rows) in [-3.0, -2.5, -2.0].into_iter().enumerate() {
            let base = self.at(-9.0, rows);
            self.tree(r, Vec2::new(base.x + i as f32 * BIG_TREE_WIDTH, base.y), TreeSize::Big);
        }
        for (i, rows) in [-6.5, -6.5, -6.0].into_iter().enumerate() {
            let base = self.at(-10.0, rows);
            self.tree(r, Vec2::new(base.x + i as f32 * BIG_TREE_WIDTH, base.y), TreeSize::Big);
        }

        r.set_clear_color(Color::BLACK);
    }
}
