use super::Vec2;

/// Drawable size in logical pixels.
///
/// Bridges pointer input (pixels, top-left origin) and shape space (NDC).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Converts a logical-pixel position to NDC (+Y up, center origin).
    pub fn to_ndc(self, px: Vec2) -> Vec2 {
        let hw = self.width.max(1.0) / 2.0;
        let hh = self.height.max(1.0) / 2.0;
        Vec2::new((px.x - hw) / hw, (hh - px.y) / hh)
    }

    /// Half of a pixel length, expressed along each NDC axis.
    ///
    /// Used to expand a point primitive of `px` diameter into a quad.
    pub fn pixel_extent_ndc(self, px: f32) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new(px / w, px / h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let vp = Viewport::new(400.0, 400.0);
        assert_eq!(vp.to_ndc(Vec2::new(200.0, 200.0)), Vec2::zero());
    }

    #[test]
    fn corners_map_to_unit_square() {
        let vp = Viewport::new(400.0, 200.0);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 200.0)), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn pixel_extent_is_half_diameter_in_ndc() {
        let vp = Viewport::new(400.0, 200.0);
        // 10px across a 400px-wide canvas spans 10/200 NDC, half of that is 10/400.
        assert_eq!(vp.pixel_extent_ndc(10.0), Vec2::new(0.025, 0.05));
    }
}
