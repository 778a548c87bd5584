use core::fmt;
use std::time::Duration;

/// Measurement of one full scene redraw.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RenderStats {
    /// Shapes drawn in the pass.
    pub shape_count: usize,
    /// Wall-clock time spent issuing draws.
    pub duration: Duration,
}

impl RenderStats {
    #[inline]
    pub const fn new(shape_count: usize, duration: Duration) -> Self {
        Self { shape_count, duration }
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }

    /// Redraws per second this pass would sustain. Infinite for a zero-length pass.
    #[inline]
    pub fn fps(&self) -> f64 {
        1000.0 / self.duration_ms()
    }

    /// The figure older builds printed (`10000 / ms`), kept for comparing readouts.
    #[inline]
    pub fn legacy_fps(&self) -> f64 {
        10000.0 / self.duration_ms()
    }
}

impl fmt::Display for RenderStats {
    /// `numdot: <shapes> ms: <floor ms> fps: <floor fps>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `as` saturates, so an infinite fps prints as u64::MAX.
        write!(
            f,
            "numdot: {} ms: {} fps: {}",
            self.shape_count,
            self.duration_ms().floor() as u64,
            self.fps().floor() as u64
        )
    }
}
