//! Coordinate and color types shared by the scene model and renderers.
//!
//! Canonical space for shapes:
//! - Normalized device coordinates in [-1, 1]
//! - Origin at the canvas center
//! - +X right, +Y up
//!
//! Pointer input arrives in logical pixels (top-left origin, +Y down) and is
//! converted with [`Viewport::to_ndc`].

mod color;
mod vec2;
mod viewport;

pub use color::Color;
pub use vec2::Vec2;
pub use viewport::Viewport;
