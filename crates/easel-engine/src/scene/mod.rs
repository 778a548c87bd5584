//! Scene model: the shapes a user has drawn, in paint order.
//!
//! Responsibilities:
//! - hold the closed set of shape variants (`Shape`)
//! - keep them in insertion order, which is also paint and persistence order
//! - redraw everything through a [`Rasterizer`](crate::raster::Rasterizer) on demand
//!
//! Shape-specific payloads and geometry live one file per shape under `scene::shapes`.

mod kind;
mod list;
mod shape;

pub mod shapes;

pub use kind::{ShapeKind, UnknownShapeKind};
pub use list::Scene;
pub use shape::Shape;
pub use shapes::{Circle, Point, Triangle};
