//! GPU rendering.
//!
//! Shapes and painters draw into a [`TriangleBatch`] on the CPU; the
//! [`TriangleRenderer`] uploads the batch and draws it in one pass.
//!
//! Convention:
//! - batch geometry is already in NDC (+Y up), so the shader is a passthrough
//! - colors are per vertex, copied from the sticky rasterizer color

mod batch;
mod ctx;
mod triangle;

pub use batch::{ColorVertex, TriangleBatch};
pub use ctx::{RenderCtx, RenderTarget, vertex_limit};
pub use triangle::TriangleRenderer;
