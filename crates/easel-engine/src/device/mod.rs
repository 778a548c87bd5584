//! GPU device + surface management.
//!
//! - creates the wgpu Instance/Adapter/Device/Queue for a window
//! - configures the surface and keeps it sized to the window
//! - hands out one frame (texture view + encoder) at a time

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
