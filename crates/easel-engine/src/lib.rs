//! easel engine.
//!
//! A small drawing canvas: shapes accumulate in a [`scene::Scene`], every
//! frame redraws them through the [`raster::Rasterizer`] capability, and the
//! scene round-trips through a JSON save file ([`persist`]).
//!
//! The platform half (window, GPU, input) follows the usual split:
//! `window::Runtime` drives a `core::App`, which draws into a
//! `render::TriangleBatch` each frame.

pub mod coords;
pub mod raster;
pub mod scene;
pub mod persist;
pub mod painter;
pub mod session;

pub mod logging;
pub mod time;

pub mod device;
pub mod window;
pub mod input;
pub mod render;
pub mod core;
