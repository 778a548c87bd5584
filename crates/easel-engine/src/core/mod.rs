//! Contract between the window runtime and applications.
//!
//! The runtime owns the event loop, window and GPU; applications implement
//! [`App`] and see the world through a per-frame [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
