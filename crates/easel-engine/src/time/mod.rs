//! Time subsystem.
//!
//! - `FrameClock`: one per window, ticked once per presented frame
//! - `RenderStats`: duration of a single scene redraw, for the diagnostic readout

mod frame_clock;
mod render_stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use render_stats::RenderStats;
