//! easel studio: paint points, triangles and circles with the mouse.
//!
//! Keys: `P`/`T`/`C` shape, `R`/`G`/`W` color, `1`/`2`/`3` + arrows tune a
//! channel, `[`/`]` size, `-`/`=` circle segments, `X` clear, `M`
//! landscape, `S` save, `L` load, `Esc` quit.

mod config;
mod studio;

use anyhow::Result;
use easel_engine::device::GpuInit;
use easel_engine::logging::{LoggingConfig, init_logging};
use easel_engine::window::{LogicalSize, Runtime, RuntimeConfig};

use crate::config::StudioConfig;
use crate::studio::Studio;

fn main() -> Result<()> {
    let config = StudioConfig::from_args(std::env::args().skip(1))?;

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });
    log::info!("save file: {}", config.save_path.display());

    let runtime = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(config.width, config.height),
    };

    Runtime::run(runtime, GpuInit::default(), Studio::new(config))
}
