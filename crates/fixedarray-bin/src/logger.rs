use std::io;

use tracing::Dispatch;
use tracing_subscriber::{Registry, filter::Targets, prelude::*};

use crate::config;

/// Target shared by the library and the executable.
const TARGET: &str = "fixedarray";

/// Install the global subscriber. Logging stays off unless `FIXEDARRAY_LOG` names a level.
pub fn install() -> anyhow::Result<()> {
    let Some(level) = config::log_level() else { return Ok(()) };

    let filter = Targets::new().with_target(TARGET, level);

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    let dispatch = if config::log_json() {
        Dispatch::new(Registry::default().with(fmt_layer.json().with_filter(filter)))
    } else {
        Dispatch::new(Registry::default().with(fmt_layer.with_filter(filter)))
    };
    dispatch.try_init()?;
    Ok(())
}
