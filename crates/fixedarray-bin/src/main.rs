use std::process::exit;

use anyhow::Result;
use fixedarray::prelude::*;
use tracing::{debug, info};

mod config;
mod logger;

const EXIT_ERR: i32 = 1;

fn main() {
    let exit_code = match run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("failed to run `fixedarray`, error={e}");
            EXIT_ERR
        }
    };
    exit(exit_code)
}

fn run() -> Result<()> {
    logger::install()?;

    // Literal initialization, with the length inferred and spelled out.
    let a = FixedArray::new([1, 2, 3]);
    let b: FixedArray<i32, 3> = FixedArray::from([1, 2, 3]);
    debug!(?a, ?b, same = (a == b), "declared literal arrays");

    let d = StaticArray::zeroed();
    info!(len = d.len(), "printing zero-initialized array");
    print_all(&d)?;

    Ok(())
}
