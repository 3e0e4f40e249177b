//! Shared plumbing for the command-line tools.

use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;
use serde::Serialize;
use std::env;

/// Log warnings by default, `info` with `verbose`. `RUST_LOG` takes precedence.
pub fn init_env_logger(verbose: bool) {
    let mut builder = LoggerBuilder::new();
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    builder.filter(None, level);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None).init();
}

/// Print `value` as indented JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
