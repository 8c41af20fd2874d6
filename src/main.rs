// src/main.rs

//! Command-line entry point for `palette-gen`.
//!
//! Takes no arguments and reads no configuration: every invocation
//! computes the same 240-entry palette and writes the same header bytes to
//! standard output. Diagnostics go to stderr through the logger.

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use log::info;

use palette_gen::{header, palette};

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("generating xterm256 palette header");

    let colors = palette::xterm256();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    header::render(&mut out, &colors).context("Failed to write palette header to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    info!("wrote {} palette entries", colors.len());
    Ok(())
}
