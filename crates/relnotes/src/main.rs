//! relnotes: print a release README to stdout
//!
//! The README is the repository's summary document followed by a
//! "Recent Changes" section listing commits of the latest tagged releases.

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use relnotes::assemble::assemble;
use relnotes::config::Config;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the README
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    config.validate()?;
    let source = config.history_source()?;

    info!(
        backend = ?config.backend,
        start = %config.start_dir().display(),
        "Assembling release README"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    let result = assemble(&*source, &config.assemble_options(), &mut out);
    out.flush().context("Failed to flush standard output")?;
    result?;

    Ok(())
}
