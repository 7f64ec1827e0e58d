// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixwerk: per-pixel image filters
//
// Entry point. Initialises logging, resolves configuration, loads the images
// and writes every filter result to the output directory.

mod cli;
mod run;

use std::process::ExitCode;

use clap::Parser;
use pixwerk_core::error::Result;
use pixwerk_core::human_errors::humanize_error;
use pixwerk_filter::{DirectorySink, ImageProcessor};

use cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("Pixwerk starting");

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let human = humanize_error(&err);
            tracing::error!(error = %err, severity = ?human.severity, "run failed");
            eprintln!("{human}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    let mut first = ImageProcessor::open(&cli.first)?;
    let second = cli
        .second
        .as_ref()
        .map(ImageProcessor::open)
        .transpose()?;

    let mut sink = DirectorySink::new(&config.output_dir, DirectorySink::stem_for(&cli.first))?;
    run::run(
        &mut first,
        second.as_ref(),
        &config.filters,
        &config,
        &mut sink,
    )?;

    tracing::info!(
        written = sink.written().len(),
        dir = %sink.dir().display(),
        "Pixwerk finished"
    );
    Ok(())
}
