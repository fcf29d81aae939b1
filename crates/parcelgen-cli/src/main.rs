mod logging;

use std::io::{self, BufWriter, Write};

use parcelgen_core::RULE_TEMPLATES;
use parcelgen_generate::{FixtureEngine, GenerateOptions, GenerationError};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Logging(#[from] logging::LoggingError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), CliError> {
    logging::init_logging()?;

    let engine = FixtureEngine::new(GenerateOptions::default());
    let fixtures = engine.run(&RULE_TEMPLATES)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for package in &fixtures.packages {
        writeln!(out, "{}", package.package_id)?;
    }
    out.flush()?;

    tracing::info!(
        event = "run_finished",
        run_id = %fixtures.report.run_id,
        packages = fixtures.report.packages,
        status = "success"
    );

    Ok(())
}
