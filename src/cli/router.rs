//! Turns parsed arguments into a projector run.

use crate::cli::args::Cli;
use crate::config::{ConfigLoader, ProjectorConfig};
use crate::projector::{self, RunSummary};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Resolve the effective configuration: defaults, file, environment, flags.
pub fn resolve_config(cli: &Cli, working_dir: &Path) -> Result<ProjectorConfig> {
    let mut loader = ConfigLoader::new(working_dir);
    if let Some(file) = &cli.config {
        loader = loader.with_file(file);
    }

    let mut config = loader.load()?;
    if let Some(input) = &cli.input {
        config = config.with_input(input);
    }
    if let Some(output) = &cli.output {
        config = config.with_output(output);
    }

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Execute the projection described by the parsed arguments
pub fn execute(cli: &Cli, working_dir: &Path) -> Result<RunSummary> {
    let config = resolve_config(cli, working_dir)?;
    Ok(projector::run(&config)?)
}
