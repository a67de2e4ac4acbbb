use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use project_snapshot::cli::{Cli, Command};
use project_snapshot::concat::Concatenator;
use project_snapshot::config::{ConcatConfig, ListConfig};
use project_snapshot::{lister, logging};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::List(args) => run_list(ListConfig::from(args)),
        Command::Concat(args) => run_concat(ConcatConfig::from_args(args)?),
    }
}

fn run_list(config: ListConfig) -> Result<()> {
    // Build the whole list before printing so a failed walk prints nothing.
    let files = lister::list_files(&config.root, &config.exclusions)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(lister::render_file_list(&files).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_concat(config: ConcatConfig) -> Result<()> {
    debug!(
        "concatenating {} entries from {:?}",
        config.files.len(),
        config.root
    );
    let concatenator = Concatenator::new(&config.root, config.max_size);
    concatenator
        .write_to_path(&config.files, &config.output)
        .with_context(|| format!("writing {}", config.output.display()))?;
    println!("Output written to {}", config.output.display());
    Ok(())
}
