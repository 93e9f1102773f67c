//! `themeconf` command-line tool.
//!
//! ```text
//! themeconf <BASE_DIR> [--file NAME] [--output PATH] [--compact] [-v]
//! ```
//!
//! Reads `<BASE_DIR>/theme.conf.yaml`, merges it over the default theme and
//! prints the result as JSON. Any failure exits non-zero without writing
//! output.

mod cli;
mod logging;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use themeconf::Merger;
use tracing::info;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let merger = Merger::new(&cli.base_dir).with_options(cli.merge_options());
    let merged = merger
        .merge_file()
        .with_context(|| format!("failed to convert theme in {}", cli.base_dir.display()))?;

    let mut json = if cli.compact {
        merged.to_json_compact()?
    } else {
        merged.to_json_pretty()?
    };
    json.push('\n');

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = json.len(), "wrote theme");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
