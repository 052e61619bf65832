//! docs2jekyll - Turn generated HTML documentation into Jekyll pages.

mod cli;
mod config;
mod convert;
mod error;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, USAGE};
use config::Config;
use convert::convert_tree;
use error::ConvertError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(ConvertError::Usage) = err.downcast_ref::<ConvertError>() {
                println!("{USAGE}");
            } else {
                log!("error"; "{err:#}");
            }
            ExitCode::from(error::exit_code(&err))
        }
    }
}

/// Load config and convert the target tree.
///
/// Per-file failures are logged inside the run and never fail it.
fn run(cli: &Cli) -> Result<()> {
    let target = cli.target.as_deref().ok_or(ConvertError::Usage)?;
    let config = Config::load(cli)?;

    convert_tree(target, &config.convert, cli.dry_run)?;
    Ok(())
}
