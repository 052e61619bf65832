//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use clap::Parser;
use std::path::PathBuf;

/// Usage line printed when no target directory is given.
pub const USAGE: &str = "Usage: docs2jekyll <target-dir>";

/// Convert generated HTML documentation into Jekyll pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    // Optional so a missing value gets our usage line and exit code, not clap's.
    /// Directory holding the generated HTML files
    pub target: Option<PathBuf>,

    /// Config file name (default: docs2jekyll.toml)
    #[arg(short = 'C', long, default_value = "docs2jekyll.toml")]
    pub config: PathBuf,

    /// Front matter layout for every page
    #[arg(long)]
    pub layout: Option<String>,

    /// URL segment placed in front of every permalink (default: target dir name)
    #[arg(long = "permalink-root")]
    pub permalink_root: Option<String>,

    /// Show what would be converted without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}
