//! Command-line argument definitions for the Gridarea CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Gridarea sketch tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input sketch script
    #[arg(help = "Path to the input sketch script")]
    pub input: String,

    /// Path to the output report; the report goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
