//! CLI logic for the Gridarea sketch tool.
//!
//! Reads a sketch script, applies it to a [`Sketch`], and writes the
//! annotation report to a file or stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use gridarea::{GridAreaError, Sketch};

use error_adapter::{SketchReport, render};

/// Run the Gridarea CLI application
///
/// # Errors
///
/// Returns `GridAreaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Sketch script errors
pub fn run(args: &Args) -> Result<(), GridAreaError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing sketch"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let mut sketch = Sketch::new(app_config)?;
    let script = sketch.run(&source)?;
    for warning in script.warnings() {
        warn!("{}", render(&SketchReport::from_diagnostic(warning, &source)));
    }

    let report = sketch.report();
    match &args.output {
        Some(path) => {
            fs::write(path, &report)?;
            info!(output_file = path, annotations = sketch.annotations().len(); "Report written");
        }
        None => io::stdout().write_all(report.as_bytes())?,
    }

    Ok(())
}
