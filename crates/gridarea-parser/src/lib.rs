//! # Gridarea Parser
//!
//! Parser for Gridarea sketch scripts: a small text format that stands in
//! for a user drawing lines on a grid and clicking to measure regions.
//!
//! ```text
//! // a 2x2-cell square on a 20-unit grid
//! line (0, 0) -> (40, 0);
//! line (40, 0) -> (40, 40);
//! line (40, 40) -> (0, 40);
//! line (0, 40) -> (0, 0);
//! area (20, 20) [fill_color="teal", fill_opacity=0.3];
//! ```
//!
//! ## Usage
//!
//! ```
//! # use gridarea_parser::{parse, Command, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let script = parse("line (0, 0) -> (40, 0); area (20, 20);")?;
//!     assert_eq!(script.commands().len(), 2);
//!     assert!(matches!(script.commands()[1].inner(), Command::Area(_)));
//!     Ok(())
//! }
//! ```

pub mod error;

mod parser;
mod script;
mod span;
mod validate;

pub use script::{AreaQuery, Command, Script};
pub use span::{Span, Spanned};

use log::{debug, trace};

use error::ParseError;

/// Parse and validate a sketch script.
///
/// 1. **Parse** - Read statements, recovering after each malformed one
/// 2. **Validate** - Reject degenerate lines and bad attributes
///
/// # Errors
///
/// Returns a [`ParseError`] holding every error diagnostic (and any
/// warnings) when at least one error was found. Warnings alone do not fail
/// the parse; they are available from [`Script::warnings`].
pub fn parse(source: &str) -> Result<Script, ParseError> {
    let (statements, mut diagnostics) = parser::parse_statements(source);
    trace!(statements = statements.len(); "Statements parsed");

    let commands = validate::validate_statements(statements, &mut diagnostics);
    let warnings = diagnostics.into_result()?;

    debug!(commands = commands.len(), warnings = warnings.len(); "Sketch script parsed");
    Ok(Script::new(commands, warnings))
}
