//! Diagnostics reported while reading a sketch script.
//!
//! Every [`Diagnostic`] carries an [`ErrorCode`], and the code decides the
//! [`Severity`]: only a duplicate attribute (E302) is a warning. A diagnostic
//! points at one span of the script and may point at one related span, such
//! as the place an attribute was first set.
//!
//! ```
//! # use gridarea_parser::error::{Diagnostic, ErrorCode};
//! # use gridarea_parser::Span;
//! let diag = Diagnostic::new(ErrorCode::E200, Span::new(0..24), "line starts and ends at (7, 7)")
//!     .with_help("a line needs two distinct endpoints");
//!
//! assert!(diag.severity().is_error());
//! assert_eq!(diag.label(), "degenerate line");
//! ```

mod diagnostic;
mod error_code;
mod parse_error;
mod severity;

pub(crate) use parse_error::Diagnostics;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
pub use severity::Severity;
