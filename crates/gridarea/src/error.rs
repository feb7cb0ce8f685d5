//! Error types for Gridarea operations.
//!
//! This module provides the main error type [`GridAreaError`] which wraps
//! the error conditions that can occur while building and querying a sketch.

use std::io;

use thiserror::Error;

use gridarea_core::geometry::Point;
use gridarea_parser::error::ParseError;

/// The main error type for Gridarea operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured error information with source code
/// spans. This provides detailed error information that can be used for rich
/// error reporting.
#[derive(Debug, Error)]
pub enum GridAreaError {
    /// A segment whose start and end are the same point.
    #[error("Degenerate segment: starts and ends at {0}")]
    DegenerateSegment(Point),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GridAreaError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
