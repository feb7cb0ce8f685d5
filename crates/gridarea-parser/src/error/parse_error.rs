use std::fmt;

use crate::error::Diagnostic;

/// A sketch script that cannot be applied.
///
/// Holds every diagnostic found in the script, errors and warnings alike, in
/// source order. Syntax errors and validation errors come from separate
/// passes but are interleaved by position.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(mut diagnostics: Vec<Diagnostic>) -> Self {
        diagnostics.sort_by_key(|diag| diag.span().start());
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The diagnostics that made the script fail.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity().is_error())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self.errors();
        let Some(first) = errors.next() else {
            return write!(f, "sketch script rejected");
        };
        write!(f, "{first}")?;
        let more = errors.count();
        if more > 0 {
            write!(f, " (and {more} more)")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Diagnostics gathered over both passes of one parse.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    reported: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.reported.push(diagnostic);
    }

    /// Fails with everything reported if any of it is an error, otherwise
    /// hands back the warnings.
    pub(crate) fn into_result(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.reported.iter().any(|diag| diag.severity().is_error()) {
            Err(ParseError::new(self.reported))
        } else {
            Ok(self.reported)
        }
    }
}
