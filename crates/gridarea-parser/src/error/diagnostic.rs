use std::fmt;

use crate::{
    error::{ErrorCode, Severity},
    span::Span,
};

/// One problem found in a sketch script.
///
/// ```text
/// error[E200]: line starts and ends at (20, 20)
///   --> square.sketch:3:1
///    |
///  3 | line (20, 20) -> (20, 20);
///    | ^^^^^^^^^^^^^^^^^^^^^^^^^^ degenerate line
///    |
///    = help: a line needs two distinct endpoints
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    span: Span,
    label: String,
    related: Option<(Span, String)>,
    help: Option<String>,
}

impl Diagnostic {
    /// Reports `code` at `span`. The span is labelled with the code's
    /// description until [`with_label`](Self::with_label) replaces it.
    pub fn new(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            label: code.description().to_string(),
            related: None,
            help: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Points at a second place in the script that explains this one.
    pub fn with_related(mut self, span: Span, label: impl Into<String>) -> Self {
        self.related = Some((span, label.into()));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending text.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn related(&self) -> Option<(Span, &str)> {
        self.related
            .as_ref()
            .map(|(span, label)| (*span, label.as_str()))
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity(), self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}
