use std::fmt;

use crate::error::Severity;

/// What went wrong in a sketch script.
///
/// The hundreds digit names the stage that found the problem: `E0xx` while
/// reading characters, `E1xx` while reading a statement, `E2xx` while
/// checking a line, `E3xx` while checking `area` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A quoted attribute value is not closed before the end of the line.
    E001,
    /// A character that cannot start a statement, such as `#`.
    E002,
    /// A statement that is neither `line P -> Q;` nor `area P [attrs];`.
    E100,
    /// A statement without its closing `;`.
    E101,
    /// A line whose endpoints are the same point.
    E200,
    /// An attribute value of the wrong kind or out of range.
    E300,
    /// An attribute other than `fill_color` or `fill_opacity`.
    E301,
    /// An attribute given twice on one `area`; the last value wins.
    E302,
}

impl ErrorCode {
    fn entry(self) -> (&'static str, &'static str) {
        match self {
            ErrorCode::E001 => ("E001", "unterminated string literal"),
            ErrorCode::E002 => ("E002", "unexpected character"),
            ErrorCode::E100 => ("E100", "unexpected input"),
            ErrorCode::E101 => ("E101", "missing `;`"),
            ErrorCode::E200 => ("E200", "degenerate line"),
            ErrorCode::E300 => ("E300", "invalid attribute value"),
            ErrorCode::E301 => ("E301", "unknown attribute"),
            ErrorCode::E302 => ("E302", "duplicate attribute"),
        }
    }

    /// Only a duplicate attribute is a warning.
    pub fn severity(self) -> Severity {
        match self {
            ErrorCode::E302 => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Short text used to label the offending span.
    pub fn description(self) -> &'static str {
        self.entry().1
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry().0)
    }
}
