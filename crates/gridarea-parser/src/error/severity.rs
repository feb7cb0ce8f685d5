use std::fmt;

/// Whether a diagnostic stops the script from being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// No command of the script is applied.
    Error,

    /// Reported, but the script is still applied.
    Warning,
}

impl Severity {
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    pub fn is_warning(self) -> bool {
        self == Severity::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}
