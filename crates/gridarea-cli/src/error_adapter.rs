//! Turns sketch errors into miette reports.
//!
//! A failed script yields one [`SketchReport`] per diagnostic, each carrying
//! the script source so the offending statement is shown. Errors without a
//! source location (I/O, configuration, a degenerate segment) yield a single
//! report.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use gridarea::GridAreaError;
use gridarea_parser::{
    Span,
    error::{Diagnostic, Severity},
};

/// A self-contained report ready for miette to render.
#[derive(Debug)]
pub struct SketchReport<'a> {
    message: String,
    code: Option<String>,
    severity: miette::Severity,
    help: Option<String>,
    source_code: Option<&'a str>,
    labels: Vec<LabeledSpan>,
    cause: Option<&'a (dyn Error + 'static)>,
}

impl<'a> SketchReport<'a> {
    /// Report a script diagnostic against the script it was found in.
    pub fn from_diagnostic(diag: &'a Diagnostic, source: &'a str) -> Self {
        let mut labels = vec![LabeledSpan::new_primary_with_span(
            Some(diag.label().to_string()),
            to_source_span(diag.span()),
        )];
        if let Some((span, label)) = diag.related() {
            labels.push(LabeledSpan::new_with_span(
                Some(label.to_string()),
                to_source_span(span),
            ));
        }

        Self {
            message: diag.message().to_string(),
            code: Some(diag.code().to_string()),
            severity: match diag.severity() {
                Severity::Error => miette::Severity::Error,
                Severity::Warning => miette::Severity::Warning,
            },
            help: diag.help().map(str::to_string),
            source_code: Some(source),
            labels,
            cause: None,
        }
    }

    /// Report an error that has no place in a script.
    pub fn from_error(err: &'a GridAreaError) -> Self {
        let (code, help) = match err {
            GridAreaError::DegenerateSegment(_) => (
                "gridarea::segment",
                Some("a segment needs two distinct endpoints"),
            ),
            GridAreaError::Io(_) => ("gridarea::io", None),
            GridAreaError::Config(_) => (
                "gridarea::config",
                Some("check the [grid] and [style] tables of the config file"),
            ),
            GridAreaError::Parse { .. } => ("gridarea::parse", None),
        };

        Self {
            message: err.to_string(),
            code: Some(code.to_string()),
            severity: miette::Severity::Error,
            help: help.map(str::to_string),
            source_code: None,
            labels: Vec::new(),
            cause: err.source(),
        }
    }
}

impl fmt::Display for SketchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for SketchReport<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
    }
}

impl MietteDiagnostic for SketchReport<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.code
            .as_deref()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(self.severity)
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.help
            .as_deref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.source_code
            .as_ref()
            .map(|source| source as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            return None;
        }
        Some(Box::new(self.labels.iter().cloned()))
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Every report for `err`: one per diagnostic of a failed script, or a
/// single report otherwise.
pub fn reports(err: &GridAreaError) -> Vec<SketchReport<'_>> {
    match err {
        GridAreaError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| SketchReport::from_diagnostic(diag, src))
            .collect(),
        _ => vec![SketchReport::from_error(err)],
    }
}

/// Render a report with miette's graphical handler.
pub fn render(report: &SketchReport<'_>) -> String {
    let mut out = String::new();
    if let Err(err) = miette::GraphicalReportHandler::new().render_report(&mut out, report) {
        return format!("{report} (rendering failed: {err})");
    }
    out
}

#[cfg(test)]
mod tests {
    use std::io;

    use gridarea::geometry::Point;
    use gridarea_parser::error::{ErrorCode, ParseError};

    use super::*;

    #[test]
    fn test_failed_script_gives_a_report_per_diagnostic() {
        let source = "line (0, 0) -> (0, 0);\narea (1, 1) [glow=1];\n";
        let err = GridAreaError::new_parse_error(
            ParseError::new(vec![
                Diagnostic::new(ErrorCode::E301, Span::new(36..40), "unknown attribute `glow`"),
                Diagnostic::new(ErrorCode::E200, Span::new(0..22), "line starts and ends at (0, 0)"),
            ]),
            source,
        );

        let reports = reports(&err);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].to_string(), "line starts and ends at (0, 0)");
        assert_eq!(reports[0].code().unwrap().to_string(), "E200");
        assert_eq!(reports[1].code().unwrap().to_string(), "E301");
        assert!(reports[1].source_code().is_some());
    }

    #[test]
    fn test_error_without_location() {
        let err = GridAreaError::DegenerateSegment(Point::new(5.0, 5.0));

        let reports = reports(&err);

        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].to_string(),
            "Degenerate segment: starts and ends at (5, 5)"
        );
        assert_eq!(reports[0].code().unwrap().to_string(), "gridarea::segment");
        assert!(reports[0].labels().is_none());
        assert!(reports[0].source_code().is_none());
    }

    #[test]
    fn test_config_and_io_codes() {
        let config = GridAreaError::Config("grid size must be a positive number".to_string());
        assert_eq!(
            SketchReport::from_error(&config).code().unwrap().to_string(),
            "gridarea::config"
        );

        let io = GridAreaError::Io(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        let report = SketchReport::from_error(&io);
        assert_eq!(report.code().unwrap().to_string(), "gridarea::io");
        assert!(report.source().is_some());
    }

    #[test]
    fn test_duplicate_attribute_is_a_warning_with_two_labels() {
        let diag = Diagnostic::new(ErrorCode::E302, Span::new(31..41), "`fill_color` is set more than once")
            .with_label("set again here")
            .with_related(Span::new(13..23), "first set here");

        let report = SketchReport::from_diagnostic(&diag, r#"area (1, 1) [fill_color="red", fill_color="blue"];"#);

        assert_eq!(report.severity(), Some(miette::Severity::Warning));
        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!(labels[0].label(), Some("set again here"));
        assert!(!labels[1].primary());
        assert_eq!(labels[1].label(), Some("first set here"));
    }

    #[test]
    fn test_render_shows_message_and_help() {
        let diag = Diagnostic::new(ErrorCode::E200, Span::new(0..22), "line starts and ends at (7, 7)")
            .with_help("a line needs two distinct endpoints");
        let report = SketchReport::from_diagnostic(&diag, "line (7, 7) -> (7, 7);");

        let rendered = render(&report);

        assert!(rendered.contains("line starts and ends at (7, 7)"));
        assert!(rendered.contains("a line needs two distinct endpoints"));
    }
}
