//! Validation of parsed statements.
//!
//! Checks what the grammar cannot: lines must have two distinct endpoints,
//! and `area` attributes must be known and carry values of the right kind.
//! Valid statements become [`Command`]s; every problem becomes a diagnostic.

use std::collections::HashMap;

use gridarea_core::color::Color;

use crate::{
    error::{Diagnostic, Diagnostics, ErrorCode},
    parser::{Attribute, AttributeValue, Statement},
    script::{AreaQuery, Command},
    span::{Span, Spanned},
};

const FILL_COLOR: &str = "fill_color";
const FILL_OPACITY: &str = "fill_opacity";

/// Validate statements, returning the commands that passed.
pub(crate) fn validate_statements(
    statements: Vec<Spanned<Statement<'_>>>,
    diagnostics: &mut Diagnostics,
) -> Vec<Spanned<Command>> {
    statements
        .into_iter()
        .filter_map(|statement| {
            let span = statement.span();
            match statement.into_inner() {
                Statement::Line(segment) => {
                    if segment.is_degenerate() {
                        diagnostics.push(
                            Diagnostic::new(
                                ErrorCode::E200,
                                span,
                                format!("line starts and ends at {}", segment.start()),
                            )
                            .with_help("a line needs two distinct endpoints"),
                        );
                        return None;
                    }
                    Some(Spanned::new(Command::Line(segment), span))
                }
                Statement::Area { point, attributes } => {
                    let query = validate_attributes(AreaQuery::new(point), &attributes, diagnostics)?;
                    Some(Spanned::new(Command::Area(query), span))
                }
            }
        })
        .collect()
}

/// Apply `area` attributes to `query`, or `None` if any of them is invalid.
fn validate_attributes(
    mut query: AreaQuery,
    attributes: &[Attribute<'_>],
    diagnostics: &mut Diagnostics,
) -> Option<AreaQuery> {
    let mut valid = true;
    let mut first_seen: HashMap<&str, Span> = HashMap::new();

    for attribute in attributes {
        let name = *attribute.name.inner();
        let name_span = attribute.name.span();

        if let Some(first) = first_seen.get(name) {
            diagnostics.push(
                Diagnostic::new(
                    ErrorCode::E302,
                    name_span,
                    format!("`{name}` is set more than once"),
                )
                .with_label("set again here")
                .with_related(*first, "first set here")
                    .with_help("the last value is used"),
            );
        } else {
            first_seen.insert(name, name_span);
        }

        let value_span = attribute.value.span();
        match (name, attribute.value.inner()) {
            (FILL_COLOR, AttributeValue::Text(text)) => match Color::new(text) {
                Ok(color) => query = query.with_fill_color(color),
                Err(reason) => {
                    valid = false;
                    diagnostics.push(invalid_value(
                        "invalid `fill_color` value",
                        value_span,
                        reason,
                        "use a CSS color such as `\"#00aa00\"` or `\"teal\"`",
                    ));
                }
            },
            (FILL_COLOR, AttributeValue::Number(_)) => {
                valid = false;
                diagnostics.push(invalid_value(
                    "`fill_color` expects a color string",
                    value_span,
                    "found a number",
                    "quote the color, e.g. `fill_color=\"teal\"`",
                ));
            }
            (FILL_OPACITY, AttributeValue::Number(opacity)) if (0.0..=1.0).contains(opacity) => {
                query = query.with_fill_opacity(*opacity);
            }
            (FILL_OPACITY, AttributeValue::Number(_)) => {
                valid = false;
                diagnostics.push(invalid_value(
                    "`fill_opacity` is out of range",
                    value_span,
                    "must be between 0 and 1",
                    "use a value such as `fill_opacity=0.2`",
                ));
            }
            (FILL_OPACITY, AttributeValue::Text(_)) => {
                valid = false;
                diagnostics.push(invalid_value(
                    "`fill_opacity` expects a number",
                    value_span,
                    "found a string",
                    "use a value such as `fill_opacity=0.2`",
                ));
            }
            _ => {
                valid = false;
                diagnostics.push(
                    Diagnostic::new(ErrorCode::E301, name_span, format!("unknown attribute `{name}`"))
                        .with_help("supported attributes are `fill_color` and `fill_opacity`"),
                );
            }
        }
    }

    valid.then_some(query)
}

fn invalid_value(
    message: &str,
    span: Span,
    label: impl Into<String>,
    help: &str,
) -> Diagnostic {
    Diagnostic::new(ErrorCode::E300, span, message)
        .with_label(label)
        .with_help(help)
}

#[cfg(test)]
mod tests {
    use gridarea_core::geometry::{Point, Segment};

    use super::*;
    use crate::parser::parse_statements;

    fn validate(source: &str) -> (Vec<Spanned<Command>>, Diagnostics) {
        let (statements, mut diagnostics) = parse_statements(source);
        let commands = validate_statements(statements, &mut diagnostics);
        (commands, diagnostics)
    }

    #[test]
    fn test_valid_line() {
        let (commands, diagnostics) = validate("line (0, 0) -> (0, 40);");

        assert!(diagnostics.into_result().unwrap().is_empty());
        assert_eq!(
            *commands[0].inner(),
            Command::Line(Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 40.0)))
        );
    }

    #[test]
    fn test_degenerate_line() {
        let (commands, diagnostics) = validate("line (20, 20) -> (20, 20);");

        assert!(commands.is_empty());
        let err = diagnostics.into_result().unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), ErrorCode::E200);
        assert_eq!(err.diagnostics()[0].span(), Span::new(0..26));
    }

    #[test]
    fn test_area_attributes_applied() {
        let (commands, _) = validate(r#"area (5, 5) [fill_color="blue", fill_opacity=0.4];"#);

        let Command::Area(query) = commands[0].inner() else {
            panic!("Expected area command");
        };
        assert_eq!(query.point(), Point::new(5.0, 5.0));
        assert_eq!(query.fill_color(), Some(Color::new("blue").unwrap()));
        assert_eq!(query.fill_opacity(), Some(0.4));
    }

    #[test]
    fn test_invalid_color() {
        let (commands, diagnostics) = validate(r#"area (5, 5) [fill_color="blurple"];"#);

        assert!(commands.is_empty());
        let err = diagnostics.into_result().unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), ErrorCode::E300);
        assert_eq!(err.diagnostics()[0].message(), "invalid `fill_color` value");
    }

    #[test]
    fn test_opacity_out_of_range() {
        let (_, diagnostics) = validate("area (5, 5) [fill_opacity=1.5];");

        let err = diagnostics.into_result().unwrap_err();
        assert_eq!(err.diagnostics()[0].message(), "`fill_opacity` is out of range");
    }

    #[test]
    fn test_wrong_value_kinds() {
        let (_, diagnostics) = validate(r#"area (5, 5) [fill_color=3, fill_opacity="high"];"#);

        let err = diagnostics.into_result().unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert!(
            err.diagnostics()
                .iter()
                .all(|d| d.code() == ErrorCode::E300)
        );
    }

    #[test]
    fn test_unknown_attribute() {
        let (_, diagnostics) = validate("area (5, 5) [stroke_width=2];");

        let err = diagnostics.into_result().unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), ErrorCode::E301);
        assert_eq!(err.diagnostics()[0].message(), "unknown attribute `stroke_width`");
    }

    #[test]
    fn test_duplicate_attribute_warns_and_last_wins() {
        let (commands, diagnostics) = validate("area (5, 5) [fill_opacity=0.1, fill_opacity=0.3];");

        let warnings = diagnostics.into_result().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code(), ErrorCode::E302);
        assert_eq!(warnings[0].related().map(|(_, label)| label), Some("first set here"));

        let Command::Area(query) = commands[0].inner() else {
            panic!("Expected area command");
        };
        assert_eq!(query.fill_opacity(), Some(0.3));
    }
}
