use gridarea_core::{
    color::Color,
    geometry::{Point, Segment},
};
use gridarea_parser::{Command, Span, error::ErrorCode, parse};

#[test]
fn test_square_with_area_query() {
    let source = r#"
        // a 2x2-cell square
        line (0, 0) -> (40, 0);
        line (40, 0) -> (40, 40);
        line (40, 40) -> (0, 40);
        line (0, 40) -> (0, 0);
        area (20, 20);
    "#;

    let script = parse(source).expect("Failed to parse");

    assert_eq!(script.commands().len(), 5);
    assert!(script.warnings().is_empty());

    match script.commands()[0].inner() {
        Command::Line(segment) => {
            assert_eq!(
                *segment,
                Segment::new(Point::new(0.0, 0.0), Point::new(40.0, 0.0))
            );
        }
        _ => panic!("Expected Line command"),
    }

    match script.commands()[4].inner() {
        Command::Area(query) => {
            assert_eq!(query.point(), Point::new(20.0, 20.0));
            assert_eq!(query.fill_color(), None);
            assert_eq!(query.fill_opacity(), None);
        }
        _ => panic!("Expected Area command"),
    }
}

#[test]
fn test_statements_share_a_line() {
    let script = parse("line (0,0)->(20,0); line (20,0)->(20,20);").expect("Failed to parse");

    assert_eq!(script.commands().len(), 2);
    assert_eq!(script.commands()[1].span().start(), 20);
}

#[test]
fn test_area_with_fill() {
    let script = parse(r#"area (-5.5, 10) [fill_color="rgb(0, 128, 0)", fill_opacity=0.5];"#)
        .expect("Failed to parse");

    let Command::Area(query) = script.commands()[0].inner() else {
        panic!("Expected Area command");
    };
    assert_eq!(query.point(), Point::new(-5.5, 10.0));
    assert_eq!(query.fill_color(), Some(Color::new("rgb(0, 128, 0)").unwrap()));
    assert_eq!(query.fill_opacity(), Some(0.5));
}

#[test]
fn test_empty_script() {
    let script = parse("  // nothing drawn yet\n").expect("Failed to parse");

    assert!(script.is_empty());
}

#[test]
fn test_duplicate_attribute_is_a_warning() {
    let script = parse(r#"area (1, 1) [fill_color="red", fill_color="blue"];"#)
        .expect("Warnings must not fail the parse");

    assert_eq!(script.warnings().len(), 1);
    assert_eq!(script.warnings()[0].code(), ErrorCode::E302);

    let Command::Area(query) = script.commands()[0].inner() else {
        panic!("Expected Area command");
    };
    assert_eq!(query.fill_color(), Some(Color::new("blue").unwrap()));
}

#[test]
fn test_degenerate_line_is_rejected() {
    let source = "line (0, 0) -> (40, 0);\nline (7, 7) -> (7, 7);\n";

    let err = parse(source).expect_err("Degenerate line must fail");

    assert_eq!(err.diagnostics().len(), 1);
    let diagnostic = &err.diagnostics()[0];
    assert_eq!(diagnostic.code(), ErrorCode::E200);
    assert_eq!(diagnostic.span(), Span::new(24..46));
}

#[test]
fn test_syntax_and_validation_errors_are_reported_together() {
    let source = "line (0, 0) -> (0, 0);\nline (1, 1) (2, 2);\narea (0, 0) [glow=1];\n";

    let err = parse(source).expect_err("Script must fail");

    let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();
    assert_eq!(codes, [ErrorCode::E200, ErrorCode::E100, ErrorCode::E301]);
}

#[test]
fn test_error_display() {
    let err = parse("line (0, 0) -> (1, 1)").expect_err("Missing semicolon must fail");

    assert_eq!(err.to_string(), "error[E101]: missing `;` after statement");

    let err = parse("line (0, 0) -> (0, 0);\narea (1, 1) [glow=1];\n").expect_err("Script must fail");
    assert_eq!(
        err.to_string(),
        "error[E200]: line starts and ends at (0, 0) (and 1 more)"
    );
}
