//! Integration tests for the Sketch API

use gridarea::{
    GridAreaError, Sketch,
    annotation::Fill,
    color::Color,
    config::{AppConfig, GridConfig, StyleConfig},
    geometry::{Point, Segment},
};

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn add_polygon(sketch: &mut Sketch, points: &[Point]) {
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        sketch
            .add_segment(Segment::new(start, end))
            .expect("Failed to add segment");
    }
}

const SQUARE_SCRIPT: &str = r#"
    // a 2x2-cell square
    line (0, 0) -> (40, 0);
    line (40, 0) -> (40, 40);
    line (40, 40) -> (0, 40);
    line (0, 40) -> (0, 0);
    area (20, 20);
"#;

#[test]
fn test_square_area() {
    let mut sketch = Sketch::default();
    add_polygon(&mut sketch, &[p(0.0, 0.0), p(40.0, 0.0), p(40.0, 40.0), p(0.0, 40.0)]);

    assert_eq!(sketch.loops().len(), 1);
    assert_eq!(sketch.loops()[0].len(), 4);

    let annotation = sketch.query_area(p(20.0, 20.0)).expect("Point is enclosed");
    assert_eq!(annotation.area(), 4.0);
    assert_eq!(annotation.anchor(), p(20.0, 20.0));
    assert_eq!(annotation.fill(), Fill::default());
}

#[test]
fn test_smaller_enclosing_loop_wins() {
    let mut sketch = Sketch::default();
    add_polygon(&mut sketch, &[p(0.0, 0.0), p(100.0, 0.0), p(100.0, 60.0), p(0.0, 60.0)]);
    add_polygon(&mut sketch, &[p(20.0, 20.0), p(40.0, 20.0), p(40.0, 40.0), p(20.0, 40.0)]);

    assert_eq!(sketch.loops().len(), 2);
    let annotation = sketch.query_area(p(30.0, 30.0)).expect("Point is enclosed");
    assert_eq!(annotation.area(), 1.0);

    // Outside the small square only the large one encloses the point.
    let annotation = sketch.query_area(p(70.0, 10.0)).expect("Point is enclosed");
    assert_eq!(annotation.area(), 15.0);
}

#[test]
fn test_duplicate_query_is_suppressed() {
    let mut sketch = Sketch::default();
    add_polygon(&mut sketch, &[p(0.0, 0.0), p(40.0, 0.0), p(40.0, 40.0), p(0.0, 40.0)]);

    assert!(sketch.query_area(p(20.0, 20.0)).is_some());
    assert!(sketch.query_area(p(30.0, 10.0)).is_none());
    assert_eq!(sketch.annotations().len(), 1);
}

#[test]
fn test_segments_added_between_queries() {
    let mut sketch = Sketch::default();
    add_polygon(&mut sketch, &[p(0.0, 0.0), p(40.0, 0.0), p(40.0, 40.0)]);
    assert!(sketch.query_area(p(30.0, 10.0)).is_some());

    // Extending the sketch makes a new region queryable.
    add_polygon(&mut sketch, &[p(100.0, 0.0), p(140.0, 0.0), p(140.0, 40.0), p(100.0, 40.0)]);
    assert!(sketch.query_area(p(120.0, 20.0)).is_some());
    assert_eq!(sketch.annotations().len(), 2);
}

#[test]
fn test_degenerate_segment_is_rejected() {
    let mut sketch = Sketch::default();

    let result = sketch.add_segment(Segment::new(p(5.0, 5.0), p(5.0, 5.0)));

    assert!(matches!(result, Err(GridAreaError::DegenerateSegment(_))));
    assert!(sketch.segments().is_empty());
}

#[test]
fn test_run_script() {
    let mut sketch = Sketch::default();

    let script = sketch.run(SQUARE_SCRIPT).expect("Failed to run script");

    assert!(script.warnings().is_empty());
    assert_eq!(sketch.segments().len(), 4);
    assert_eq!(sketch.annotations().len(), 1);
    assert_eq!(sketch.annotations()[0].area(), 4.0);
}

#[test]
fn test_script_fill_overrides_default() {
    let mut sketch = Sketch::default();
    let source = SQUARE_SCRIPT.replace(
        "area (20, 20);",
        r#"area (20, 20) [fill_color="blue"];"#,
    );

    sketch.run(&source).expect("Failed to run script");

    let fill = sketch.annotations()[0].fill();
    assert_eq!(fill.color(), Color::new("blue").unwrap());
    assert_eq!(fill.opacity(), 0.2);
}

#[test]
fn test_configured_default_fill() {
    let config = AppConfig::new(GridConfig::default(), StyleConfig::new("green", 0.5));
    let mut sketch = Sketch::new(config).expect("Config is valid");

    sketch.run(SQUARE_SCRIPT).expect("Failed to run script");

    let fill = sketch.annotations()[0].fill();
    assert_eq!(fill.color(), Color::new("green").unwrap());
    assert_eq!(fill.opacity(), 0.5);
}

#[test]
fn test_configured_grid_size() {
    let config = AppConfig::new(GridConfig::new(10.0, 0.1, 4), StyleConfig::default());
    let mut sketch = Sketch::new(config).expect("Config is valid");

    sketch.run(SQUARE_SCRIPT).expect("Failed to run script");

    assert_eq!(sketch.annotations()[0].area(), 16.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = AppConfig::new(GridConfig::new(0.0, 0.1, 4), StyleConfig::default());
    assert!(matches!(Sketch::new(config), Err(GridAreaError::Config(_))));
}

#[test]
fn test_zero_tolerance_is_rejected() {
    let config = AppConfig::new(GridConfig::new(20.0, 0.0, 4), StyleConfig::default());
    assert!(matches!(Sketch::new(config), Err(GridAreaError::Config(_))));
}

#[test]
fn test_invalid_script_applies_nothing() {
    let mut sketch = Sketch::default();
    let source = "line (0, 0) -> (40, 0);\nline (40, 0) -> (40, 40)\n";

    let err = sketch.run(source).expect_err("Script must fail");

    match err {
        GridAreaError::Parse { err, src } => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
    assert!(sketch.segments().is_empty());
}

#[test]
fn test_report() {
    let mut sketch = Sketch::default();
    sketch.run(SQUARE_SCRIPT).expect("Failed to run script");

    let report = sketch.report();

    assert_eq!(report.lines().count(), 1);
    assert!(report.starts_with("4.0 cells at (20, 20) (4 segments, fill "));
}

#[test]
fn test_report_empty_without_annotations() {
    assert!(Sketch::default().report().is_empty());
}
