//! Example: Measuring regions from segments added in code
//!
//! This example demonstrates the basic workflow of:
//! 1. Creating a Sketch with default configuration
//! 2. Adding the segments of two shapes, one drawn out of order
//! 3. Querying the area around points and printing the report

use gridarea::{
    Sketch,
    annotation::Fill,
    color::Color,
    geometry::{Point, Segment},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut sketch = Sketch::default();
    let p = Point::new;

    // A 3x2-cell rectangle on the default 20-unit grid
    for (from, to) in [
        (p(0.0, 0.0), p(60.0, 0.0)),
        (p(60.0, 0.0), p(60.0, 40.0)),
        (p(60.0, 40.0), p(0.0, 40.0)),
        (p(0.0, 40.0), p(0.0, 0.0)),
    ] {
        sketch.add_segment(Segment::new(from, to))?;
    }

    // A triangle whose edges are drawn in no particular order or direction
    for (from, to) in [
        (p(100.0, 40.0), p(100.0, 0.0)),
        (p(100.0, 0.0), p(140.0, 40.0)),
        (p(100.0, 40.0), p(140.0, 40.0)),
    ] {
        sketch.add_segment(Segment::new(from, to))?;
    }

    println!("Found {} loops", sketch.loops().len());

    if let Some(annotation) = sketch.query_area(p(30.0, 20.0)) {
        println!("Rectangle: {annotation}");
    }

    let green = Fill::default().with_color(Color::new("green")?);
    if let Some(annotation) = sketch.query_area_with_fill(p(105.0, 30.0), green) {
        println!("Triangle: {annotation}");
    }

    // Outside every shape: no annotation
    assert!(sketch.query_area(p(80.0, 20.0)).is_none());

    println!("\nReport:\n{}", sketch.report());
    Ok(())
}
