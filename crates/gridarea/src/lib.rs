//! Gridarea - find the regions enclosed by lines drawn on a grid and measure
//! their areas.
//!
//! Segments are collected in a [`store::SegmentStore`], chained into closed
//! loops by a [`loops::LoopFinder`], and measured by an [`area::AreaEngine`]
//! that annotates the smallest loop around a query point. The [`Sketch`]
//! type wires the three together and can be driven by sketch scripts.

pub mod annotation;
pub mod area;
pub mod config;
pub mod loops;
pub mod store;

mod error;

pub use gridarea_core::{color, geometry};
pub use gridarea_parser::{AreaQuery, Command, Script};

pub use error::GridAreaError;

use std::fmt::Write;

use log::{debug, info, trace, warn};

use geometry::{Point, Segment};

use annotation::{AreaAnnotation, Fill};
use area::AreaEngine;
use config::AppConfig;
use loops::{Loop, LoopFinder};
use store::SegmentStore;

/// A grid sketch: the segments drawn so far and the regions annotated.
///
/// Loops are recomputed from the current segments on every query, so
/// segments may be added between queries freely.
///
/// # Examples
///
/// ```
/// use gridarea::{Sketch, geometry::{Point, Segment}};
///
/// let mut sketch = Sketch::default();
/// let p = Point::new;
/// sketch.add_segment(Segment::new(p(0.0, 0.0), p(40.0, 0.0)))?;
/// sketch.add_segment(Segment::new(p(40.0, 0.0), p(40.0, 40.0)))?;
/// sketch.add_segment(Segment::new(p(40.0, 40.0), p(0.0, 40.0)))?;
/// sketch.add_segment(Segment::new(p(0.0, 40.0), p(0.0, 0.0)))?;
///
/// let annotation = sketch.query_area(p(20.0, 20.0)).expect("square encloses point");
/// assert_eq!(annotation.area(), 4.0);
///
/// // The same region is only annotated once.
/// assert!(sketch.query_area(p(10.0, 10.0)).is_none());
/// # Ok::<(), gridarea::GridAreaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sketch {
    store: SegmentStore,
    finder: LoopFinder,
    engine: AreaEngine,
    default_fill: Fill,
}

impl Default for Sketch {
    fn default() -> Self {
        let grid = config::GridConfig::default();
        Self::from_parts(
            LoopFinder::new(grid.tolerance()),
            AreaEngine::new(grid.size(), grid.subdivisions()),
            Fill::default(),
        )
    }
}

impl Sketch {
    /// Create an empty sketch with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GridAreaError::Config`] if the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridarea::{Sketch, config::{AppConfig, GridConfig, StyleConfig}};
    ///
    /// let config = AppConfig::new(GridConfig::new(10.0, 0.1, 4), StyleConfig::default());
    /// let sketch = Sketch::new(config)?;
    /// assert!(sketch.segments().is_empty());
    /// # Ok::<(), gridarea::GridAreaError>(())
    /// ```
    pub fn new(config: AppConfig) -> Result<Self, GridAreaError> {
        config.validate()?;
        let grid = config.grid();
        info!(
            grid_size = grid.size(),
            tolerance = grid.tolerance(),
            subdivisions = grid.subdivisions();
            "Creating sketch"
        );
        Ok(Self::from_parts(
            LoopFinder::new(grid.tolerance()),
            AreaEngine::new(grid.size(), grid.subdivisions()),
            config.style().fill()?,
        ))
    }

    fn from_parts(finder: LoopFinder, engine: AreaEngine, default_fill: Fill) -> Self {
        Self {
            store: SegmentStore::new(),
            finder,
            engine,
            default_fill,
        }
    }

    /// Add a segment to the sketch.
    ///
    /// # Errors
    ///
    /// Returns [`GridAreaError::DegenerateSegment`] if the segment starts and
    /// ends at the same point; the sketch is unchanged.
    pub fn add_segment(&mut self, segment: Segment) -> Result<(), GridAreaError> {
        self.store.add(segment)
    }

    /// All segments, in the order they were added.
    pub fn segments(&self) -> &[Segment] {
        self.store.all()
    }

    /// All closed loops formed by the current segments.
    pub fn loops(&self) -> Vec<Loop> {
        self.finder.find_loops(self.store.all())
    }

    /// Annotate the smallest region enclosing `point` with the default fill.
    ///
    /// Returns `None` if no loop encloses the point or its region is already
    /// annotated.
    pub fn query_area(&mut self, point: Point) -> Option<&AreaAnnotation> {
        self.query_area_with_fill(point, self.default_fill)
    }

    /// Annotate the smallest region enclosing `point` with `fill`.
    pub fn query_area_with_fill(&mut self, point: Point, fill: Fill) -> Option<&AreaAnnotation> {
        let loops = self.finder.find_loops(self.store.all());
        trace!(point:%, loops = loops.len(); "Querying area");
        self.engine.query_area(point, loops, fill)
    }

    /// Annotations made so far, oldest first.
    pub fn annotations(&self) -> &[AreaAnnotation] {
        self.engine.annotations()
    }

    /// Parse a sketch script without applying it.
    ///
    /// # Errors
    ///
    /// Returns [`GridAreaError::Parse`] carrying every diagnostic and the
    /// source, for rich error reporting.
    pub fn parse(&self, source: &str) -> Result<Script, GridAreaError> {
        info!("Parsing sketch script");
        let script = gridarea_parser::parse(source)
            .map_err(|err| GridAreaError::new_parse_error(err, source))?;
        for warning in script.warnings() {
            warn!(warning:%; "Sketch script warning");
        }
        debug!(commands = script.commands().len(); "Sketch script parsed");
        Ok(script)
    }

    /// Apply a parsed script: add its lines and run its area queries, in order.
    ///
    /// Area queries without explicit fill attributes use the configured
    /// default fill.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a command; earlier commands stay
    /// applied.
    pub fn apply(&mut self, script: &Script) -> Result<(), GridAreaError> {
        for command in script.commands() {
            match command.inner() {
                Command::Line(segment) => self.add_segment(*segment)?,
                Command::Area(query) => {
                    let fill = self.fill_for(query);
                    if self.query_area_with_fill(query.point(), fill).is_none() {
                        debug!(point:% = query.point(); "Area query added no annotation");
                    }
                }
            }
        }
        info!(
            segments = self.segments().len(),
            annotations = self.annotations().len();
            "Sketch script applied"
        );
        Ok(())
    }

    /// Parse and apply a sketch script, returning the script for its warnings.
    ///
    /// # Errors
    ///
    /// Returns [`GridAreaError::Parse`] if the script is invalid, in which
    /// case nothing is applied.
    pub fn run(&mut self, source: &str) -> Result<Script, GridAreaError> {
        let script = self.parse(source)?;
        self.apply(&script)?;
        Ok(script)
    }

    /// A plain-text report with one line per annotation, giving its area,
    /// anchor, boundary segment count, and fill color, e.g.
    /// `4.0 cells at (20, 20) (4 segments, fill <color>)`.
    pub fn report(&self) -> String {
        let mut report = String::new();
        for annotation in self.annotations() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                report,
                "{annotation} at {} ({} segments, fill {})",
                annotation.anchor(),
                annotation.boundary().len(),
                annotation.fill().fill_color()
            );
        }
        report
    }

    fn fill_for(&self, query: &AreaQuery) -> Fill {
        let mut fill = self.default_fill;
        if let Some(color) = query.fill_color() {
            fill = fill.with_color(color);
        }
        if let Some(opacity) = query.fill_opacity() {
            fill = fill.with_opacity(opacity);
        }
        fill
    }
}
