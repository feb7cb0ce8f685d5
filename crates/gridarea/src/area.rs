//! Containment tests, area sampling, and the annotation cache.
//!
//! Containment uses the even-odd rule: a horizontal ray cast from the point
//! to the right of the loop crosses the loop's boundary an odd number of
//! times exactly when the point is inside. Crossings are counted with a
//! parametric segment intersection test that treats parallel segments,
//! collinear ones included, as never intersecting. Points exactly on the
//! boundary are therefore not classified reliably.
//!
//! Area is estimated rather than computed: the loop's bounding box is
//! covered with sample cells, `subdivisions` per grid cell along each axis,
//! and every cell whose center is inside the loop adds its share of a grid
//! cell. Sampling copes with non-convex and self-touching loops alike.

use log::{debug, trace, warn};

use gridarea_core::geometry::{Point, Segment};

use crate::{
    annotation::{AreaAnnotation, Fill},
    loops::Loop,
};

/// Default number of samples per grid cell along each axis.
pub const DEFAULT_SUBDIVISIONS: u32 = 4;

/// How far past the loop's right edge the containment ray extends.
const RAY_MARGIN: f32 = 1.0;

/// Returns true if the two segments cross or touch.
///
/// Endpoints count as intersections. Parallel segments never intersect,
/// even when they overlap.
///
/// # Examples
///
/// ```
/// use gridarea::area::segments_intersect;
/// use gridarea_core::geometry::{Point, Segment};
///
/// let p = Point::new;
/// let horizontal = Segment::new(p(0.0, 10.0), p(40.0, 10.0));
///
/// assert!(segments_intersect(horizontal, Segment::new(p(20.0, 0.0), p(20.0, 20.0))));
/// assert!(!segments_intersect(horizontal, Segment::new(p(50.0, 0.0), p(50.0, 20.0))));
/// // Overlapping but collinear.
/// assert!(!segments_intersect(horizontal, Segment::new(p(10.0, 10.0), p(30.0, 10.0))));
/// ```
pub fn segments_intersect(a: Segment, b: Segment) -> bool {
    let (x1, y1) = (a.start().x(), a.start().y());
    let (x2, y2) = (a.end().x(), a.end().y());
    let (x3, y3) = (b.start().x(), b.start().y());
    let (x4, y4) = (b.end().x(), b.end().y());

    let denominator = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denominator == 0.0 {
        return false;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denominator;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denominator;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Returns true if `point` is inside `region` by the even-odd rule.
pub fn point_in_loop(point: Point, region: &Loop) -> bool {
    let ray_end = point.with_x(point.x().max(region.bounds().max_x()) + RAY_MARGIN);
    let ray = Segment::new(point, ray_end);

    let crossings = region
        .segments()
        .iter()
        .filter(|&&segment| segments_intersect(ray, segment))
        .count();

    crossings % 2 == 1
}

/// Estimates the area of `region` in grid cells, sampling
/// [`DEFAULT_SUBDIVISIONS`] times per cell along each axis.
pub fn estimate_area(region: &Loop, cell_size: f32) -> f32 {
    estimate_area_with(region, cell_size, DEFAULT_SUBDIVISIONS)
}

/// Estimates the area of `region` in grid cells, rounded to one decimal.
///
/// Returns `0.0` when `cell_size` is not a positive finite number or
/// `subdivisions` is zero.
///
/// # Examples
///
/// ```
/// use gridarea::{area::estimate_area_with, loops::Loop};
/// use gridarea_core::geometry::{Point, Segment};
///
/// let p = Point::new;
/// let square = Loop::new(vec![
///     Segment::new(p(0.0, 0.0), p(40.0, 0.0)),
///     Segment::new(p(40.0, 0.0), p(40.0, 40.0)),
///     Segment::new(p(40.0, 40.0), p(0.0, 40.0)),
///     Segment::new(p(0.0, 40.0), p(0.0, 0.0)),
/// ])
/// .unwrap();
///
/// assert_eq!(estimate_area_with(&square, 20.0, 4), 4.0);
/// ```
pub fn estimate_area_with(region: &Loop, cell_size: f32, subdivisions: u32) -> f32 {
    if !cell_size.is_finite() || cell_size <= 0.0 || subdivisions == 0 {
        warn!(cell_size, subdivisions; "Cannot sample area with this grid");
        return 0.0;
    }

    let step = cell_size / subdivisions as f32;
    let bounds = region.bounds();
    let columns = (bounds.width() / step).floor() as u32;
    let rows = (bounds.height() / step).floor() as u32;

    let mut inside = 0u32;
    for column in 0..=columns {
        let x = bounds.min_x() + column as f32 * step + step / 2.0;
        for row in 0..=rows {
            let y = bounds.min_y() + row as f32 * step + step / 2.0;
            if point_in_loop(Point::new(x, y), region) {
                inside += 1;
            }
        }
    }

    let area = inside as f32 * (step * step) / (cell_size * cell_size);
    (area * 10.0).round() / 10.0
}

/// Answers area queries and remembers the regions already annotated.
#[derive(Debug, Clone)]
pub struct AreaEngine {
    cell_size: f32,
    subdivisions: u32,
    annotations: Vec<AreaAnnotation>,
}

impl AreaEngine {
    /// Creates an engine for a grid of `cell_size` units sampled
    /// `subdivisions` times per cell along each axis.
    pub fn new(cell_size: f32, subdivisions: u32) -> Self {
        Self {
            cell_size,
            subdivisions,
            annotations: Vec::new(),
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    /// Annotations added so far, oldest first.
    pub fn annotations(&self) -> &[AreaAnnotation] {
        &self.annotations
    }

    /// Annotates the smallest loop that contains `point`.
    ///
    /// Among enclosing loops the one with the smallest estimated area wins;
    /// on a tie the earliest loop wins. Returns `None` when no loop encloses
    /// the point, or when the winning loop's anchor is less than one cell
    /// away on both axes from an existing annotation's anchor. In both cases
    /// nothing is added.
    pub fn query_area(
        &mut self,
        point: Point,
        loops: Vec<Loop>,
        fill: Fill,
    ) -> Option<&AreaAnnotation> {
        let mut smallest: Option<(f32, Loop)> = None;
        for candidate in loops {
            if !point_in_loop(point, &candidate) {
                continue;
            }
            let area = estimate_area_with(&candidate, self.cell_size, self.subdivisions);
            trace!(area, segments = candidate.len(); "Loop encloses query point");
            if smallest.as_ref().is_none_or(|(best, _)| area < *best) {
                smallest = Some((area, candidate));
            }
        }

        let Some((area, boundary)) = smallest else {
            debug!(point:%; "No loop encloses point");
            return None;
        };

        let anchor = boundary.anchor();
        if self.is_annotated(anchor) {
            debug!(point:%, anchor:%; "Region already annotated");
            return None;
        }

        debug!(area, anchor:%; "Annotation added");
        self.annotations
            .push(AreaAnnotation::new(area, boundary, fill));
        self.annotations.last()
    }

    fn is_annotated(&self, anchor: Point) -> bool {
        self.annotations.iter().any(|existing| {
            (existing.anchor().x() - anchor.x()).abs() < self.cell_size
                && (existing.anchor().y() - anchor.y()).abs() < self.cell_size
        })
    }
}
