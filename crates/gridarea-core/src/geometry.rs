//! Points, segments, and bounding boxes in sketch coordinates.
//!
//! Coordinates are canvas units with `y` growing downwards; the grid spacing
//! that turns them into cells belongs to the caller. Segments chain into
//! loops when their endpoints *coincide*, meaning both coordinate
//! differences are strictly below a tolerance. Exact equality only matters
//! for rejecting a segment that starts where it ends.

use std::fmt;

/// Default coincidence tolerance used when chaining segment endpoints.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// A 2D point representing a position in sketch coordinate space.
///
/// # Examples
///
/// ```
/// # use gridarea_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(10.05, 19.95);
///
/// assert!(p1.coincides_with(p2, 0.1));
/// assert!(!p1.coincides_with(p2, 0.01));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// The point moved horizontally to `x`.
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Returns true if both coordinate differences are strictly below `tolerance`.
    ///
    /// The comparison is per axis, not Euclidean: `(0, 0)` and
    /// `(0.09, 0.09)` coincide under a tolerance of `0.1`.
    pub fn coincides_with(self, other: Point, tolerance: f32) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A straight line segment between two points.
///
/// Segments have no inherent direction, but they are stored with an order.
/// Loop reconstruction may traverse a segment backwards, which it does on a
/// [`reversed`](Segment::reversed) copy so the stored segment stays untouched.
///
/// # Examples
///
/// ```
/// # use gridarea_core::geometry::{Point, Segment};
/// let segment = Segment::new(Point::new(0.0, 0.0), Point::new(40.0, 0.0));
/// let flipped = segment.reversed();
///
/// assert_eq!(flipped.start(), segment.end());
/// assert_eq!(flipped.end(), segment.start());
/// assert_eq!(flipped.reversed(), segment);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Creates a new segment from `start` to `end`
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the start point of the segment
    pub fn start(self) -> Point {
        self.start
    }

    /// Returns the end point of the segment
    pub fn end(self) -> Point {
        self.end
    }

    /// Returns a copy of this segment with start and end swapped
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns true if the start and end points are exactly equal
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// The axis-aligned box around a loop; its center anchors the area label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates the smallest bounds containing every point, or `None` when
    /// the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridarea_core::geometry::{Bounds, Point};
    /// let points = [
    ///     Point::new(0.0, 40.0),
    ///     Point::new(40.0, 0.0),
    ///     Point::new(10.0, 10.0),
    /// ];
    ///
    /// let bounds = Bounds::from_points(points).unwrap();
    /// assert_eq!(bounds.width(), 40.0);
    /// assert_eq!(bounds.height(), 40.0);
    /// assert_eq!(bounds.center(), Point::new(20.0, 20.0));
    ///
    /// assert!(Bounds::from_points(std::iter::empty()).is_none());
    /// ```
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let seed = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.fold(seed, |bounds, p| Self {
            min_x: bounds.min_x.min(p.x),
            min_y: bounds.min_y.min(p.y),
            max_x: bounds.max_x.max(p.x),
            max_y: bounds.max_y.max(p.y),
        }))
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }
}
