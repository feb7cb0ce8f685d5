//! Reconstruction of closed loops from loose segments.
//!
//! Segments are chained greedily: each unused segment in ascending index
//! order starts a chain, and the chain grows by the first unused segment
//! whose start or end coincides with the chain's open end. A segment joined
//! by its end is traversed reversed. The chain closes once its open end
//! coincides with its first point.
//!
//! Every segment joined to a chain stays used, even when that chain dead-ends
//! and is abandoned. Such segments never start another chain and are never
//! joined again.

use log::{debug, trace};

use gridarea_core::geometry::{Bounds, DEFAULT_TOLERANCE, Point, Segment};

/// A closed chain of at least three segments.
///
/// Segments are stored in traversal order: the end of each segment coincides
/// with the start of the next, and the end of the last segment coincides with
/// the start of the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    segments: Vec<Segment>,
    bounds: Bounds,
}

impl Loop {
    /// Minimum number of segments in a loop.
    pub const MIN_SEGMENTS: usize = 3;

    /// Creates a loop from segments in traversal order.
    ///
    /// Returns `None` if there are fewer than [`Loop::MIN_SEGMENTS`] segments.
    /// Closure is the caller's responsibility.
    pub fn new(segments: Vec<Segment>) -> Option<Self> {
        if segments.len() < Self::MIN_SEGMENTS {
            return None;
        }
        let bounds = Bounds::from_points(segments.iter().flat_map(|s| [s.start(), s.end()]))?;
        Some(Self { segments, bounds })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Bounding box of every segment endpoint.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Representative point of the loop: the center of its bounding box.
    pub fn anchor(&self) -> Point {
        self.bounds.center()
    }
}

/// Finds closed loops among a set of segments.
///
/// # Examples
///
/// ```
/// use gridarea::loops::LoopFinder;
/// use gridarea_core::geometry::{Point, Segment};
///
/// let p = Point::new;
/// let segments = [
///     Segment::new(p(0.0, 0.0), p(40.0, 0.0)),
///     Segment::new(p(0.0, 40.0), p(40.0, 40.0)), // drawn backwards
///     Segment::new(p(40.0, 0.0), p(40.0, 40.0)),
///     Segment::new(p(0.0, 40.0), p(0.0, 0.0)),
/// ];
///
/// let loops = LoopFinder::default().find_loops(&segments);
/// assert_eq!(loops.len(), 1);
/// assert_eq!(loops[0].len(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoopFinder {
    tolerance: f32,
}

impl Default for LoopFinder {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl LoopFinder {
    /// Creates a finder that treats endpoints closer than `tolerance` on both
    /// axes as the same point.
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Finds every closed loop, in the order their first segment appears.
    ///
    /// Unclosed chains are dropped silently; an unfinished sketch is normal.
    pub fn find_loops(&self, segments: &[Segment]) -> Vec<Loop> {
        let mut used = vec![false; segments.len()];
        let mut loops = Vec::new();

        for (index, &first) in segments.iter().enumerate() {
            if used[index] {
                continue;
            }
            used[index] = true;

            let Some(chain) = self.close_chain(first, segments, &mut used) else {
                trace!(start = index; "Abandoned unclosed chain");
                continue;
            };

            match Loop::new(chain) {
                Some(found) => {
                    debug!(start = index, segments = found.len(); "Loop found");
                    loops.push(found);
                }
                None => trace!(start = index; "Discarded loop with too few segments"),
            }
        }

        loops
    }

    /// Extends a chain from `first` until it closes, or returns `None` when
    /// no unused segment continues it.
    fn close_chain(
        &self,
        first: Segment,
        segments: &[Segment],
        used: &mut [bool],
    ) -> Option<Vec<Segment>> {
        let anchor = first.start();
        let mut current = first.end();
        let mut chain = vec![first];

        loop {
            let (index, link) = self.next_link(current, segments, used)?;
            used[index] = true;
            current = link.end();
            chain.push(link);

            if current.coincides_with(anchor, self.tolerance) {
                return Some(chain);
            }
        }
    }

    /// First unused segment touching `current`, oriented to continue from it.
    fn next_link(
        &self,
        current: Point,
        segments: &[Segment],
        used: &[bool],
    ) -> Option<(usize, Segment)> {
        segments
            .iter()
            .enumerate()
            .filter(|(index, _)| !used[*index])
            .find_map(|(index, &segment)| {
                if segment.start().coincides_with(current, self.tolerance) {
                    Some((index, segment))
                } else if segment.end().coincides_with(current, self.tolerance) {
                    Some((index, segment.reversed()))
                } else {
                    None
                }
            })
    }
}
