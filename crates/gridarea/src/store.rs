//! Append-only storage for the segments of a sketch.

use log::trace;

use gridarea_core::geometry::Segment;

use crate::GridAreaError;

/// Owns every segment drawn in a sketch, in insertion order.
///
/// Insertion order is significant: [`LoopFinder`](crate::loops::LoopFinder)
/// walks segments by ascending index, so the same segments added in the
/// same order always produce the same loops.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    segments: Vec<Segment>,
}

impl SegmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    ///
    /// # Errors
    ///
    /// Returns [`GridAreaError::DegenerateSegment`] if the segment starts and
    /// ends at the same point. The store is left unchanged.
    pub fn add(&mut self, segment: Segment) -> Result<(), GridAreaError> {
        if segment.is_degenerate() {
            return Err(GridAreaError::DegenerateSegment(segment.start()));
        }
        trace!(index = self.segments.len(), segment:%; "Segment added");
        self.segments.push(segment);
        Ok(())
    }

    /// Returns all segments in insertion order.
    pub fn all(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
