//! Area annotations and the fill they are drawn with.

use std::fmt;

use gridarea_core::{color::Color, geometry::Point};

use crate::loops::Loop;

/// Default opacity of an annotation's fill.
pub const DEFAULT_FILL_OPACITY: f32 = 0.2;

/// Caller-chosen fill for an annotated region.
///
/// The engine never interprets a fill; it is carried into the annotation for
/// whatever draws it. A renderer fills the region with [`Fill::fill_color`]
/// and writes the area text in [`Fill::text_color`].
///
/// # Examples
///
/// ```
/// use gridarea::annotation::Fill;
/// use gridarea_core::color::Color;
///
/// let fill = Fill::new(Color::new("teal").unwrap(), 0.4);
/// assert!((fill.fill_color().alpha() - 0.4).abs() < 0.001);
/// assert!((fill.text_color().alpha() - 1.0).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    color: Color,
    opacity: f32,
}

impl Fill {
    /// Creates a fill. `opacity` is clamped to `[0, 1]`.
    pub fn new(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Returns a copy with a different color and the same opacity.
    pub fn with_color(self, color: Color) -> Self {
        Self::new(color, self.opacity)
    }

    /// Returns a copy with a different opacity and the same color.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self::new(self.color, opacity)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// The color used to fill the region, with the opacity applied as alpha.
    pub fn fill_color(&self) -> Color {
        self.color.with_alpha(self.opacity)
    }

    /// The color used for the area text, exactly as the caller chose it.
    pub fn text_color(&self) -> Color {
        self.color
    }
}

impl Default for Fill {
    fn default() -> Self {
        Self::new(Color::default(), DEFAULT_FILL_OPACITY)
    }
}

/// The measured area of one enclosed region.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaAnnotation {
    area: f32,
    anchor: Point,
    boundary: Loop,
    fill: Fill,
}

impl AreaAnnotation {
    pub(crate) fn new(area: f32, boundary: Loop, fill: Fill) -> Self {
        Self {
            area,
            anchor: boundary.anchor(),
            boundary,
            fill,
        }
    }

    /// Estimated area in grid cells, rounded to one decimal place.
    pub fn area(&self) -> f32 {
        self.area
    }

    /// Center of the boundary's bounding box, where the area text belongs.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// The loop enclosing the region.
    pub fn boundary(&self) -> &Loop {
        &self.boundary
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }
}

impl fmt::Display for AreaAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} cells", self.area)
    }
}

#[cfg(test)]
mod tests {
    use gridarea_core::geometry::Segment;

    use super::*;

    #[test]
    fn test_fill_default() {
        let fill = Fill::default();
        assert_eq!(fill.color(), Color::new("#ff0000").unwrap());
        assert_eq!(fill.opacity(), DEFAULT_FILL_OPACITY);
    }

    #[test]
    fn test_fill_opacity_is_clamped() {
        assert_eq!(Fill::default().with_opacity(1.7).opacity(), 1.0);
        assert_eq!(Fill::default().with_opacity(-0.3).opacity(), 0.0);
    }

    #[test]
    fn test_fill_colors() {
        let fill = Fill::default().with_color(Color::new("blue").unwrap());

        assert_eq!(fill.fill_color(), Color::new("blue").unwrap().with_alpha(0.2));
        assert_eq!(fill.text_color(), Color::new("blue").unwrap());
    }

    #[test]
    fn test_text_color_keeps_caller_alpha() {
        let translucent = Color::new("rgba(0, 0, 255, 0.5)").unwrap();
        let fill = Fill::new(translucent, 0.2);

        assert_eq!(fill.text_color(), translucent);
        assert!((fill.text_color().alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_annotation_display_and_anchor() {
        let p = Point::new;
        let boundary = Loop::new(vec![
            Segment::new(p(0.0, 0.0), p(40.0, 0.0)),
            Segment::new(p(40.0, 0.0), p(0.0, 20.0)),
            Segment::new(p(0.0, 20.0), p(0.0, 0.0)),
        ])
        .unwrap();

        let annotation = AreaAnnotation::new(1.0, boundary, Fill::default());

        assert_eq!(annotation.to_string(), "1.0 cells");
        assert_eq!(annotation.anchor(), Point::new(20.0, 10.0));
        assert_eq!(annotation.boundary().len(), 3);
    }
}
