//! CSS colors for area fills.
//!
//! Callers pick the fill of an annotated region as a CSS color string. The
//! engine never looks inside a [`Color`]; it only applies the fill opacity as
//! alpha and hands the color on to whatever draws the region.

use std::fmt;

use color::DynamicColor;

/// CSS color used when neither the caller nor the config chooses one.
pub const DEFAULT_FILL_CSS: &str = "#ff0000";

/// A parsed CSS color.
///
/// ```
/// use gridarea_core::color::Color;
///
/// let teal = Color::new("teal").unwrap();
/// let wash = teal.with_alpha(0.2);
///
/// assert!((wash.alpha() - 0.2).abs() < 0.001);
/// assert!(Color::new("not-a-color").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses any CSS color: hex, `rgb()`/`rgba()`, `hsl()`, or a named color.
    ///
    /// The error message names the rejected input so it can be shown next
    /// to the offending attribute or config value.
    pub fn new(css: &str) -> Result<Self, String> {
        css.parse::<DynamicColor>()
            .map(|color| Self { color })
            .map_err(|err| format!("`{css}` is not a CSS color ({err})"))
    }

    /// The same color at `alpha`, clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha.clamp(0.0, 1.0)),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(DEFAULT_FILL_CSS).expect("default fill is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.color, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_css_forms() {
        for css in ["#0a0", "#00aa00", "rgb(0, 170, 0)", "rgba(0, 170, 0, 0.5)", "green"] {
            assert!(Color::new(css).is_ok(), "{css} should parse");
        }
    }

    #[test]
    fn test_rejection_names_input() {
        let err = Color::new("mauvish").unwrap_err();
        assert!(err.starts_with("`mauvish` is not a CSS color"), "{err}");
    }

    #[test]
    fn test_default_is_opaque_fill_red() {
        let color = Color::default();
        assert_eq!(color, Color::new(DEFAULT_FILL_CSS).unwrap());
        assert!((color.alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_with_alpha_clamps() {
        let blue = Color::new("blue").unwrap();

        assert!((blue.with_alpha(0.5).alpha() - 0.5).abs() < 0.001);
        assert_eq!(blue.with_alpha(1.5).alpha(), 1.0);
        assert_eq!(blue.with_alpha(-0.5).alpha(), 0.0);
        assert_ne!(blue.with_alpha(0.5), blue);
    }

    #[test]
    fn test_keeps_css_alpha() {
        let translucent = Color::new("rgba(255, 0, 0, 0.25)").unwrap();
        assert!((translucent.alpha() - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_display_is_css() {
        let shown = Color::new("#00aa00").unwrap().to_string();
        assert!(Color::new(&shown).is_ok(), "{shown} should parse back");
    }
}
