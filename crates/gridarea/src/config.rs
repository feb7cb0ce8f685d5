//! Configuration types for Gridarea sketches.
//!
//! This module provides configuration structures that control the grid a
//! sketch is measured on and the default fill of its annotations. All types
//! implement [`serde::Deserialize`] and default every missing field, so a
//! partial configuration file is valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining grid and style settings.
//! - [`GridConfig`] - Grid spacing, coincidence tolerance, and sampling density.
//! - [`StyleConfig`] - Default annotation fill.
//!
//! # Example
//!
//! ```
//! # use gridarea::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.grid().size(), 20.0);
//! ```

use serde::Deserialize;

use gridarea_core::{
    color::{Color, DEFAULT_FILL_CSS},
    geometry::DEFAULT_TOLERANCE,
};

use crate::{
    GridAreaError,
    annotation::{DEFAULT_FILL_OPACITY, Fill},
    area::DEFAULT_SUBDIVISIONS,
};

/// Default grid spacing in sketch units.
pub const DEFAULT_GRID_SIZE: f32 = 20.0;

/// Top-level application configuration combining grid and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Grid configuration section.
    #[serde(default)]
    grid: GridConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified grid and style configurations.
    pub fn new(grid: GridConfig, style: StyleConfig) -> Self {
        Self { grid, style }
    }

    /// Returns the grid configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks every value, reporting the first one that is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`GridAreaError::Config`] describing the offending value.
    pub fn validate(&self) -> Result<(), GridAreaError> {
        self.grid.validate()?;
        self.style.fill()?;
        Ok(())
    }
}

/// Grid settings: how sketch units map to grid cells and how finely they are
/// sampled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid spacing; one grid-cell unit of area is `size * size`.
    size: f32,

    /// Endpoint coincidence tolerance used to chain segments.
    tolerance: f32,

    /// Samples per grid cell along each axis.
    subdivisions: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            tolerance: DEFAULT_TOLERANCE,
            subdivisions: DEFAULT_SUBDIVISIONS,
        }
    }
}

impl GridConfig {
    pub fn new(size: f32, tolerance: f32, subdivisions: u32) -> Self {
        Self {
            size,
            tolerance,
            subdivisions,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    fn validate(&self) -> Result<(), GridAreaError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(GridAreaError::Config(format!(
                "grid size must be a positive number, got {}",
                self.size
            )));
        }
        // Coincidence is a strict comparison, so a zero tolerance never chains.
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(GridAreaError::Config(format!(
                "grid tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.subdivisions == 0 {
            return Err(GridAreaError::Config(
                "grid subdivisions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default fill for annotations that do not choose their own.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Fill color, as a CSS color string.
    fill_color: String,

    /// Fill opacity between 0 and 1.
    fill_opacity: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_CSS.to_string(),
            fill_opacity: DEFAULT_FILL_OPACITY,
        }
    }
}

impl StyleConfig {
    pub fn new(fill_color: impl Into<String>, fill_opacity: f32) -> Self {
        Self {
            fill_color: fill_color.into(),
            fill_opacity,
        }
    }

    /// Returns the configured default [`Fill`].
    ///
    /// # Errors
    ///
    /// Returns [`GridAreaError::Config`] if the color cannot be parsed or the
    /// opacity is outside `[0, 1]`.
    pub fn fill(&self) -> Result<Fill, GridAreaError> {
        let color = Color::new(&self.fill_color)
            .map_err(|err| GridAreaError::Config(format!("Invalid fill color in config: {err}")))?;
        if !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(GridAreaError::Config(format!(
                "fill opacity must be between 0 and 1, got {}",
                self.fill_opacity
            )));
        }
        Ok(Fill::new(color, self.fill_opacity))
    }
}
