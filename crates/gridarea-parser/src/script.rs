//! Parsed sketch script model.
//!
//! A [`Script`] is the validated form of a sketch script: every command
//! carries the [`Span`] of the statement it came from so later stages can
//! point back at the source.

use gridarea_core::{
    color::Color,
    geometry::{Point, Segment},
};

use crate::{error::Diagnostic, span::Spanned};

/// A single command from a sketch script.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `line P -> Q;` - draw a segment.
    Line(Segment),
    /// `area P [attrs];` - ask for the area of the region around a point.
    Area(AreaQuery),
}

/// The payload of an `area` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaQuery {
    point: Point,
    fill_color: Option<Color>,
    fill_opacity: Option<f32>,
}

impl AreaQuery {
    /// Creates a query at `point` with no fill overrides.
    pub fn new(point: Point) -> Self {
        Self {
            point,
            fill_color: None,
            fill_opacity: None,
        }
    }

    /// Sets the fill color override.
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Sets the fill opacity override.
    pub fn with_fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    /// The query point.
    pub fn point(&self) -> Point {
        self.point
    }

    /// The `fill_color` attribute, if given.
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    /// The `fill_opacity` attribute, if given.
    pub fn fill_opacity(&self) -> Option<f32> {
        self.fill_opacity
    }
}

/// A validated sketch script.
#[derive(Debug, Default)]
pub struct Script {
    commands: Vec<Spanned<Command>>,
    warnings: Vec<Diagnostic>,
}

impl Script {
    /// Creates a script from commands and the warnings raised while parsing them.
    pub fn new(commands: Vec<Spanned<Command>>, warnings: Vec<Diagnostic>) -> Self {
        Self { commands, warnings }
    }

    /// Commands in source order.
    pub fn commands(&self) -> &[Spanned<Command>] {
        &self.commands
    }

    /// Non-fatal diagnostics, such as duplicated attributes.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Returns true if the script has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
