//! Gridarea Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Gridarea
//! crates. It includes:
//!
//! - **Geometry**: Points, segments and bounding boxes ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod geometry;
