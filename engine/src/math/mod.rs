//! Math Module
//!
//! 2D value types for the scene graph and flight model.
//!
//! # Coordinate Spaces
//!
//! - **Local space** - a shape's own vertex coordinates
//! - **World space** - after the shape transform and world position offset
//! - **Screen space** - after the world's fixed model-to-screen transform
//!
//! World space is Y-up with the origin at the centre of the play field.
//! Screen space is Y-down with the origin at the top-left pixel.
//!
//! # Submodules
//!
//! - [`vector`] - `Vector2D` (re-exported from glam) plus in-place helpers
//! - [`matrix`] - `Matrix2D`, a rotation + translation transform

pub mod matrix;
pub mod vector;

pub use matrix::Matrix2D;
pub use vector::{Vector2D, VectorOps};
