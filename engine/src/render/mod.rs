//! Render Module
//!
//! The engine draws nothing itself. Shapes hand screen-space line segments
//! to a [`DrawTarget`]; what the target does with them (blit to a display,
//! rasterize into a framebuffer, record for a test) is its own business.

pub mod draw_target;

pub use draw_target::{DrawTarget, Line, LineRecorder, draw_closed_polygon};
