//! Core geometry types for the background engine
//!
//! Positions and sizes are kept in surface (CSS) pixels as `f64`, which is
//! what both the noise field and the Canvas 2D API consume.

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;
