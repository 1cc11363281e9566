//! Draw commands and the drawing-surface seam
//!
//! The engine never talks to a canvas directly. Each frame it produces
//! [`Path`]s and [`Fill`]s and hands them to a [`Surface`]; the web host
//! turns those into Canvas 2D calls and tests record them.

mod gradient;
mod path;

pub use gradient::{Blend, Fill, GradientStop, LinearGradient, RadialGradient};
pub use path::{Path, PathCommand};

use crate::color::Rgba;
use crate::math::Size;

/// A 2D drawing target
pub trait Surface {
    /// Resize the backing store for a logical `size` at `pixel_ratio`
    /// device pixels per CSS pixel. Drawing stays in logical units.
    fn resize(&mut self, size: Size, pixel_ratio: f64);

    /// Clear the whole logical area, then paint `background` if given
    fn clear(&mut self, size: Size, background: Option<Rgba>);

    /// Fill a closed path
    fn fill_path(&mut self, path: &Path, fill: &Fill, blend: Blend);
}
