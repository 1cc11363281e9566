//! Viewport adapter
//!
//! Tracks the logical size of the container and the device pixel ratio.
//! Hosts report what they measure as often as they like; only real changes
//! come back out, so layout jitter at an identical size costs nothing.

use crate::math::Size;

/// A detected change in container size or pixel density
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportChange {
    pub previous: Size,
    pub current: Size,
    pub pixel_ratio: f64,
}

impl ViewportChange {
    /// Whether the logical dimensions changed (as opposed to only the pixel ratio)
    #[inline]
    pub fn size_changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Shared surface dimensions, written only when a change is observed
#[derive(Clone, Debug)]
pub struct ViewportAdapter {
    size: Size,
    pixel_ratio: f64,
}

impl Default for ViewportAdapter {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            pixel_ratio: 1.0,
        }
    }
}

impl ViewportAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical size
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current device pixel ratio
    #[inline]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Record a measurement, returning the change if there was one.
    ///
    /// Non-finite or non-positive pixel ratios are treated as `1.0`.
    pub fn observe(&mut self, size: Size, pixel_ratio: f64) -> Option<ViewportChange> {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };

        if size == self.size && pixel_ratio == self.pixel_ratio {
            return None;
        }

        let change = ViewportChange {
            previous: self.size,
            current: size,
            pixel_ratio,
        };
        self.size = size;
        self.pixel_ratio = pixel_ratio;
        Some(change)
    }

    /// Backing-store dimensions in device pixels
    pub fn backing_size(&self) -> (u32, u32) {
        backing_size(self.size, self.pixel_ratio)
    }
}

/// Device-pixel dimensions for a logical size, rounded and clamped at zero
pub fn backing_size(size: Size, pixel_ratio: f64) -> (u32, u32) {
    let scale = |v: f64| {
        let px = (v * pixel_ratio).round();
        if px.is_finite() && px > 0.0 {
            px as u32
        } else {
            0
        }
    };
    (scale(size.width), scale(size.height))
}
