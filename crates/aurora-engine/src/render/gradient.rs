//! Gradient fills and compositing modes

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::math::Vec2;

/// One colour stop along a gradient
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient in `0.0..=1.0`
    pub offset: f64,
    pub color: Rgba,
}

impl GradientStop {
    #[inline]
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Radial gradient between two concentric circles
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: Vec<GradientStop>,
}

/// Linear gradient between two points
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: Vec2,
    pub to: Vec2,
    pub stops: Vec<GradientStop>,
}

/// How a path is filled
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Radial(RadialGradient),
    Linear(LinearGradient),
}

/// Compositing mode for a fill
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    /// Paint over what is there
    #[default]
    SourceOver,
    /// Add colour values so overlaps brighten
    Lighter,
}

impl Blend {
    /// Canvas `globalCompositeOperation` name
    pub fn as_css(self) -> &'static str {
        match self {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        }
    }
}
