//! Per-frame drawing

use crate::blob::{Blob, BlobStore};
use crate::config::{EngineConfig, Style};
use crate::math::{Size, Vec2};
use crate::motion;
use crate::noise_field::NoiseField;
use crate::render::{Blend, Fill, GradientStop, LinearGradient, Path, RadialGradient, Surface};
use crate::shape;

/// Radial fill for a blob: near-opaque base colour at the centre fading to
/// transparent at `gradient_extent` radii
pub fn blob_fill(blob: &Blob, config: &EngineConfig) -> Fill {
    let color = blob.color();
    Fill::Radial(RadialGradient {
        center: blob.center(),
        inner_radius: 0.0,
        outer_radius: blob.radius() * config.gradient_extent,
        stops: vec![
            GradientStop::new(0.0, color.with_alpha(config.center_alpha)),
            GradientStop::new(1.0, color.with_alpha(0.0)),
        ],
    })
}

/// Vertical fill for wave band `layer`
pub fn band_fill(layer: usize, size: Size, config: &EngineConfig) -> Fill {
    let gradients = &config.bands.gradients;
    let stops = if gradients.is_empty() {
        Vec::new()
    } else {
        gradients[layer % gradients.len()].clone()
    };

    Fill::Linear(LinearGradient {
        from: Vec2::ZERO,
        to: Vec2::new(0.0, size.height),
        stops,
    })
}

/// Clear, advance and draw every blob for one frame at `time`
pub(super) fn draw_frame<S, N>(
    surface: &mut S,
    store: &mut BlobStore,
    size: Size,
    time: f64,
    config: &EngineConfig,
    noise: &N,
) where
    S: Surface + ?Sized,
    N: NoiseField + ?Sized,
{
    surface.clear(size, config.background);

    match config.style {
        Style::Blobs => {
            for blob in store.blobs_mut() {
                motion::integrate(blob, size, time, config, noise);
                let points = shape::outline(blob, time, config, noise);
                surface.fill_path(&Path::smooth_closed(&points), &blob_fill(blob, config), Blend::Lighter);
            }
        }
        Style::Bands => {
            for blob in store.blobs() {
                let layer = blob.id();
                let points = shape::band_outline(layer, size, time, config, noise);
                surface.fill_path(&Path::polygon(&points), &band_fill(layer, size, config), Blend::Lighter);
            }
        }
    }
}
