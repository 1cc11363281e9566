//! Layered wave-band outlines

use crate::config::EngineConfig;
use crate::math::{Size, Vec2};
use crate::noise_field::NoiseField;

/// Closed outline of wave band `layer` spanning the full surface width.
///
/// The top edge runs left to right, the bottom edge right to left, so the
/// result can be filled as a single polygon. Both edges scroll through the
/// noise in opposite directions; the bottom edge swings wider.
pub fn band_outline<N: NoiseField + ?Sized>(
    layer: usize,
    size: Size,
    time: f64,
    config: &EngineConfig,
    noise: &N,
) -> Vec<Vec2> {
    if size.is_empty() {
        return Vec::new();
    }

    let bands = &config.bands;
    let scaled = time * config.animation_speed;
    let shift = scaled * bands.horizontal_drift;
    let drift = scaled * bands.vertical_drift;
    let layer_f = layer as f64;
    let base = layer_f * bands.layer_offset;
    let mid = size.height / 2.0;
    let amplitude = size.height * bands.amplitude;

    let steps = (size.width / bands.step).floor() as usize;
    let xs = (0..=steps).map(|k| k as f64 * bands.step);

    let mut points = Vec::with_capacity(2 * (steps + 1));
    points.extend(xs.clone().map(|x| {
        let n = noise.sample(x * config.noise_scale + base + shift, drift, 0.0);
        Vec2::new(x, mid + n * amplitude - layer_f * bands.top_shift)
    }));
    points.extend(xs.rev().map(|x| {
        let n = noise.sample(x * config.noise_scale + base - shift, drift, 1.0);
        Vec2::new(
            x,
            mid + n * amplitude * bands.bottom_amplitude + layer_f * bands.bottom_shift,
        )
    }));
    points
}
