//! Motion integrator
//!
//! Blobs drift by sampling the noise field along two time-shifted axes of
//! their private region. Surfaces wrap toroidally: a blob that fully leaves
//! one edge re-enters past the opposite edge, keeping its overshoot.

use crate::blob::Blob;
use crate::config::EngineConfig;
use crate::math::{Size, Vec2};
use crate::noise_field::NoiseField;

/// Noise displacement for `blob` at `time`, before gain is applied
pub fn displacement<N: NoiseField + ?Sized>(
    blob: &Blob,
    time: f64,
    config: &EngineConfig,
    noise: &N,
) -> Vec2 {
    let [ox, oy, oz] = blob.traits().noise_offset;
    let advance = time * config.animation_speed * blob.traits().speed_factor;
    Vec2::new(
        noise.sample(ox + advance, oy, oz),
        noise.sample(ox, oy + advance, oz),
    )
}

/// Advance one blob by one tick and wrap it around the surface
pub fn integrate<N: NoiseField + ?Sized>(
    blob: &mut Blob,
    size: Size,
    time: f64,
    config: &EngineConfig,
    noise: &N,
) {
    let step = displacement(blob, time, config, noise) * config.drift_gain;
    let radius = blob.radius();
    let center = blob.center_mut();
    *center += step;
    center.x = wrap_axis(center.x, size.width, radius);
    center.y = wrap_axis(center.y, size.height, radius);
}

/// Wrap a coordinate on an axis of length `extent` padded by `radius` on both sides
#[inline]
pub fn wrap_axis(value: f64, extent: f64, radius: f64) -> f64 {
    let period = extent + 2.0 * radius;
    if value < -radius {
        value + period
    } else if value > extent + radius {
        value - period
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::BlobTraits;
    use crate::color::Rgba;

    struct Flat(f64);

    impl NoiseField for Flat {
        fn sample(&self, _x: f64, _y: f64, _z: f64) -> f64 {
            self.0
        }
    }

    /// Returns `x` for samples whose first axis moved off the origin and `y` otherwise
    struct Axis {
        x: f64,
        y: f64,
    }

    impl NoiseField for Axis {
        fn sample(&self, x: f64, _y: f64, _z: f64) -> f64 {
            if x != 0.0 {
                self.x
            } else {
                self.y
            }
        }
    }

    fn blob_at(x: f64, y: f64, radius: f64) -> Blob {
        Blob::new(
            0,
            Vec2::new(x, y),
            radius,
            BlobTraits {
                radius_factor: 0.5,
                noise_offset: [0.0, 0.0, 0.0],
                speed_factor: 1.0,
                color: Rgba::rgb(255, 255, 255),
            },
        )
    }

    #[test]
    fn test_zero_noise_leaves_center() {
        let config = EngineConfig::default();
        let mut blob = blob_at(10.0, 20.0, 5.0);
        integrate(&mut blob, Size::new(100.0, 100.0), 42.0, &config, &Flat(0.0));
        assert_eq!(blob.center(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_drift_applies_gain() {
        let config = EngineConfig::default();
        let mut blob = blob_at(10.0, 20.0, 5.0);
        integrate(&mut blob, Size::new(100.0, 100.0), 0.0, &config, &Flat(1.0));
        assert!((blob.center().x - 10.5).abs() < 1e-12);
        assert!((blob.center().y - 20.5).abs() < 1e-12);
    }

    #[test]
    fn test_displacement_uses_time_shifted_axes() {
        let config = EngineConfig {
            animation_speed: 1.0,
            ..EngineConfig::default()
        };
        let blob = blob_at(0.0, 0.0, 1.0);
        let d = displacement(&blob, 2.0, &config, &Axis { x: 0.25, y: -0.75 });
        assert_eq!(d, Vec2::new(0.25, -0.75));
    }

    #[test]
    fn test_wrap_left_edge() {
        let config = EngineConfig::default();
        let radius = 30.0;
        let eps = 0.5;
        let mut blob = blob_at(-radius - eps, 50.0, radius);
        integrate(&mut blob, Size::new(400.0, 300.0), 0.0, &config, &Flat(0.0));
        assert!((blob.center().x - (400.0 + radius - eps)).abs() < 1e-9);
        assert_eq!(blob.center().y, 50.0);
    }

    #[test]
    fn test_wrap_right_and_bottom_edges() {
        let config = EngineConfig::default();
        let radius = 10.0;
        let mut blob = blob_at(400.0 + radius + 2.0, 300.0 + radius + 1.0, radius);
        integrate(&mut blob, Size::new(400.0, 300.0), 0.0, &config, &Flat(0.0));
        assert!((blob.center().x - (-radius + 2.0)).abs() < 1e-9);
        assert!((blob.center().y - (-radius + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_no_wrap_inside_padding() {
        assert_eq!(wrap_axis(-10.0, 100.0, 10.0), -10.0);
        assert_eq!(wrap_axis(110.0, 100.0, 10.0), 110.0);
        assert_eq!(wrap_axis(55.0, 100.0, 10.0), 55.0);
    }
}
