//! Noise-deformed blob outlines

use std::f64::consts::TAU;

use crate::blob::Blob;
use crate::config::EngineConfig;
use crate::math::Vec2;
use crate::noise_field::NoiseField;

/// Closed outline of `blob` at `time`, `config.num_points` points long.
///
/// Walks a circle of radius `shape_noise_scale` through the blob's region of
/// the noise field. The third axis moves with time, damped so the shape
/// changes more slowly than the blob drifts. Each sample `n` pushes the
/// radius to `radius + n * radius`.
pub fn outline<N: NoiseField + ?Sized>(
    blob: &Blob,
    time: f64,
    config: &EngineConfig,
    noise: &N,
) -> Vec<Vec2> {
    let [ox, oy, oz] = blob.traits().noise_offset;
    let z = oz + time * config.animation_speed * blob.traits().speed_factor * config.shape_time_damping;
    let radius = blob.radius();
    let center = blob.center();
    let n = config.num_points;

    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * TAU;
            let dir = Vec2::from_angle(angle);
            let deformation = noise.sample(
                ox + dir.x * config.shape_noise_scale,
                oy + dir.y * config.shape_noise_scale,
                z,
            );
            let deformed = radius + deformation * radius;
            center + dir * deformed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::BlobTraits;
    use crate::color::Rgba;
    use crate::noise_field::SimplexNoise;

    struct Flat(f64);

    impl NoiseField for Flat {
        fn sample(&self, _x: f64, _y: f64, _z: f64) -> f64 {
            self.0
        }
    }

    fn blob() -> Blob {
        Blob::new(
            0,
            Vec2::new(120.0, 80.0),
            50.0,
            BlobTraits {
                radius_factor: 0.3,
                noise_offset: [10.0, 20.0, 30.0],
                speed_factor: 1.1,
                color: Rgba::rgb(0, 0, 0),
            },
        )
    }

    #[test]
    fn test_outline_length_matches_config() {
        let config = EngineConfig {
            num_points: 17,
            ..EngineConfig::default()
        };
        assert_eq!(outline(&blob(), 0.0, &config, &Flat(0.0)).len(), 17);
    }

    #[test]
    fn test_zero_noise_gives_circle() {
        let config = EngineConfig::default();
        let b = blob();
        for p in outline(&b, 1234.0, &config, &Flat(0.0)) {
            assert!((p.distance(b.center()) - b.radius()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_noise_scales_radius() {
        let config = EngineConfig::default();
        let b = blob();
        for p in outline(&b, 0.0, &config, &Flat(0.5)) {
            assert!((p.distance(b.center()) - 75.0).abs() < 1e-9);
        }
        for p in outline(&b, 0.0, &config, &Flat(-1.0)) {
            assert!(p.distance(b.center()) < 1e-9);
        }
    }

    #[test]
    fn test_first_point_is_on_positive_x_axis() {
        let config = EngineConfig::default();
        let b = blob();
        let points = outline(&b, 0.0, &config, &Flat(0.0));
        assert!((points[0].x - 170.0).abs() < 1e-9);
        assert!((points[0].y - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_outline_is_deterministic() {
        let config = EngineConfig::default();
        let noise = SimplexNoise::new(2024);
        let b = blob();
        let first = outline(&b, 500.0, &config, &noise);
        let second = outline(&b, 500.0, &config, &noise);
        assert_eq!(first, second);
    }

    #[test]
    fn test_outline_changes_with_time() {
        let config = EngineConfig {
            animation_speed: 1.0,
            ..EngineConfig::default()
        };
        let noise = SimplexNoise::new(2024);
        let b = blob();
        assert_ne!(outline(&b, 0.0, &config, &noise), outline(&b, 3.0, &config, &noise));
    }
}
