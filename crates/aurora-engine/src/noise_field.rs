//! Coherent noise source
//!
//! One field is seeded per engine and shared by motion, deformation and the
//! wave bands. Callers get independent regions of it by offsetting their
//! input coordinates.

use noise::{NoiseFn, OpenSimplex};

/// A continuous, deterministic 3D scalar field with values in `[-1, 1]`.
pub trait NoiseField {
    /// Sample the field at `(x, y, z)`.
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<N: NoiseField + ?Sized> NoiseField for &N {
    #[inline]
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).sample(x, y, z)
    }
}

/// Simplex-type gradient noise with a fixed seed.
///
/// There is no way to reseed an existing instance; build a new one instead.
pub struct SimplexNoise {
    seed: u32,
    inner: OpenSimplex,
}

impl SimplexNoise {
    /// Create a field from an explicit seed
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            inner: OpenSimplex::new(seed),
        }
    }

    /// Create a field from a random seed
    pub fn random() -> Self {
        Self::new(rand::random())
    }

    /// The seed this field was built with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseField for SimplexNoise {
    #[inline]
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let value = self.inner.get([x, y, z]);
        if value.is_nan() {
            0.0
        } else {
            value.clamp(-1.0, 1.0)
        }
    }
}

impl std::fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise").field("seed", &self.seed).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_is_deterministic() {
        let a = SimplexNoise::new(42);
        let b = SimplexNoise::new(42);
        for i in 0..50 {
            let p = i as f64 * 0.37;
            assert_eq!(a.sample(p, p * 2.0, 1000.0 - p), b.sample(p, p * 2.0, 1000.0 - p));
        }
    }

    #[test]
    fn test_simplex_stays_in_range() {
        let n = SimplexNoise::new(7);
        for i in 0..2000 {
            let t = i as f64;
            let v = n.sample(t * 0.013, t * 0.071 - 40.0, t * 0.5);
            assert!((-1.0..=1.0).contains(&v), "sample {} out of range", v);
        }
    }

    #[test]
    fn test_simplex_is_continuous() {
        let n = SimplexNoise::new(3);
        let base = n.sample(12.3, 45.6, 78.9);
        let near = n.sample(12.3 + 1e-6, 45.6, 78.9);
        assert!((base - near).abs() < 1e-3);
    }

    #[test]
    fn test_simplex_total_on_large_inputs() {
        let n = SimplexNoise::new(11);
        for v in [n.sample(1e6, -1e6, 0.0), n.sample(-123456.75, 0.5, 999.0)] {
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(SimplexNoise::new(99).seed(), 99);
    }
}
