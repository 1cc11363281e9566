//! Blob state store
//!
//! Holds the fixed set of animated shapes. The per-blob traits (radius
//! factor, noise offset, speed, colour) are drawn once at creation and never
//! change; position and radius follow the surface through [`BlobStore::rescale`].

use rand::Rng;

use crate::color::Rgba;
use crate::config::EngineConfig;
use crate::math::{Size, Vec2};

/// Traits drawn once per blob
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobTraits {
    /// Position of the radius between the configured min and max ratios, in `[0, 1)`
    pub radius_factor: f64,
    /// Origin of this blob's private region of the noise field
    pub noise_offset: [f64; 3],
    /// Multiplier on how fast motion and deformation respond to time, in `[0.8, 1.2]`
    pub speed_factor: f64,
    pub color: Rgba,
}

/// One animated shape
#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    id: usize,
    center: Vec2,
    radius: f64,
    traits: BlobTraits,
}

impl Blob {
    pub fn new(id: usize, center: Vec2, radius: f64, traits: BlobTraits) -> Self {
        Self {
            id,
            center,
            radius,
            traits,
        }
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn traits(&self) -> &BlobTraits {
        &self.traits
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.traits.color
    }

    #[inline]
    pub(crate) fn center_mut(&mut self) -> &mut Vec2 {
        &mut self.center
    }
}

/// The full set of blobs for one engine instance
#[derive(Clone, Debug)]
pub struct BlobStore {
    blobs: Vec<Blob>,
    size: Size,
}

impl BlobStore {
    /// Create `config.num_blobs` blobs scattered over `size`.
    ///
    /// Returns `None` while `size` is empty; the caller retries once the
    /// container has been laid out.
    pub fn initialize<R: Rng + ?Sized>(size: Size, config: &EngineConfig, rng: &mut R) -> Option<Self> {
        if size.is_empty() {
            log::trace!("blob store initialization deferred: surface is {:?}", size);
            return None;
        }

        let blobs = (0..config.num_blobs)
            .map(|id| {
                let center = Vec2::new(rng.gen::<f64>() * size.width, rng.gen::<f64>() * size.height);
                let traits = BlobTraits {
                    radius_factor: rng.gen::<f64>(),
                    noise_offset: [
                        rng.gen_range(0.0..1000.0),
                        rng.gen_range(0.0..1000.0),
                        rng.gen_range(0.0..1000.0),
                    ],
                    speed_factor: rng.gen_range(0.8..=1.2),
                    color: config.color_for(id),
                };
                let radius = config.radius_for(size.width, size.height, traits.radius_factor);
                Blob::new(id, center, radius, traits)
            })
            .collect();

        log::info!(
            "initialized {} blobs on {}x{} surface",
            config.num_blobs,
            size.width,
            size.height
        );
        Some(Self { blobs, size })
    }

    /// Build a store from existing blobs
    pub fn from_blobs(blobs: Vec<Blob>, size: Size) -> Self {
        Self { blobs, size }
    }

    /// Scale every blob from `old` to `new` surface dimensions.
    ///
    /// Does nothing when `old` is empty, since there is no valid baseline to
    /// scale from. Positions scale per axis; radii are recomputed from each
    /// blob's radius factor against `new`.
    pub fn rescale(&mut self, new: Size, old: Size, config: &EngineConfig) {
        if old.is_empty() {
            return;
        }

        let scale_x = new.width / old.width;
        let scale_y = new.height / old.height;

        for blob in &mut self.blobs {
            blob.center.x *= scale_x;
            blob.center.y *= scale_y;
            blob.radius = config.radius_for(new.width, new.height, blob.traits.radius_factor);
        }
        self.size = new;

        log::debug!(
            "rescaled {} blobs from {}x{} to {}x{}",
            self.blobs.len(),
            old.width,
            old.height,
            new.width,
            new.height
        );
    }

    /// Surface dimensions the blobs are currently laid out for
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    #[inline]
    pub(crate) fn blobs_mut(&mut self) -> &mut [Blob] {
        &mut self.blobs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
