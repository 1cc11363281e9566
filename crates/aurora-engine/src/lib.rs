//! Procedural animated background engine
//!
//! Renders softly deforming, slowly drifting colour blobs (or layered wave
//! bands) driven by 3D coherent noise. The crate is pure Rust: drawing and
//! scheduling go through the [`Surface`] and [`Host`] traits, so the whole
//! engine runs and tests without a browser.
//!
//! ## Architecture
//!
//! - [`noise_field`]: seeded coherent noise shared by every component
//! - [`blob`]: blob state store (initialize, rescale)
//! - [`shape`]: outline generators for blobs and wave bands
//! - [`motion`]: noise-driven drift with toroidal wrap
//! - [`viewport`]: container size tracking with change detection
//! - [`render`]: path and gradient commands plus the [`Surface`] trait
//! - [`Engine`]: the render loop state machine tying it all together
//!
//! ## Example
//!
//! ```rust
//! use aurora_engine::{Engine, EngineConfig};
//!
//! let config = EngineConfig::from_json(r#"{ "numBlobs": 3 }"#).unwrap();
//! let engine = Engine::new(config).unwrap();
//! assert_eq!(engine.config().num_blobs, 3);
//! assert!(engine.blobs().is_empty()); // created on first valid layout
//! ```
//!
//! ## Design Principles
//!
//! 1. **Single writer**: the engine owns all mutable state; hosts call in
//!    from one thread, so nothing is locked
//! 2. **Deferral over failure**: a missing surface or a zero-sized container
//!    postpones work to the next frame
//! 3. **One teardown path**: [`Engine::stop`] releases every host resource

pub mod blob;
pub mod math;
pub mod motion;
pub mod noise_field;
pub mod render;
pub mod shape;
pub mod viewport;

mod color;
mod config;
mod engine;
mod error;

pub use blob::{Blob, BlobStore, BlobTraits};
pub use color::Rgba;
pub use config::{BandConfig, EngineConfig, Style};
pub use engine::{band_fill, blob_fill, Engine, FrameHandle, Host, ListenerHandle, LoopState};
pub use error::{ColorError, ConfigError};
pub use math::{Size, Vec2};
pub use noise_field::{NoiseField, SimplexNoise};
pub use render::{Blend, Fill, GradientStop, LinearGradient, Path, PathCommand, RadialGradient, Surface};
pub use viewport::{ViewportAdapter, ViewportChange};
