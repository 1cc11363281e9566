//! Render loop controller
//!
//! [`Engine`] owns all animation state: the blob store, the clock, the
//! viewport and the loop lifecycle. Hosts drive it through four entry
//! points, all on one thread:
//!
//! - [`Engine::start`] on mount: registers the resize listener and asks
//!   for the first frame
//! - [`Engine::tick`] once per delivered frame: draws and re-arms
//! - [`Engine::on_resize`] from the resize listener
//! - [`Engine::stop`] on unmount: the single teardown path, releasing the
//!   pending frame and the listener
//!
//! A tick without a surface or with a zero-sized container draws nothing
//! and simply asks for another frame.

mod host;
mod rendering;
mod state;

pub use host::{FrameHandle, Host, ListenerHandle};
pub use rendering::{band_fill, blob_fill};
pub use state::LoopState;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::blob::{Blob, BlobStore};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::noise_field::{NoiseField, SimplexNoise};
use crate::render::Surface;
use crate::viewport::ViewportAdapter;

/// Procedural background engine
pub struct Engine<N: NoiseField = SimplexNoise> {
    config: EngineConfig,
    noise: N,
    rng: StdRng,
    store: Option<BlobStore>,
    viewport: ViewportAdapter,
    clock: f64,
    state: LoopState,
    mounted: bool,
    backing_dirty: bool,
    pending_frame: Option<FrameHandle>,
    resize_listener: Option<ListenerHandle>,
}

impl Engine<SimplexNoise> {
    /// Create an engine with a randomly seeded noise field
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let noise = SimplexNoise::random();
        log::debug!("noise field seeded with {}", noise.seed());
        Ok(Self::assemble(config, noise, StdRng::from_entropy()))
    }
}

impl<N: NoiseField> Engine<N> {
    /// Create an engine with a given noise field and a seeded blob generator
    pub fn with_noise(config: EngineConfig, noise: N, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, noise, StdRng::seed_from_u64(seed)))
    }

    fn assemble(config: EngineConfig, noise: N, rng: StdRng) -> Self {
        Self {
            config,
            noise,
            rng,
            store: None,
            viewport: ViewportAdapter::new(),
            clock: 0.0,
            state: LoopState::Unstarted,
            mounted: false,
            backing_dirty: true,
            pending_frame: None,
            resize_listener: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Mount: listen for resizes and schedule the first frame
    pub fn start<H: Host>(&mut self, host: &mut H) {
        if self.mounted || self.state == LoopState::Stopped {
            log::warn!("start ignored: engine is {}", self.state.id());
            return;
        }
        self.mounted = true;

        self.resize_listener = host.add_resize_listener();
        if self.resize_listener.is_none() {
            log::warn!("host refused a resize listener; surface size is polled per frame");
        }

        self.sync_viewport(host);
        self.schedule(host);
        log::info!("render loop started");
    }

    /// Unmount: cancel the pending frame, drop the listener, discard state.
    ///
    /// Safe to call more than once; only the first call does anything.
    pub fn stop<H: Host>(&mut self, host: &mut H) {
        if !self.state.is_live() {
            return;
        }

        if let Some(frame) = self.pending_frame.take() {
            host.cancel_frame(frame);
        }
        if let Some(listener) = self.resize_listener.take() {
            host.remove_resize_listener(listener);
        }

        self.state = LoopState::Stopped;
        self.store = None;
        log::info!("render loop stopped after {} time units", self.clock);
    }

    /// Resize notification from the host
    pub fn on_resize<H: Host>(&mut self, host: &mut H) {
        if !self.state.is_live() || self.resize_listener.is_none() {
            return;
        }
        self.sync_viewport(host);
    }

    /// One animation frame
    pub fn tick<H: Host>(&mut self, host: &mut H) {
        if !self.state.is_live() || !self.mounted {
            return;
        }
        self.pending_frame = None;

        self.sync_viewport(host);
        let size = self.viewport.size();

        let Self {
            config,
            noise,
            store,
            clock,
            state,
            ..
        } = self;

        let drawn = match (host.surface(), store.as_mut()) {
            (Some(surface), Some(store)) if !size.is_empty() => {
                if *state == LoopState::Unstarted {
                    *state = LoopState::Running;
                    log::info!("surface ready at {}x{}, animation running", size.width, size.height);
                }
                rendering::draw_frame(surface, store, size, *clock, config, noise);
                true
            }
            _ => false,
        };

        if drawn {
            self.clock += self.config.time_step;
        } else {
            log::trace!("frame deferred: surface not ready or {:?}", size);
        }

        self.schedule(host);
    }

    fn schedule<H: Host>(&mut self, host: &mut H) {
        self.pending_frame = host.request_frame();
        if self.pending_frame.is_none() {
            log::warn!("host could not schedule the next frame");
        }
    }

    /// Pull the container size from the host and apply any change
    fn sync_viewport<H: Host>(&mut self, host: &mut H) {
        if let Some(change) = self
            .viewport
            .observe(host.container_size(), host.pixel_ratio())
        {
            self.backing_dirty = true;

            if change.size_changed() && !change.current.is_empty() {
                match self.store.as_mut() {
                    Some(store) => {
                        let old = store.size();
                        store.rescale(change.current, old, &self.config);
                    }
                    None => {
                        self.store = BlobStore::initialize(change.current, &self.config, &mut self.rng);
                    }
                }
            }
        }

        let size = self.viewport.size();
        if self.backing_dirty && !size.is_empty() {
            if let Some(surface) = host.surface() {
                surface.resize(size, self.viewport.pixel_ratio());
                self.backing_dirty = false;
            }
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Animation clock, advanced by `time_step` per drawn frame
    #[inline]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn noise(&self) -> &N {
        &self.noise
    }

    #[inline]
    pub fn viewport(&self) -> &ViewportAdapter {
        &self.viewport
    }

    #[inline]
    pub fn store(&self) -> Option<&BlobStore> {
        self.store.as_ref()
    }

    /// Current blobs; empty before the first valid layout and after stop
    pub fn blobs(&self) -> &[Blob] {
        self.store.as_ref().map(BlobStore::blobs).unwrap_or(&[])
    }

    /// Whether a frame request is outstanding
    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// Whether the resize listener is registered
    #[inline]
    pub fn has_resize_listener(&self) -> bool {
        self.resize_listener.is_some()
    }
}

impl<N: NoiseField> std::fmt::Debug for Engine<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("clock", &self.clock)
            .field("size", &self.viewport.size())
            .field("blobs", &self.blobs().len())
            .finish()
    }
}
