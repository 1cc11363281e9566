//! Browser host for the aurora background engine
//!
//! Exposes [`AuroraBackground`] to JavaScript. The page hands over a
//! `<canvas>` placed inside the container the background should fill:
//!
//! ```js
//! const bg = new AuroraBackground(canvas, JSON.stringify({ numBlobs: 5 }));
//! bg.start();
//! // ... on unmount
//! bg.stop();
//! ```
//!
//! Drawing uses the Canvas 2D context, scheduling uses
//! `requestAnimationFrame`, and the canvas' parent element provides the
//! layout size. Everything runs on the main thread.

mod host;
mod logger;
mod surface;

pub use host::WebHost;
pub use surface::CanvasSurface;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use aurora_engine::{Engine, EngineConfig};
use js_sys::Function;
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Engine plus the page resources it draws with
struct Shared {
    engine: Engine,
    host: WebHost,
    // Kept alive for as long as the host may hand them to the browser
    _on_frame: Closure<dyn FnMut(f64)>,
    _on_resize: Closure<dyn FnMut()>,
}

impl Shared {
    fn tick(&mut self) {
        let Self { engine, host, .. } = self;
        engine.tick(host);
    }

    fn on_resize(&mut self) {
        let Self { engine, host, .. } = self;
        engine.on_resize(host);
    }
}

/// Run `f` against the shared state if it is still alive and not in use
fn with_shared(weak: &Weak<RefCell<Shared>>, f: impl FnOnce(&mut Shared)) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    match shared.try_borrow_mut() {
        Ok(mut shared) => f(&mut *shared),
        Err(_) => log::warn!("callback re-entered a busy engine; skipped"),
    };
}

/// Animated background bound to one canvas
#[wasm_bindgen]
pub struct AuroraBackground {
    shared: Rc<RefCell<Shared>>,
}

#[wasm_bindgen]
impl AuroraBackground {
    /// Create a background for `canvas`.
    ///
    /// `config_json` holds any subset of the engine options in camelCase;
    /// missing keys keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<AuroraBackground, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        logger::init(if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });

        let config = match config_json.as_deref() {
            Some(json) => EngineConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => EngineConfig::default(),
        };

        let engine = Engine::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

        let shared = Rc::new_cyclic(|weak: &Weak<RefCell<Shared>>| {
            let on_frame = {
                let weak = weak.clone();
                Closure::wrap(Box::new(move |_timestamp: f64| {
                    with_shared(&weak, Shared::tick);
                }) as Box<dyn FnMut(f64)>)
            };
            let on_resize = {
                let weak = weak.clone();
                Closure::wrap(Box::new(move || {
                    with_shared(&weak, Shared::on_resize);
                }) as Box<dyn FnMut()>)
            };

            let host = WebHost::new(
                window,
                canvas,
                on_frame.as_ref().unchecked_ref::<Function>().clone(),
                on_resize.as_ref().unchecked_ref::<Function>().clone(),
            );

            RefCell::new(Shared {
                engine,
                host,
                _on_frame: on_frame,
                _on_resize: on_resize,
            })
        });

        Ok(Self { shared })
    }

    /// Mount: begin listening and animating
    #[wasm_bindgen]
    pub fn start(&self) {
        let mut shared = self.shared.borrow_mut();
        let Shared { engine, host, .. } = &mut *shared;
        engine.start(host);
    }

    /// Unmount: cancel the pending frame and remove the resize listener.
    /// The background cannot be restarted afterwards.
    #[wasm_bindgen]
    pub fn stop(&self) {
        let mut shared = self.shared.borrow_mut();
        let Shared { engine, host, .. } = &mut *shared;
        engine.stop(host);
    }

    /// Whether frames are being drawn
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.shared.borrow().engine.is_running()
    }

    #[wasm_bindgen(js_name = blobCount)]
    pub fn blob_count(&self) -> usize {
        self.shared.borrow().engine.blobs().len()
    }

    /// Lifecycle state: `unstarted`, `running` or `stopped`
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        self.shared.borrow().engine.state().id().to_string()
    }
}

impl Drop for AuroraBackground {
    fn drop(&mut self) {
        // Freed from JS without stop(): release the frame and listener
        // before the closures they point at go away
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            let Shared { engine, host, .. } = &mut *shared;
            engine.stop(host);
        }
    }
}
