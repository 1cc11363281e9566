//! Browser [`Host`]: requestAnimationFrame, window resize events and the
//! canvas' parent element as the layout container

use aurora_engine::{FrameHandle, Host, ListenerHandle, Size};
use js_sys::Function;
use web_sys::{HtmlCanvasElement, Window};

use crate::surface::CanvasSurface;

const RESIZE_EVENT: &str = "resize";

/// Page-side resources one engine draws with
pub struct WebHost {
    window: Window,
    canvas: HtmlCanvasElement,
    surface: Option<CanvasSurface>,
    /// Invoked by requestAnimationFrame
    on_frame: Function,
    /// Registered on the window for `resize`
    on_resize: Function,
    next_listener: u32,
}

impl WebHost {
    pub fn new(window: Window, canvas: HtmlCanvasElement, on_frame: Function, on_resize: Function) -> Self {
        Self {
            window,
            canvas,
            surface: None,
            on_frame,
            on_resize,
            next_listener: 0,
        }
    }
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn surface(&mut self) -> Option<&mut CanvasSurface> {
        if self.surface.is_none() {
            match CanvasSurface::new(self.canvas.clone()) {
                Ok(surface) => self.surface = Some(surface),
                Err(e) => log::trace!("canvas context not ready: {:?}", e),
            }
        }
        self.surface.as_mut()
    }

    fn container_size(&self) -> Size {
        // A detached canvas has no layout yet; zero defers the engine
        match self.canvas.parent_element() {
            Some(parent) => Size::new(parent.client_width() as f64, parent.client_height() as f64),
            None => Size::ZERO,
        }
    }

    fn pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        match self.window.request_animation_frame(&self.on_frame) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, e);
        }
    }

    fn add_resize_listener(&mut self) -> Option<ListenerHandle> {
        match self
            .window
            .add_event_listener_with_callback(RESIZE_EVENT, &self.on_resize)
        {
            Ok(()) => {
                self.next_listener += 1;
                Some(ListenerHandle(self.next_listener))
            }
            Err(e) => {
                log::error!("failed to add resize listener: {:?}", e);
                None
            }
        }
    }

    fn remove_resize_listener(&mut self, handle: ListenerHandle) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, &self.on_resize)
        {
            log::warn!("failed to remove resize listener {}: {:?}", handle.0, e);
        }
    }
}
