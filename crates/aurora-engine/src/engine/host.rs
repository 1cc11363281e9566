//! Host seam: everything the engine needs from the page

use crate::math::Size;
use crate::render::Surface;

/// Token for a scheduled animation frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Token for a registered resize listener
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u32);

/// The environment an [`Engine`](super::Engine) runs in.
///
/// All calls happen on the single thread that owns the engine. A host that
/// hands out a frame or listener handle must deliver the matching
/// `tick`/`on_resize` calls on that same thread until the handle is
/// released.
pub trait Host {
    type Surface: Surface;

    /// The drawing surface, if it exists yet
    fn surface(&mut self) -> Option<&mut Self::Surface>;

    /// Logical size of the container the surface fills
    fn container_size(&self) -> Size;

    /// Device pixels per logical pixel
    fn pixel_ratio(&self) -> f64;

    /// Ask for one `tick` on the next frame. `None` if the host cannot schedule.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Drop a frame request made with [`Host::request_frame`]
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start delivering `on_resize` calls
    fn add_resize_listener(&mut self) -> Option<ListenerHandle>;

    /// Stop delivering `on_resize` calls
    fn remove_resize_listener(&mut self, handle: ListenerHandle);
}
