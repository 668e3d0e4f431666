//! Native backend abstraction
//!
//! Every call into the native library goes through [`Backend`]. The handle
//! types in this crate are generic over it, which keeps the lifecycle logic in
//! one place and lets the test suite swap in an instrumented stand-in.
//!
//! # Module Organization
//!
//! - **`sdl2`**: the real backend over `sdl2-sys` (cargo feature `sdl2`)
//! - **`mock`**: thread-local counting backend, test builds only
//!
//! # Safety Contract
//!
//! Functions that take raw native handles are `unsafe`. Callers must pass
//! handles produced by the same backend that have not been destroyed yet, and
//! must only call them while a session is live. The handle wrappers uphold
//! this through ownership; nothing else in the crate calls them.

use std::ffi::CStr;

use crate::error::{SdlError, SdlResult};
use crate::flags::{InitFlags, RendererFlags, WindowFlags};
use crate::keyboard::Scancode;
use crate::types::{BlendMode, Color, Dimensions, Flip, Mouse, Point, Rect};

#[cfg(feature = "sdl2")]
pub mod sdl2;

#[cfg(test)]
pub(crate) mod mock;

/// Native status code, zero on success
pub type Status = i32;

/// Turn a native status into a result, reading the native error right away
#[inline]
pub(crate) fn check<B: Backend>(status: Status, what: &'static str) -> SdlResult<()> {
    if status == 0 {
        Ok(())
    } else {
        Err(SdlError::Operation {
            what,
            native: B::last_error(),
        })
    }
}

/// Native library entry points used by the handles
pub trait Backend: Sized + 'static {
    /// Raw window handle
    type Window: Copy;
    /// Raw renderer handle
    type Renderer: Copy;
    /// Raw texture handle
    type Texture: Copy;
    /// Raw surface handle
    type Surface: Copy;
    /// Storage for one polled event
    type Event;
    /// Live keyboard state view
    type Keyboard;

    /// Whether any subsystem is currently initialized
    fn was_init() -> bool;

    /// Initialize the requested subsystems
    fn init(flags: InitFlags) -> Status;

    /// Shut every subsystem down
    ///
    /// # Safety
    /// No native resource created since init may be used afterwards.
    unsafe fn quit();

    /// Last error message recorded by the native library
    fn last_error() -> String;

    /// Create a window at the origin; `None` on failure
    fn create_window(title: &CStr, size: Dimensions, flags: WindowFlags) -> Option<Self::Window>;

    /// # Safety
    /// `window` must be live; it is invalid afterwards.
    unsafe fn destroy_window(window: Self::Window);

    /// # Safety
    /// `window` must be live.
    unsafe fn create_renderer(window: Self::Window, flags: RendererFlags) -> Option<Self::Renderer>;

    /// # Safety
    /// `renderer` must be live; it and its textures are invalid afterwards.
    unsafe fn destroy_renderer(renderer: Self::Renderer);

    /// Load a bitmap file into a new surface; `None` on failure
    fn load_bmp(path: &CStr) -> Option<Self::Surface>;

    /// # Safety
    /// `surface` must be live; it is invalid afterwards.
    unsafe fn free_surface(surface: Self::Surface);

    /// # Safety
    /// Both handles must be live.
    unsafe fn create_texture_from_surface(
        renderer: Self::Renderer,
        surface: Self::Surface,
    ) -> Option<Self::Texture>;

    /// # Safety
    /// `texture` must be live; it is invalid afterwards.
    unsafe fn destroy_texture(texture: Self::Texture);

    /// # Safety
    /// `renderer` must be live.
    unsafe fn set_draw_color(renderer: Self::Renderer, color: Color) -> Status;

    /// # Safety
    /// `renderer` must be live.
    unsafe fn clear(renderer: Self::Renderer) -> Status;

    /// Fill `rect`, or the whole target when `None`
    ///
    /// # Safety
    /// `renderer` must be live.
    unsafe fn fill_rect(renderer: Self::Renderer, rect: Option<&Rect>) -> Status;

    /// Copy a texture with rotation and flipping
    ///
    /// `None` for `src`, `dst` or `center` selects the whole texture, the whole
    /// target and the destination's center respectively.
    ///
    /// # Safety
    /// Both handles must be live.
    #[allow(clippy::too_many_arguments)]
    unsafe fn copy_ex(
        renderer: Self::Renderer,
        texture: Self::Texture,
        src: Option<&Rect>,
        dst: Option<&Rect>,
        angle: f64,
        center: Option<&Point>,
        flip: Flip,
    ) -> Status;

    /// # Safety
    /// `renderer` must be live.
    unsafe fn present(renderer: Self::Renderer);

    /// # Safety
    /// `renderer` must be live.
    unsafe fn set_draw_blend_mode(renderer: Self::Renderer, mode: BlendMode) -> Status;

    /// # Safety
    /// `texture` must be live.
    unsafe fn set_texture_blend_mode(texture: Self::Texture, mode: BlendMode) -> Status;

    /// # Safety
    /// `texture` must be live.
    unsafe fn set_texture_color_mod(texture: Self::Texture, r: u8, g: u8, b: u8) -> Status;

    /// Zeroed event storage
    fn empty_event() -> Self::Event;

    /// Move the next queued event into `event`; `false` when the queue is empty
    ///
    /// # Safety
    /// A session must be live.
    unsafe fn poll_event(event: &mut Self::Event) -> bool;

    /// Native type tag of a polled event
    fn event_type(event: &Self::Event) -> u32;

    /// Key symbol of a polled keyboard event
    fn event_keycode(event: &Self::Event) -> i32;

    /// # Safety
    /// A session must be live.
    unsafe fn keyboard() -> Self::Keyboard;

    /// # Safety
    /// `keyboard` must come from [`Backend::keyboard`] within the live session.
    unsafe fn scancode_pressed(keyboard: &Self::Keyboard, scancode: Scancode) -> bool;

    /// # Safety
    /// A session must be live.
    unsafe fn mouse() -> Mouse;

    /// Milliseconds since init
    fn ticks() -> u32;
}
