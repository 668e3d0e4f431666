//! # SDL2 Handles
//!
//! Ownership-safe wrappers around the SDL2 C API: one session per process,
//! windows, renderers, surfaces, textures, an event poller and a timer.
//!
//! ## Ownership
//!
//! Every native resource is released exactly once, in dependency order:
//!
//! - [`Session`] is created behind an `Rc`; windows, pollers and timers hold
//!   a clone, so native shutdown waits for the last of them.
//! - [`Window`] is created behind an `Rc`; each [`Renderer`] holds a clone.
//! - [`Texture`] borrows the renderer that made it and cannot outlive it.
//! - [`Surface`] is standalone and freed on drop.
//!
//! None of the handles are `Send`; the native library is single-threaded.
//!
//! ## Backends
//!
//! Handles are generic over [`Backend`]. Enable the `sdl2` cargo feature for
//! the native implementation and its [`SdlSession`]-style aliases.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sdl2_handles::prelude::*;
//!
//! let session = SdlSession::init(InitFlags::EVERYTHING)?;
//! let window = session.window("demo", Dimensions::new(640, 480), WindowFlags::SHOWN)?;
//! let renderer = window.renderer(RendererFlags::ACCELERATED | RendererFlags::PRESENTVSYNC)?;
//! let texture = renderer.texture_from_bmp("face.bmp")?;
//! let mut event = session.event();
//! while !(event.poll() && event.event_type() == EventType::Quit) {
//!     renderer.clear_with(Color::BLACK)?;
//!     renderer.copy(&texture, None)?;
//!     renderer.present();
//! }
//! ```

#![warn(missing_docs)]

#[allow(unsafe_code)]
pub mod backend;
pub mod config;
pub mod error;
#[allow(unsafe_code)]
pub mod event;
pub mod flags;
pub mod keyboard;
pub mod logging;
#[allow(unsafe_code)]
pub mod renderer;
#[allow(unsafe_code)]
pub mod session;
#[allow(unsafe_code)]
pub mod surface;
#[allow(unsafe_code)]
pub mod texture;
pub mod timer;
pub mod types;
#[allow(unsafe_code)]
pub mod window;

pub use backend::Backend;
pub use config::{Config, ConfigError, DisplayConfig};
pub use error::{SdlError, SdlResult};
pub use event::Event;
pub use flags::{InitFlags, RendererFlags, WindowFlags};
pub use keyboard::{EventType, Keycode, Scancode};
pub use renderer::{CopyOptions, Renderer};
pub use session::Session;
pub use surface::Surface;
pub use texture::Texture;
pub use timer::Timer;
pub use types::{BlendMode, Color, Dimensions, Flip, Mouse, Point, Rect};
pub use window::Window;

#[cfg(feature = "sdl2")]
pub use backend::sdl2::Sdl2;

/// Session over the native library
#[cfg(feature = "sdl2")]
pub type SdlSession = Session<Sdl2>;
/// Window over the native library
#[cfg(feature = "sdl2")]
pub type SdlWindow = Window<Sdl2>;
/// Renderer over the native library
#[cfg(feature = "sdl2")]
pub type SdlRenderer = Renderer<Sdl2>;
/// Texture over the native library
#[cfg(feature = "sdl2")]
pub type SdlTexture<'r> = Texture<'r, Sdl2>;
/// Surface over the native library
#[cfg(feature = "sdl2")]
pub type SdlSurface = Surface<Sdl2>;
/// Event poller over the native library
#[cfg(feature = "sdl2")]
pub type SdlEvent = Event<Sdl2>;
/// Timer over the native library
#[cfg(feature = "sdl2")]
pub type SdlTimer = Timer<Sdl2>;

/// Common imports
pub mod prelude {
    pub use crate::config::{Config, DisplayConfig};
    pub use crate::error::{SdlError, SdlResult};
    pub use crate::flags::{InitFlags, RendererFlags, WindowFlags};
    pub use crate::keyboard::{EventType, Keycode, Scancode};
    pub use crate::renderer::CopyOptions;
    pub use crate::types::{BlendMode, Color, Dimensions, Flip, Mouse, Point, Rect};

    #[cfg(feature = "sdl2")]
    pub use crate::{
        Sdl2, SdlEvent, SdlRenderer, SdlSession, SdlSurface, SdlTexture, SdlTimer, SdlWindow,
    };
}
