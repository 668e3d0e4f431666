//! Process-wide library session
//!
//! A [`Session`] is the root of the ownership tree. Windows, event pollers and
//! timers hold an `Rc` back to it, so native shutdown runs only after the last
//! of them is gone.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::backend::Backend;
use crate::config::DisplayConfig;
use crate::error::{SdlError, SdlResult};
use crate::event::Event;
use crate::flags::{InitFlags, WindowFlags};
use crate::logging::lifecycle;
use crate::timer::Timer;
use crate::types::Dimensions;
use crate::window::Window;

/// The single live instance of the initialized native library
pub struct Session<B: Backend> {
    flags: InitFlags,
    // Raw pointer marker keeps the session on the thread that created it.
    _backend: PhantomData<*const B>,
}

impl<B: Backend> Session<B> {
    /// Initialize the native library
    ///
    /// Fails with [`SdlError::AlreadyInitialized`] while another session (or
    /// any other user of the library) has it initialized, and with
    /// [`SdlError::Init`] when native init reports failure. A failed init is
    /// rolled back so a later attempt starts clean.
    pub fn init(flags: InitFlags) -> SdlResult<Rc<Self>> {
        if B::was_init() {
            return Err(SdlError::AlreadyInitialized);
        }
        if B::init(flags) != 0 {
            let native = B::last_error();
            // Subsystems started before the failure would otherwise block the next init.
            unsafe { B::quit() };
            return Err(SdlError::Init { native });
        }
        lifecycle!("SDL initialized ({flags:?})");
        Ok(Rc::new(Self {
            flags,
            _backend: PhantomData,
        }))
    }

    /// Subsystems requested at init
    pub fn flags(&self) -> InitFlags {
        self.flags
    }

    /// Create a window
    pub fn window(
        self: &Rc<Self>,
        title: &str,
        dimensions: Dimensions,
        flags: WindowFlags,
    ) -> SdlResult<Rc<Window<B>>> {
        Window::create(Rc::clone(self), title, dimensions, flags).map(Rc::new)
    }

    /// Create a window from display configuration
    pub fn window_from_config(self: &Rc<Self>, config: &DisplayConfig) -> SdlResult<Rc<Window<B>>> {
        self.window(&config.title, config.dimensions(), config.window_flags)
    }

    /// Create an event poller
    pub fn event(self: &Rc<Self>) -> Event<B> {
        Event::new(Rc::clone(self))
    }

    /// Create a timer
    pub fn timer(self: &Rc<Self>) -> Timer<B> {
        Timer::new(Rc::clone(self))
    }
}

impl<B: Backend> Drop for Session<B> {
    fn drop(&mut self) {
        // Every child holds an Rc to the session, so none of them is live here.
        unsafe { B::quit() };
        lifecycle!("SDL terminated");
    }
}
