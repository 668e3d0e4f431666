//! Input event polling
//!
//! The poller owns one native event record that [`Event::poll`] overwrites.
//! Key and mouse state come from the native library's live tables, which the
//! event pump refreshes as a side effect of polling.

use std::rc::Rc;

use crate::backend::Backend;
use crate::keyboard::{EventType, Keycode, Scancode};
use crate::session::Session;
use crate::types::Mouse;

/// Event poller holding the most recently polled event
pub struct Event<B: Backend> {
    raw: B::Event,
    keyboard: B::Keyboard,
    session: Rc<Session<B>>,
}

impl<B: Backend> Event<B> {
    pub(crate) fn new(session: Rc<Session<B>>) -> Self {
        // The session is live for as long as the poller holds it.
        let keyboard = unsafe { B::keyboard() };
        Self {
            raw: B::empty_event(),
            keyboard,
            session,
        }
    }

    /// Pull the next pending event; `false` when none is queued
    #[inline]
    pub fn poll(&mut self) -> bool {
        unsafe { B::poll_event(&mut self.raw) }
    }

    /// Type of the last polled event
    pub fn event_type(&self) -> EventType {
        EventType::from_raw(B::event_type(&self.raw))
    }

    /// Key of the last polled event; only meaningful for key events
    pub fn keycode(&self) -> Keycode {
        Keycode(B::event_keycode(&self.raw))
    }

    /// Whether the key at `scancode` is currently held
    pub fn has_scancode(&self, scancode: Scancode) -> bool {
        unsafe { B::scancode_pressed(&self.keyboard, scancode) }
    }

    /// Current cursor position and button state
    pub fn mouse(&self) -> Mouse {
        unsafe { B::mouse() }
    }

    /// Session this poller belongs to
    pub fn session(&self) -> &Rc<Session<B>> {
        &self.session
    }
}
