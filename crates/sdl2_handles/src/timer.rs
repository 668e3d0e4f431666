//! Millisecond tick counter

use std::rc::Rc;

use crate::backend::Backend;
use crate::session::Session;

/// Reads time elapsed since the session started
pub struct Timer<B: Backend> {
    session: Rc<Session<B>>,
}

impl<B: Backend> Timer<B> {
    pub(crate) fn new(session: Rc<Session<B>>) -> Self {
        Self { session }
    }

    /// Milliseconds since init; wraps after about 49 days
    #[inline]
    pub fn ticks(&self) -> u32 {
        B::ticks()
    }

    /// Session this timer belongs to
    pub fn session(&self) -> &Rc<Session<B>> {
        &self.session
    }
}
